use crate::current::{CurrentLesson, resolve_current};
use crate::lesson::Lesson;
use crate::lesson_validation::{self, LessonValidationError};
use crate::resolve::{ResolvedDay, resolve_day};
use crate::settings::Settings;
use chrono::{Duration, NaiveDate, NaiveTime};

/// The lesson collection behind the schedule view.
///
/// Holds the raw recurring lessons as an immutable-per-query snapshot; all
/// per-date answers are computed on demand through [`resolve_day`] and
/// discarded. A refresh from the data source swaps the whole collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timetable {
    lessons: Vec<Lesson>,
}

impl Timetable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lessons(lessons: Vec<Lesson>) -> Result<Self, LessonValidationError> {
        lesson_validation::validate_lesson_collection(&lessons)?;
        Ok(Self { lessons })
    }

    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    pub fn add_lesson(&mut self, lesson: Lesson) -> Result<(), LessonValidationError> {
        lesson_validation::validate_lesson(&lesson)?;
        self.lessons.push(lesson);
        Ok(())
    }

    /// Replaces the whole collection with a fresh sync result.
    pub fn replace_all(&mut self, lessons: Vec<Lesson>) -> Result<(), LessonValidationError> {
        lesson_validation::validate_lesson_collection(&lessons)?;
        self.lessons = lessons;
        Ok(())
    }

    /// The per-date view; see [`crate::resolve::resolve_day`].
    pub fn resolve_day(&self, date: NaiveDate, settings: &Settings) -> ResolvedDay {
        resolve_day(&self.lessons, date, settings)
    }

    /// Convenience over [`crate::current::resolve_current`] for a freshly
    /// resolved day.
    pub fn current_lesson(
        &self,
        date: NaiveDate,
        settings: &Settings,
        now: NaiveTime,
        today: NaiveDate,
    ) -> CurrentLesson {
        let resolved = self.resolve_day(date, settings);
        resolve_current(&resolved.primary, now, date == today)
    }

    /// Lazy, restartable sequence of day views for a paged UI: one
    /// [`ResolvedDay`] per consecutive date starting at `start`. Each call
    /// recomputes from the current collection, so consumers re-render by
    /// simply iterating again.
    pub fn day_views<'a>(
        &'a self,
        start: NaiveDate,
        pages: usize,
        settings: &'a Settings,
    ) -> impl Iterator<Item = ResolvedDay> + 'a {
        (0..pages as i64).map(move |offset| self.resolve_day(start + Duration::days(offset), settings))
    }

    /// Distinct subgroup identifiers present in the data, sorted. Feeds the
    /// subgroup picker in a settings screen.
    pub fn subgroups(&self) -> Vec<String> {
        let mut subgroups: Vec<String> = self
            .lessons
            .iter()
            .filter_map(|lesson| lesson.sub_group.clone())
            .collect();
        subgroups.sort();
        subgroups.dedup();
        subgroups
    }

    /// Distinct teacher names present in the data, sorted.
    pub fn teachers(&self) -> Vec<String> {
        let mut teachers: Vec<String> = self
            .lessons
            .iter()
            .filter_map(|lesson| lesson.teacher.clone())
            .collect();
        teachers.sort();
        teachers.dedup();
        teachers
    }
}
