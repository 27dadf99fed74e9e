use crate::lesson::Lesson;
use crate::parity::{self, WeekParity};
use crate::settings::{Role, Settings};
use chrono::{Datelike, NaiveDate};

/// Computed per-date view of the timetable. Derived on every query and
/// cheap to discard; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedDay {
    pub date: NaiveDate,
    pub parity: WeekParity,
    /// Lessons that actually take place on `date`, start-time order.
    pub primary: Vec<Lesson>,
    /// Lessons on the same weekday that belong to the opposite parity week,
    /// start-time order. Always computed; whether it is shown is a
    /// presentation decision.
    pub opposite_parity: Vec<Lesson>,
}

impl ResolvedDay {
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.opposite_parity.is_empty()
    }
}

/// Role-dependent visibility filter.
///
/// Students see group-wide lessons plus their own subgroup: an unset
/// subgroup on either side acts as a wildcard. Teachers see exactly the
/// lessons carrying their name; a teacher with no name configured sees an
/// empty schedule, which is the legitimate "not set up yet" state.
pub fn role_filter_matches(lesson: &Lesson, settings: &Settings) -> bool {
    match settings.role {
        Role::Student => {
            settings.subgroup.is_none()
                || lesson.sub_group.is_none()
                || lesson.sub_group == settings.subgroup
        }
        Role::Teacher => {
            settings.teacher_name.is_some() && lesson.teacher == settings.teacher_name
        }
    }
}

/// Resolves which lessons apply on `date` under the given settings.
///
/// Pure function of its inputs: the parity pin comes from the settings, the
/// weekday from the date, and ordering is stable, so identical inputs always
/// produce a structurally identical [`ResolvedDay`].
pub fn resolve_day(lessons: &[Lesson], date: NaiveDate, settings: &Settings) -> ResolvedDay {
    let parity = parity::parity_for(date, settings.frequency_matches_week_number);
    let weekday = date.weekday();

    let mut primary: Vec<Lesson> = lessons
        .iter()
        .filter(|lesson| {
            lesson.day_of_week == weekday
                && (lesson.frequency.is_none() || lesson.frequency == Some(parity))
                && role_filter_matches(lesson, settings)
        })
        .cloned()
        .collect();

    let mut opposite_parity: Vec<Lesson> = lessons
        .iter()
        .filter(|lesson| {
            lesson.day_of_week == weekday
                && lesson.frequency == Some(parity.opposite())
                && role_filter_matches(lesson, settings)
        })
        .cloned()
        .collect();

    // Stable sort keeps declaration order for equal start times.
    primary.sort_by_key(|lesson| lesson.start_time);
    opposite_parity.sort_by_key(|lesson| lesson.start_time);

    ResolvedDay {
        date,
        parity,
        primary,
        opposite_parity,
    }
}
