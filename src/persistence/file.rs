use super::{PersistenceError, PersistenceResult, SettingsStore};
use crate::lesson::Lesson;
use crate::parity::WeekParity;
use crate::settings::Settings;
use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Serialize, Deserialize)]
struct TimetableSnapshot {
    lessons: Vec<Lesson>,
}

pub fn save_lessons_to_json<P: AsRef<Path>>(lessons: &[Lesson], path: P) -> PersistenceResult<()> {
    super::validate_lessons(lessons)?;
    let snapshot = TimetableSnapshot {
        lessons: lessons.to_vec(),
    };
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &snapshot)?;
    Ok(())
}

pub fn load_lessons_from_json<P: AsRef<Path>>(path: P) -> PersistenceResult<Vec<Lesson>> {
    let file = File::open(path)?;
    let snapshot: TimetableSnapshot = serde_json::from_reader(file)?;
    super::validate_lessons(&snapshot.lessons)?;
    Ok(snapshot.lessons)
}

#[derive(Default, Serialize, Deserialize)]
struct LessonCsvRecord {
    name: String,
    day_of_week: String,
    start_time: String,
    end_time: String,
    frequency: String,
    sub_group: String,
    teacher: String,
    room: String,
}

impl From<&Lesson> for LessonCsvRecord {
    fn from(lesson: &Lesson) -> Self {
        Self {
            name: lesson.name.clone(),
            day_of_week: format_weekday(lesson.day_of_week).to_string(),
            start_time: format_time(lesson.start_time),
            end_time: format_time(lesson.end_time),
            frequency: lesson
                .frequency
                .map(|parity| parity.as_str().to_string())
                .unwrap_or_default(),
            sub_group: lesson.sub_group.clone().unwrap_or_default(),
            teacher: lesson.teacher.clone().unwrap_or_default(),
            room: lesson.room.clone().unwrap_or_default(),
        }
    }
}

impl LessonCsvRecord {
    fn into_lesson(self) -> PersistenceResult<Lesson> {
        let mut lesson = Lesson::new(
            self.name,
            parse_weekday(&self.day_of_week)?,
            parse_time(&self.start_time)?,
            parse_time(&self.end_time)?,
        );
        lesson.frequency = parse_frequency(&self.frequency)?;
        lesson.sub_group = parse_string_option(self.sub_group);
        lesson.teacher = parse_string_option(self.teacher);
        lesson.room = parse_string_option(self.room);
        Ok(lesson)
    }
}

pub fn save_lessons_to_csv<P: AsRef<Path>>(lessons: &[Lesson], path: P) -> PersistenceResult<()> {
    super::validate_lessons(lessons)?;
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);
    for lesson in lessons {
        writer.serialize(LessonCsvRecord::from(lesson))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn load_lessons_from_csv<P: AsRef<Path>>(path: P) -> PersistenceResult<Vec<Lesson>> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);
    let mut lessons = Vec::new();
    for record in reader.deserialize::<LessonCsvRecord>() {
        lessons.push(record?.into_lesson()?);
    }
    super::validate_lessons(&lessons)?;
    Ok(lessons)
}

pub fn save_settings_to_json<P: AsRef<Path>>(
    settings: &Settings,
    path: P,
) -> PersistenceResult<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, settings)?;
    Ok(())
}

pub fn load_settings_from_json<P: AsRef<Path>>(path: P) -> PersistenceResult<Settings> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(file)?)
}

/// [`SettingsStore`] backed by a single JSON document. A missing file loads
/// as `None` rather than an error, matching the first-run state.
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl SettingsStore for JsonSettingsStore {
    fn save_settings(&self, settings: &Settings) -> PersistenceResult<()> {
        save_settings_to_json(settings, &self.path)
    }

    fn load_settings(&self) -> PersistenceResult<Option<Settings>> {
        if !self.path.exists() {
            return Ok(None);
        }
        load_settings_from_json(&self.path).map(Some)
    }
}

fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

fn parse_time(input: &str) -> PersistenceResult<NaiveTime> {
    let trimmed = input.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|e| PersistenceError::InvalidData(format!("invalid time '{input}': {e}")))
}

fn format_weekday(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "mon",
        Weekday::Tue => "tue",
        Weekday::Wed => "wed",
        Weekday::Thu => "thu",
        Weekday::Fri => "fri",
        Weekday::Sat => "sat",
        Weekday::Sun => "sun",
    }
}

fn parse_weekday(input: &str) -> PersistenceResult<Weekday> {
    Weekday::from_str(input.trim())
        .map_err(|_| PersistenceError::InvalidData(format!("invalid weekday '{input}'")))
}

fn parse_frequency(input: &str) -> PersistenceResult<Option<WeekParity>> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    WeekParity::from_str(input)
        .map(Some)
        .ok_or_else(|| PersistenceError::InvalidData(format!("invalid frequency '{input}'")))
}

fn parse_string_option(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
