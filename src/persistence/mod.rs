use crate::lesson::Lesson;
use crate::lesson_validation;
use crate::settings::Settings;
use serde_json::Error as SerdeJsonError;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum PersistenceError {
    Serialization(SerdeJsonError),
    Io(io::Error),
    #[cfg(feature = "sqlite")]
    Sqlite(rusqlite::Error),
    Csv(csv::Error),
    InvalidData(String),
    NotFound,
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceError::Serialization(err) => write!(f, "serialization error: {err}"),
            PersistenceError::Io(err) => write!(f, "io error: {err}"),
            #[cfg(feature = "sqlite")]
            PersistenceError::Sqlite(err) => write!(f, "sqlite error: {err}"),
            PersistenceError::Csv(err) => write!(f, "csv error: {err}"),
            PersistenceError::InvalidData(msg) => write!(f, "invalid data: {msg}"),
            PersistenceError::NotFound => write!(f, "no timetable stored"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<SerdeJsonError> for PersistenceError {
    fn from(value: SerdeJsonError) -> Self {
        Self::Serialization(value)
    }
}

impl From<io::Error> for PersistenceError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for PersistenceError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<csv::Error> for PersistenceError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Storage for the lesson collection.
pub trait TimetableStore {
    fn save_lessons(&self, lessons: &[Lesson]) -> PersistenceResult<()>;
    fn load_lessons(&self) -> PersistenceResult<Option<Vec<Lesson>>>;
}

/// Storage for the versioned settings record. The [`SettingsManager`] is
/// the only intended writer.
///
/// [`SettingsManager`]: crate::settings::SettingsManager
pub trait SettingsStore {
    fn save_settings(&self, settings: &Settings) -> PersistenceResult<()>;
    fn load_settings(&self) -> PersistenceResult<Option<Settings>>;
}

pub fn validate_lessons(lessons: &[Lesson]) -> PersistenceResult<()> {
    lesson_validation::validate_lesson_collection(lessons)
        .map_err(|err| PersistenceError::InvalidData(err.to_string()))
}

pub mod file;
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use file::{
    JsonSettingsStore, load_lessons_from_csv, load_lessons_from_json, load_settings_from_json,
    save_lessons_to_csv, save_lessons_to_json, save_settings_to_json,
};
