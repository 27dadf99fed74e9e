pub mod app;
pub mod current;
pub mod datasource;
pub mod lesson;
pub(crate) mod lesson_validation;
pub mod parity;
pub mod persistence;
pub mod resolve;
pub mod settings;
pub mod timetable;
pub mod update;

pub use app::{NavCommand, Screen, ScreenController};
pub use current::{CurrentLesson, resolve_current};
pub use datasource::{
    CsvLessonSource, DataSourceError, LessonDataSource, Refresher, RequestStatus, ScheduleQuery,
    StaticLessonSource,
};
pub use lesson::Lesson;
pub use lesson_validation::LessonValidationError;
pub use parity::{WeekParity, apply_override, parity_for, pin_flag, week_parity};
#[cfg(feature = "sqlite")]
pub use persistence::sqlite::SqliteStore;
pub use persistence::{
    JsonSettingsStore, PersistenceError, SettingsStore, TimetableStore, load_lessons_from_csv,
    load_lessons_from_json, save_lessons_to_csv, save_lessons_to_json, validate_lessons,
};
pub use resolve::{ResolvedDay, resolve_day, role_filter_matches};
pub use settings::{Role, SETTINGS_SCHEMA_VERSION, Settings, SettingsManager};
pub use timetable::Timetable;
pub use update::{DownloadStatus, Release, ReleaseChecker, UpdateError, check_for_update};
