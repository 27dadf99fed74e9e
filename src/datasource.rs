use crate::lesson::Lesson;
use crate::persistence;
use crate::settings::{Role, Settings};
use crate::timetable::Timetable;
use log::{debug, warn};
use std::fmt;
use std::path::PathBuf;

/// What a data source should fetch. Built from the settings snapshot so a
/// source serving many groups can narrow its answer; sources are free to
/// ignore fields they cannot filter on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleQuery {
    pub role: Role,
    pub group_id: Option<String>,
    pub teacher_name: Option<String>,
}

impl ScheduleQuery {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            role: settings.role,
            group_id: settings.group_id.clone(),
            teacher_name: settings.teacher_name.clone(),
        }
    }
}

#[derive(Debug)]
pub enum DataSourceError {
    Unavailable(String),
    InvalidData(String),
}

impl fmt::Display for DataSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSourceError::Unavailable(msg) => write!(f, "data source unavailable: {msg}"),
            DataSourceError::InvalidData(msg) => write!(f, "data source returned invalid data: {msg}"),
        }
    }
}

impl std::error::Error for DataSourceError {}

/// Supplier of raw lesson data, typically remote. Implementations block;
/// callers decide where the call runs.
pub trait LessonDataSource {
    fn fetch(&self, query: &ScheduleQuery) -> Result<Vec<Lesson>, DataSourceError>;
}

/// Outcome of the most recent sync, surfaced to the UI as a plain status
/// value. Fetch failures land here instead of propagating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestStatus {
    Idle,
    Loading,
    Success,
    Error(String),
}

/// Drives a [`LessonDataSource`] into a [`Timetable`] and tracks the status
/// of the last refresh.
pub struct Refresher<S: LessonDataSource> {
    source: S,
    status: RequestStatus,
}

impl<S: LessonDataSource> Refresher<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            status: RequestStatus::Idle,
        }
    }

    pub fn status(&self) -> &RequestStatus {
        &self.status
    }

    /// Fetches fresh lessons for the current settings and swaps them into
    /// the timetable. On any failure the timetable keeps its previous
    /// contents and the error is recorded in [`status`].
    ///
    /// [`status`]: Refresher::status
    pub fn sync(&mut self, timetable: &mut Timetable, settings: &Settings) -> &RequestStatus {
        self.status = RequestStatus::Loading;
        let query = ScheduleQuery::from_settings(settings);
        match self.source.fetch(&query) {
            Ok(lessons) => match timetable.replace_all(lessons) {
                Ok(()) => {
                    debug!("sync complete, {} lessons loaded", timetable.len());
                    self.status = RequestStatus::Success;
                }
                Err(err) => {
                    warn!("sync rejected: {err}");
                    self.status = RequestStatus::Error(err.to_string());
                }
            },
            Err(err) => {
                warn!("sync failed: {err}");
                self.status = RequestStatus::Error(err.to_string());
            }
        }
        &self.status
    }
}

/// In-memory source; serves a fixed lesson list regardless of the query.
pub struct StaticLessonSource {
    lessons: Vec<Lesson>,
}

impl StaticLessonSource {
    pub fn new(lessons: Vec<Lesson>) -> Self {
        Self { lessons }
    }
}

impl LessonDataSource for StaticLessonSource {
    fn fetch(&self, _query: &ScheduleQuery) -> Result<Vec<Lesson>, DataSourceError> {
        Ok(self.lessons.clone())
    }
}

/// Source reading a lesson CSV from disk on every fetch, so edits to the
/// file show up on the next sync.
pub struct CsvLessonSource {
    path: PathBuf,
}

impl CsvLessonSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl LessonDataSource for CsvLessonSource {
    fn fetch(&self, _query: &ScheduleQuery) -> Result<Vec<Lesson>, DataSourceError> {
        persistence::load_lessons_from_csv(&self.path)
            .map_err(|err| DataSourceError::Unavailable(err.to_string()))
    }
}
