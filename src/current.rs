use crate::lesson::Lesson;
use chrono::NaiveTime;

/// Highlight decision for an ordered day of lessons. Indices point into the
/// slice handed to [`resolve_current`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentLesson {
    /// A lesson is running right now.
    InProgress(usize),
    /// Nothing is running; this is the next lesson to start today.
    Upcoming(usize),
    /// Not today, the day is over, or the day is empty.
    None,
}

impl CurrentLesson {
    pub fn index(self) -> Option<usize> {
        match self {
            CurrentLesson::InProgress(index) | CurrentLesson::Upcoming(index) => Some(index),
            CurrentLesson::None => None,
        }
    }
}

/// Picks the in-progress or next upcoming lesson from a day's ordered
/// primary list.
///
/// "Current lesson" only makes sense for the actual current date, so
/// `is_today == false` always resolves to [`CurrentLesson::None`]. With
/// well-formed data at most one lesson runs at a time; should malformed data
/// overlap, the earliest lesson in the ordering wins.
pub fn resolve_current(primary: &[Lesson], now: NaiveTime, is_today: bool) -> CurrentLesson {
    if !is_today {
        return CurrentLesson::None;
    }

    if let Some(index) = primary.iter().position(|lesson| lesson.is_running_at(now)) {
        return CurrentLesson::InProgress(index);
    }

    match primary.iter().position(|lesson| lesson.start_time > now) {
        Some(index) => CurrentLesson::Upcoming(index),
        None => CurrentLesson::None,
    }
}
