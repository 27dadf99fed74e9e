use crate::parity::WeekParity;
use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// One recurring timetable entry. A lesson repeats every week on
/// `day_of_week`, or every other week when `frequency` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub name: String,
    pub day_of_week: Weekday,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    /// `None` means the lesson occurs in both parity weeks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<WeekParity>,
    /// Finer partition of a student group. `None` means the whole group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
}

impl Lesson {
    pub fn new(
        name: impl Into<String>,
        day_of_week: Weekday,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Self {
        Self {
            name: name.into(),
            day_of_week,
            start_time,
            end_time,
            frequency: None,
            sub_group: None,
            teacher: None,
            room: None,
        }
    }

    pub fn with_frequency(mut self, frequency: WeekParity) -> Self {
        self.frequency = Some(frequency);
        self
    }

    pub fn with_sub_group(mut self, sub_group: impl Into<String>) -> Self {
        self.sub_group = Some(sub_group.into());
        self
    }

    pub fn with_teacher(mut self, teacher: impl Into<String>) -> Self {
        self.teacher = Some(teacher.into());
        self
    }

    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }

    /// Whether `now` falls inside this lesson's time slot. The start is
    /// inclusive and the end exclusive, so back-to-back lessons never both
    /// report as running.
    pub fn is_running_at(&self, now: NaiveTime) -> bool {
        self.start_time <= now && now < self.end_time
    }
}
