use crate::lesson::Lesson;
use std::fmt;

#[derive(Debug, Clone)]
pub struct LessonValidationError {
    message: String,
}

impl LessonValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for LessonValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for LessonValidationError {}

pub fn validate_lesson(lesson: &Lesson) -> Result<(), LessonValidationError> {
    if lesson.name.trim().is_empty() {
        return Err(LessonValidationError::new("lesson requires a non-empty name"));
    }

    if lesson.start_time >= lesson.end_time {
        return Err(LessonValidationError::new(format!(
            "lesson '{}' must start before it ends ({} >= {})",
            lesson.name, lesson.start_time, lesson.end_time
        )));
    }

    if let Some(sub_group) = &lesson.sub_group {
        if sub_group.trim().is_empty() {
            return Err(LessonValidationError::new(format!(
                "lesson '{}' has a blank subgroup; omit the field instead",
                lesson.name
            )));
        }
    }

    Ok(())
}

pub fn validate_lesson_collection(lessons: &[Lesson]) -> Result<(), LessonValidationError> {
    for lesson in lessons {
        validate_lesson(lesson)?;
    }
    Ok(())
}
