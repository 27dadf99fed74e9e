use chrono::{NaiveTime, Weekday};
use timetable_tool::{CurrentLesson, Lesson, resolve_current};

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn morning() -> Vec<Lesson> {
    vec![
        Lesson::new("First", Weekday::Mon, t(9, 0), t(10, 0)),
        Lesson::new("Second", Weekday::Mon, t(10, 15), t(11, 0)),
    ]
}

#[test]
fn lesson_in_progress_is_marked() {
    assert_eq!(
        resolve_current(&morning(), t(9, 30), true),
        CurrentLesson::InProgress(0)
    );
}

#[test]
fn gap_between_lessons_marks_the_upcoming_one() {
    assert_eq!(
        resolve_current(&morning(), t(10, 5), true),
        CurrentLesson::Upcoming(1)
    );
}

#[test]
fn finished_day_resolves_to_none() {
    assert_eq!(resolve_current(&morning(), t(11, 30), true), CurrentLesson::None);
}

#[test]
fn before_the_first_lesson_it_is_upcoming() {
    assert_eq!(
        resolve_current(&morning(), t(7, 45), true),
        CurrentLesson::Upcoming(0)
    );
}

#[test]
fn other_days_never_have_a_current_lesson() {
    assert_eq!(resolve_current(&morning(), t(9, 30), false), CurrentLesson::None);
}

#[test]
fn empty_day_resolves_to_none() {
    assert_eq!(resolve_current(&[], t(9, 30), true), CurrentLesson::None);
}

#[test]
fn lesson_start_is_inclusive_and_end_exclusive() {
    let lessons = morning();
    assert_eq!(resolve_current(&lessons, t(9, 0), true), CurrentLesson::InProgress(0));
    assert_eq!(resolve_current(&lessons, t(10, 0), true), CurrentLesson::Upcoming(1));
}

#[test]
fn overlapping_lessons_resolve_to_the_earliest() {
    // Malformed data: two lessons share the 9:30 slot. The earliest in the
    // ordering wins deterministically.
    let lessons = vec![
        Lesson::new("A", Weekday::Mon, t(9, 0), t(10, 0)),
        Lesson::new("B", Weekday::Mon, t(9, 15), t(10, 15)),
    ];
    assert_eq!(
        resolve_current(&lessons, t(9, 30), true),
        CurrentLesson::InProgress(0)
    );
}

#[test]
fn index_accessor_exposes_the_highlighted_slot() {
    assert_eq!(CurrentLesson::InProgress(2).index(), Some(2));
    assert_eq!(CurrentLesson::Upcoming(0).index(), Some(0));
    assert_eq!(CurrentLesson::None.index(), None);
}
