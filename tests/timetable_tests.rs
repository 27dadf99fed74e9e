use chrono::{NaiveDate, NaiveTime, Weekday};
use timetable_tool::{CurrentLesson, Lesson, Settings, Timetable, WeekParity};

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn sample_timetable() -> Timetable {
    Timetable::from_lessons(vec![
        Lesson::new("Algebra", Weekday::Mon, t(9, 0), t(10, 30))
            .with_frequency(WeekParity::Numerator)
            .with_teacher("Ivanov"),
        Lesson::new("Physics", Weekday::Mon, t(10, 45), t(12, 15))
            .with_frequency(WeekParity::Denominator)
            .with_teacher("Petrov"),
        Lesson::new("English", Weekday::Wed, t(13, 0), t(14, 30))
            .with_sub_group("1")
            .with_teacher("Sidorova"),
        Lesson::new("Gym", Weekday::Fri, t(8, 0), t(9, 30)),
    ])
    .unwrap()
}

#[test]
fn day_views_cover_consecutive_dates() {
    let timetable = sample_timetable();
    let settings = Settings::default();
    // Monday 2025-01-13 (numerator week) through Friday.
    let views: Vec<_> = timetable.day_views(d(2025, 1, 13), 5, &settings).collect();

    assert_eq!(views.len(), 5);
    assert_eq!(views[0].date, d(2025, 1, 13));
    assert_eq!(views[4].date, d(2025, 1, 17));
    assert_eq!(views[0].primary[0].name, "Algebra");
    assert!(views[1].is_empty()); // Tuesday has nothing
    assert_eq!(views[2].primary[0].name, "English");
    assert_eq!(views[4].primary[0].name, "Gym");
}

#[test]
fn day_views_restart_from_fresh_state() {
    let timetable = sample_timetable();
    let settings = Settings::default();

    let first: Vec<_> = timetable.day_views(d(2025, 1, 13), 3, &settings).collect();
    let second: Vec<_> = timetable.day_views(d(2025, 1, 13), 3, &settings).collect();
    assert_eq!(first, second);
}

#[test]
fn current_lesson_only_highlights_today() {
    let timetable = sample_timetable();
    let settings = Settings::default();
    let monday = d(2025, 1, 13);

    assert_eq!(
        timetable.current_lesson(monday, &settings, t(9, 30), monday),
        CurrentLesson::InProgress(0)
    );
    // Viewing Monday's page while it is actually Tuesday.
    assert_eq!(
        timetable.current_lesson(monday, &settings, t(9, 30), d(2025, 1, 14)),
        CurrentLesson::None
    );
}

#[test]
fn distinct_listings_are_sorted_and_deduplicated() {
    let mut timetable = sample_timetable();
    timetable
        .add_lesson(
            Lesson::new("Lab", Weekday::Thu, t(9, 0), t(10, 30))
                .with_sub_group("1")
                .with_teacher("Ivanov"),
        )
        .unwrap();

    assert_eq!(timetable.subgroups(), ["1"]);
    assert_eq!(timetable.teachers(), ["Ivanov", "Petrov", "Sidorova"]);
}

#[test]
fn invalid_lesson_is_rejected_on_add() {
    let mut timetable = sample_timetable();
    let before = timetable.len();
    assert!(
        timetable
            .add_lesson(Lesson::new("Backwards", Weekday::Mon, t(10, 0), t(9, 0)))
            .is_err()
    );
    assert_eq!(timetable.len(), before);
}
