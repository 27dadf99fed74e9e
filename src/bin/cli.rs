use chrono::{Local, NaiveDate, NaiveTime};
use std::io::{self, Write};
use timetable_tool::{
    CurrentLesson, Lesson, ResolvedDay, Role, Settings, Timetable, WeekParity,
    load_lessons_from_csv, load_lessons_from_json, parity, resolve_current, save_lessons_to_csv,
    save_lessons_to_json,
};

fn print_help() {
    println!(
        "Commands:\n  help                               Show this help\n  load <json|csv> <path>             Load lessons from disk\n  save <json|csv> <path>             Persist lessons to disk\n  lessons                            List all loaded lessons\n  day <YYYY-MM-DD> [HH:MM]           Show the resolved day; with a clock\n                                     time, mark the current/next lesson\n  today [HH:MM]                      Shorthand for 'day' with today's date\n  role <student|teacher>             Switch role\n  subgroup <name|->                  Set or clear the student subgroup\n  teacher <name|->                   Set or clear the teacher name\n  subgroups                          List subgroups present in the data\n  teachers                           List teachers present in the data\n  parity show <YYYY-MM-DD>           Show resolved parity for a date\n  parity pin <numerator|denominator> Pin today's parity\n  parity auto                        Return parity to calendar mode\n  quit|exit                          Exit"
    );
}

fn render_lessons_table(lessons: &[Lesson], marker: CurrentLesson) -> String {
    let headers = ["", "day", "start", "end", "name", "freq", "subgroup", "teacher", "room"];
    let mut rows: Vec<[String; 9]> = Vec::with_capacity(lessons.len());
    for (index, lesson) in lessons.iter().enumerate() {
        let mark = match marker {
            CurrentLesson::InProgress(current) if current == index => "now".to_string(),
            CurrentLesson::Upcoming(next) if next == index => "next".to_string(),
            _ => String::new(),
        };
        rows.push([
            mark,
            lesson.day_of_week.to_string(),
            lesson.start_time.format("%H:%M").to_string(),
            lesson.end_time.format("%H:%M").to_string(),
            lesson.name.clone(),
            lesson
                .frequency
                .map(|parity| parity.to_string())
                .unwrap_or_default(),
            lesson.sub_group.clone().unwrap_or_default(),
            lesson.teacher.clone().unwrap_or_default(),
            lesson.room.clone().unwrap_or_default(),
        ]);
    }

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (index, cell) in row.iter().enumerate() {
            widths[index] = widths[index].max(cell.len());
        }
    }

    let mut sep = String::from("+");
    for width in &widths {
        sep.push_str(&"-".repeat(width + 2));
        sep.push('+');
    }

    let render_row = |cells: &[String]| {
        let mut out = String::from("|");
        for (index, cell) in cells.iter().enumerate() {
            out.push(' ');
            out.push_str(cell);
            out.push_str(&" ".repeat(widths[index] - cell.len()));
            out.push_str(" |");
        }
        out
    };

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');
    out.push_str(&render_row(&header_cells));
    out.push('\n');
    out.push_str(&sep);
    out.push('\n');
    for row in &rows {
        out.push_str(&render_row(row));
        out.push('\n');
    }
    out.push_str(&sep);
    out
}

fn print_resolved_day(resolved: &ResolvedDay, now: Option<NaiveTime>, is_today: bool) {
    println!(
        "{} ({} week)",
        resolved.date.format("%Y-%m-%d %A"),
        resolved.parity
    );
    if resolved.primary.is_empty() {
        println!("No lessons this day.");
    } else {
        let marker = match now {
            Some(now) => resolve_current(&resolved.primary, now, is_today),
            None => CurrentLesson::None,
        };
        println!("{}", render_lessons_table(&resolved.primary, marker));
    }
    if !resolved.opposite_parity.is_empty() {
        println!(
            "Lessons on this weekday in the {} week:",
            resolved.parity.opposite()
        );
        println!(
            "{}",
            render_lessons_table(&resolved.opposite_parity, CurrentLesson::None)
        );
    }
}

fn parse_clock(input: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(input, "%H:%M").ok()
}

fn show_day(
    timetable: &Timetable,
    settings: &Settings,
    date: NaiveDate,
    clock: Option<NaiveTime>,
) {
    let resolved = timetable.resolve_day(date, settings);
    let today = Local::now().date_naive();
    print_resolved_day(&resolved, clock, date == today);
}

fn main() {
    let mut timetable = Timetable::new();
    let mut settings = Settings::default();

    println!("Timetable Tool (CLI) - type 'help' for commands\n");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        if stdin.read_line(&mut line).is_err() {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");

        match cmd {
            "help" => print_help(),
            "quit" | "exit" => break,
            "lessons" => {
                if timetable.is_empty() {
                    println!("No lessons loaded.");
                } else {
                    println!(
                        "{}",
                        render_lessons_table(timetable.lessons(), CurrentLesson::None)
                    );
                }
            }
            "load" => {
                let format = parts.next();
                let path = parts.next();
                match (format, path) {
                    (Some(format @ ("json" | "csv")), Some(path)) => {
                        let loaded = if format == "json" {
                            load_lessons_from_json(path)
                        } else {
                            load_lessons_from_csv(path)
                        };
                        match loaded {
                            Ok(lessons) => match timetable.replace_all(lessons) {
                                Ok(()) => {
                                    println!("Lessons loaded from {path} ({}).", timetable.len())
                                }
                                Err(e) => println!("Error: {}", e),
                            },
                            Err(e) => println!("Error: {}", e),
                        }
                    }
                    _ => println!("Usage: load <json|csv> <path>"),
                }
            }
            "save" => {
                let format = parts.next();
                let path = parts.next();
                match (format, path) {
                    (Some(format @ ("json" | "csv")), Some(path)) => {
                        let saved = if format == "json" {
                            save_lessons_to_json(timetable.lessons(), path)
                        } else {
                            save_lessons_to_csv(timetable.lessons(), path)
                        };
                        match saved {
                            Ok(()) => println!("Lessons saved to {path}."),
                            Err(e) => println!("Error: {}", e),
                        }
                    }
                    _ => println!("Usage: save <json|csv> <path>"),
                }
            }
            "day" => {
                let date_s = parts.next();
                let clock = parts.next().and_then(parse_clock);
                match date_s.and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()) {
                    Some(date) => show_day(&timetable, &settings, date, clock),
                    None => println!("Usage: day <YYYY-MM-DD> [HH:MM]"),
                }
            }
            "today" => {
                let now = Local::now();
                let clock = parts
                    .next()
                    .and_then(parse_clock)
                    .or_else(|| Some(now.time()));
                show_day(&timetable, &settings, now.date_naive(), clock);
            }
            "role" => match parts.next() {
                Some("student") => {
                    settings = settings.with_role(Role::Student);
                    println!("Role set to student.");
                }
                Some("teacher") => {
                    settings = settings.with_role(Role::Teacher);
                    println!("Role set to teacher.");
                }
                _ => println!("Usage: role <student|teacher>"),
            },
            "subgroup" => match parts.next() {
                Some("-") => {
                    settings.subgroup = None;
                    println!("Subgroup cleared.");
                }
                Some(name) => {
                    settings.subgroup = Some(name.to_string());
                    println!("Subgroup set to {name}.");
                }
                None => println!("Usage: subgroup <name|->"),
            },
            "teacher" => match parts.next() {
                Some("-") => {
                    settings.teacher_name = None;
                    println!("Teacher cleared.");
                }
                Some(name) => {
                    settings.teacher_name = Some(name.to_string());
                    println!("Teacher set to {name}.");
                }
                None => println!("Usage: teacher <name|->"),
            },
            "subgroups" => {
                let subgroups = timetable.subgroups();
                if subgroups.is_empty() {
                    println!("No subgroups in the data.");
                } else {
                    println!("{}", subgroups.join(", "));
                }
            }
            "teachers" => {
                let teachers = timetable.teachers();
                if teachers.is_empty() {
                    println!("No teachers in the data.");
                } else {
                    println!("{}", teachers.join(", "));
                }
            }
            "parity" => match parts.next() {
                Some("show") => {
                    match parts
                        .next()
                        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
                    {
                        Some(date) => println!(
                            "{} is a {} week",
                            date,
                            parity::parity_for(date, settings.frequency_matches_week_number)
                        ),
                        None => println!("Usage: parity show <YYYY-MM-DD>"),
                    }
                }
                Some("pin") => {
                    let choice = parts.next().and_then(WeekParity::from_str);
                    match choice {
                        Some(choice) => {
                            let today = Local::now().date_naive();
                            settings.frequency_matches_week_number =
                                parity::pin_flag(today, Some(choice));
                            println!("This week pinned as {choice}.");
                        }
                        None => println!("Usage: parity pin <numerator|denominator>"),
                    }
                }
                Some("auto") => {
                    settings.frequency_matches_week_number = None;
                    println!("Parity follows the calendar again.");
                }
                _ => println!("Usage: parity <show|pin|auto> ..."),
            },
            _ => println!("Unknown command '{cmd}'. Type 'help'."),
        }
    }
}
