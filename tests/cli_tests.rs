#![cfg(feature = "cli")]

use assert_cmd::Command;
use predicates::str::contains as str_contains;
use tempfile::NamedTempFile;

#[allow(deprecated)]
fn run_cli(script: &str) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("cli").expect("cli binary");
    cmd.write_stdin(script.to_string()).assert()
}

const SAMPLE_CSV: &str = "\
name,day_of_week,start_time,end_time,frequency,sub_group,teacher,room
Algebra,mon,09:00,10:30,numerator,,Ivanov,B-204
Physics,mon,10:45,12:15,denominator,,Petrov,
English,wed,13:00,14:30,,1,,A-101
";

fn sample_file() -> NamedTempFile {
    let file = NamedTempFile::new().expect("create temp file");
    std::fs::write(file.path(), SAMPLE_CSV).expect("write sample csv");
    file
}

#[test]
fn cli_shows_a_resolved_day() {
    let file = sample_file();
    // 2025-01-13 is a numerator Monday: Algebra in, Physics opposite.
    let script = format!(
        "load csv {}\nday 2025-01-13\nquit\n",
        file.path().display()
    );
    run_cli(&script)
        .success()
        .stdout(str_contains("numerator week"))
        .stdout(str_contains("Algebra"))
        .stdout(str_contains("Lessons on this weekday in the denominator week"));
}

#[test]
fn cli_reports_empty_days() {
    let file = sample_file();
    // 2025-01-14 is a Tuesday with no lessons at all.
    let script = format!(
        "load csv {}\nday 2025-01-14\nquit\n",
        file.path().display()
    );
    run_cli(&script).success().stdout(str_contains("No lessons this day."));
}

#[test]
fn cli_teacher_role_filters_by_name() {
    let file = sample_file();
    let script = format!(
        "load csv {}\nrole teacher\nteacher Ivanov\nday 2025-01-13\nquit\n",
        file.path().display()
    );
    let assert = run_cli(&script).success().stdout(str_contains("Algebra"));
    let output = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let after_day = output.split("numerator week").last().unwrap_or_default();
    assert!(
        !after_day.contains("English"),
        "other teachers' lessons should be filtered out:\n{after_day}"
    );
}

#[test]
fn cli_parity_show_reports_the_week() {
    let file = sample_file();
    let script = format!(
        "load csv {}\nparity show 2025-01-13\nquit\n",
        file.path().display()
    );
    run_cli(&script)
        .success()
        .stdout(str_contains("2025-01-13 is a numerator week"));
}

#[test]
fn cli_lists_teachers_from_the_data() {
    let file = sample_file();
    let script = format!("load csv {}\nteachers\nquit\n", file.path().display());
    run_cli(&script).success().stdout(str_contains("Ivanov, Petrov"));
}

#[test]
fn cli_save_and_load_round_trip() {
    let source = sample_file();
    let target = NamedTempFile::new().expect("create temp file");
    let script = format!(
        "load csv {}\nsave json {}\nload json {}\nlessons\nquit\n",
        source.path().display(),
        target.path().display(),
        target.path().display()
    );
    run_cli(&script)
        .success()
        .stdout(str_contains("Lessons saved to"))
        .stdout(str_contains("Physics"));
}
