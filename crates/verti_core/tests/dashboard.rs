use chrono::{NaiveDate, NaiveTime};
use verti_core::service::mutators::{
    record_expense, record_meeting, record_reminder, record_task, record_trip,
};
use verti_core::view::dashboard::{build_dashboard, render_dashboard};
use verti_core::{
    Amount, ExpenseCategory, ProjectRecord, RecordDefect, RecordKind, SessionState, TaskBatch,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn empty_dashboard_shows_every_section_with_empty_state() {
    let state = SessionState::new();

    let sections = build_dashboard(&state).unwrap();
    let titles: Vec<&str> = sections.iter().map(|section| section.title).collect();
    assert_eq!(
        titles,
        ["Trips", "Meetings", "Expenses", "Tasks & Projects", "Reminders"]
    );
    let first_lines: Vec<&str> = sections
        .iter()
        .map(|section| section.lines[0].as_str())
        .collect();
    assert_eq!(
        first_lines,
        [
            "No trips logged yet.",
            "No meetings logged yet.",
            "No expenses logged yet.",
            "No tasks or projects logged yet.",
            "No reminders set.",
        ]
    );
}

#[test]
fn populated_dashboard_renders_records() {
    let mut state = SessionState::new();
    record_trip(&mut state, "Oslo", date(2024, 2, 1), date(2024, 2, 3), "Ski");
    record_meeting(
        &mut state,
        date(2024, 3, 1),
        time(9, 0),
        "Ana",
        "Budget",
        "Plan text",
    );
    record_expense(
        &mut state,
        date(2024, 1, 1),
        "Taxi",
        Amount::from_cents(1250),
        ExpenseCategory::Transport,
    );
    record_expense(
        &mut state,
        date(2024, 1, 2),
        "Hotel",
        Amount::from_cents(20000),
        ExpenseCategory::Hotel,
    );
    record_task(
        &mut state,
        ProjectRecord {
            project: "CRM".to_string(),
            goals: "Migrate".to_string(),
            status: "Started".to_string(),
            advice: "Go".to_string(),
        },
    );
    record_task(
        &mut state,
        TaskBatch {
            tasks: "a".to_string(),
            prioritization: "a first".to_string(),
        },
    );
    record_reminder(&mut state, "Later", date(2024, 6, 2).and_time(time(8, 0)));
    record_reminder(&mut state, "Sooner", date(2024, 6, 1).and_time(time(9, 5)));

    let text = render_dashboard(&state).unwrap();

    assert!(text.starts_with("## Verti Data Dashboard\n"));
    assert!(text.contains("**Trip 1:** Oslo (2024-02-01 to 2024-02-03)"));
    assert!(text.contains("**Meeting 1:** 2024-03-01 at 09:00:00"));
    assert!(text.contains("Total expenses logged: $212.50"));
    assert!(text.contains("2024-01-01: Taxi - $12.50 (Transport)"));
    assert!(text.contains("2024-01-02: Hotel - $200.00 (Hotel)"));
    assert!(text.contains("**Project 1:** CRM"));
    assert!(text.contains("**Task Batch 2:**"));

    let sooner = text.find("- 2024-06-01 09:05: Sooner").unwrap();
    let later = text.find("- 2024-06-02 08:00: Later").unwrap();
    assert!(sooner < later);
}

#[test]
fn dashboard_fails_on_malformed_expense() {
    let mut state = SessionState::new();
    record_expense(
        &mut state,
        date(2024, 1, 1),
        "bad",
        Amount::from_cents(-1),
        ExpenseCategory::Misc,
    );

    let err = render_dashboard(&state).unwrap_err();
    assert_eq!(err.index, 0);
}

#[test]
fn dashboard_fails_on_project_without_name() {
    let mut state = SessionState::new();
    record_task(
        &mut state,
        ProjectRecord {
            project: String::new(),
            goals: "G".to_string(),
            status: "S".to_string(),
            advice: "A".to_string(),
        },
    );

    let err = render_dashboard(&state).unwrap_err();
    assert_eq!(err.kind, RecordKind::Task);
    assert_eq!(err.index, 0);
    assert_eq!(err.defect, RecordDefect::EmptyProjectName);
}
