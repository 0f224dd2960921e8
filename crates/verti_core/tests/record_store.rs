use chrono::{NaiveDate, NaiveTime};
use verti_core::service::mutators::{
    record_expense, record_meeting, record_reminder, record_task, record_trip,
};
use verti_core::{
    Amount, ExpenseCategory, ProjectRecord, RecordKind, SessionState, TaskBatch, TaskRecord,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn new_session_starts_with_five_empty_sequences() {
    let state = SessionState::new();

    assert!(state.is_empty());
    for kind in RecordKind::ALL {
        assert_eq!(state.count(kind), 0, "{kind} should start empty");
    }
}

#[test]
fn expenses_keep_append_order_and_count() {
    let mut state = SessionState::new();
    let items = ["Taxi", "Hotel", "Lunch", "Taxi"];

    for (i, item) in items.iter().enumerate() {
        record_expense(
            &mut state,
            date(2024, 1, 1 + i as u32),
            *item,
            Amount::from_cents(100 * (i as i64 + 1)),
            ExpenseCategory::Misc,
        );
    }

    let all = state.expenses().all();
    assert_eq!(all.len(), items.len());
    for (i, expense) in all.iter().enumerate() {
        assert_eq!(expense.item, items[i]);
        assert_eq!(expense.amount, Amount::from_cents(100 * (i as i64 + 1)));
    }
    assert_eq!(state.count(RecordKind::Expense), 4);
    assert_eq!(state.count(RecordKind::Trip), 0);
}

#[test]
fn each_mutator_appends_exactly_one_record_to_its_own_sequence() {
    let mut state = SessionState::new();

    record_reminder(&mut state, "Call client", date(2024, 6, 1).and_time(time(9, 0)));
    assert_eq!(state.count(RecordKind::Reminder), 1);

    record_meeting(
        &mut state,
        date(2024, 3, 1),
        time(10, 30),
        "Ana (PM), Bo (Eng)",
        "Budget review",
        "1. Numbers 2. Decisions",
    );
    assert_eq!(state.count(RecordKind::Meeting), 1);

    record_trip(
        &mut state,
        "Lisbon",
        date(2024, 5, 2),
        date(2024, 5, 5),
        "Fly TAP, stay downtown",
    );
    assert_eq!(state.count(RecordKind::Trip), 1);

    record_task(
        &mut state,
        TaskBatch {
            tasks: "a\nb".to_string(),
            prioritization: "b then a".to_string(),
        },
    );
    assert_eq!(state.count(RecordKind::Task), 1);
    assert_eq!(state.count(RecordKind::Expense), 0);

    let meeting = &state.meetings().all()[0];
    assert_eq!(meeting.participants, "Ana (PM), Bo (Eng)");
    assert_eq!(meeting.time, time(10, 30));

    let trip = &state.trips().all()[0];
    assert_eq!(trip.destination, "Lisbon");
    assert_eq!(trip.summary, "Fly TAP, stay downtown");
}

#[test]
fn projects_and_task_batches_share_one_sequence_in_append_order() {
    let mut state = SessionState::new();
    let project = ProjectRecord {
        project: "Website relaunch".to_string(),
        goals: "Ship by Q3".to_string(),
        status: "Design done".to_string(),
        advice: "Freeze scope".to_string(),
    };
    let batch = TaskBatch {
        tasks: "Invoices\nSlides".to_string(),
        prioritization: "1. Slides 2. Invoices".to_string(),
    };

    record_task(&mut state, project.clone());
    record_task(&mut state, batch.clone());
    record_task(&mut state, TaskRecord::Project(project.clone()));

    assert_eq!(
        state.tasks().all(),
        &[
            TaskRecord::Project(project.clone()),
            TaskRecord::Batch(batch),
            TaskRecord::Project(project),
        ]
    );
}

#[test]
fn store_accepts_any_well_typed_record() {
    let mut state = SessionState::new();

    record_expense(
        &mut state,
        date(2024, 1, 1),
        "",
        Amount::from_cents(-500),
        ExpenseCategory::Misc,
    );

    assert_eq!(state.expenses().len(), 1);
}
