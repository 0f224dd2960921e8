//! One append operation per record kind.
//!
//! # Contract
//! - Inputs are already typed and validated by the caller.
//! - Each call grows exactly one sequence by exactly one record.
//! - No call fails.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use log::debug;

use crate::model::expense::{Amount, Expense, ExpenseCategory};
use crate::model::meeting::Meeting;
use crate::model::record::RecordKind;
use crate::model::reminder::Reminder;
use crate::model::task::TaskRecord;
use crate::model::trip::Trip;
use crate::store::SessionState;

pub fn record_expense(
    state: &mut SessionState,
    date: NaiveDate,
    item: impl Into<String>,
    amount: Amount,
    category: ExpenseCategory,
) {
    state
        .expenses_mut()
        .append(Expense::new(date, item, amount, category));
    log_append(state, RecordKind::Expense, RecordKind::Expense.as_str());
}

pub fn record_reminder(state: &mut SessionState, text: impl Into<String>, datetime: NaiveDateTime) {
    state.reminders_mut().append(Reminder::new(text, datetime));
    log_append(state, RecordKind::Reminder, RecordKind::Reminder.as_str());
}

pub fn record_meeting(
    state: &mut SessionState,
    date: NaiveDate,
    time: NaiveTime,
    participants: impl Into<String>,
    agenda: impl Into<String>,
    plan: impl Into<String>,
) {
    state.meetings_mut().append(Meeting {
        date,
        time,
        participants: participants.into(),
        agenda: agenda.into(),
        plan: plan.into(),
    });
    log_append(state, RecordKind::Meeting, RecordKind::Meeting.as_str());
}

/// Appends either a project snapshot or a task batch to the task sequence.
pub fn record_task(state: &mut SessionState, record: impl Into<TaskRecord>) {
    let record = record.into();
    let shape = record.kind().id();
    state.tasks_mut().append(record);
    log_append(state, RecordKind::Task, shape);
}

pub fn record_trip(
    state: &mut SessionState,
    destination: impl Into<String>,
    start_date: NaiveDate,
    end_date: NaiveDate,
    summary: impl Into<String>,
) {
    state.trips_mut().append(Trip {
        destination: destination.into(),
        start_date,
        end_date,
        summary: summary.into(),
    });
    log_append(state, RecordKind::Trip, RecordKind::Trip.as_str());
}

fn log_append(state: &SessionState, kind: RecordKind, shape: &str) {
    debug!(
        "event=record_append module=store kind={} shape={} count={}",
        kind,
        shape,
        state.count(kind)
    );
}
