//! Session-scoped state holding the five record sequences.

use serde::{Deserialize, Serialize};

use crate::model::expense::Expense;
use crate::model::meeting::Meeting;
use crate::model::record::RecordKind;
use crate::model::reminder::Reminder;
use crate::model::task::TaskRecord;
use crate::model::trip::Trip;
use crate::store::sequence::RecordSeq;

/// All records of one user session.
///
/// Starts with five empty sequences; they only grow until the value is
/// dropped with the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    expenses: RecordSeq<Expense>,
    reminders: RecordSeq<Reminder>,
    meetings: RecordSeq<Meeting>,
    tasks: RecordSeq<TaskRecord>,
    trips: RecordSeq<Trip>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expenses(&self) -> &RecordSeq<Expense> {
        &self.expenses
    }

    pub fn expenses_mut(&mut self) -> &mut RecordSeq<Expense> {
        &mut self.expenses
    }

    pub fn reminders(&self) -> &RecordSeq<Reminder> {
        &self.reminders
    }

    pub fn reminders_mut(&mut self) -> &mut RecordSeq<Reminder> {
        &mut self.reminders
    }

    pub fn meetings(&self) -> &RecordSeq<Meeting> {
        &self.meetings
    }

    pub fn meetings_mut(&mut self) -> &mut RecordSeq<Meeting> {
        &mut self.meetings
    }

    pub fn tasks(&self) -> &RecordSeq<TaskRecord> {
        &self.tasks
    }

    pub fn tasks_mut(&mut self) -> &mut RecordSeq<TaskRecord> {
        &mut self.tasks
    }

    pub fn trips(&self) -> &RecordSeq<Trip> {
        &self.trips
    }

    pub fn trips_mut(&mut self) -> &mut RecordSeq<Trip> {
        &mut self.trips
    }

    /// Number of records stored for one kind.
    pub fn count(&self, kind: RecordKind) -> usize {
        match kind {
            RecordKind::Expense => self.expenses.len(),
            RecordKind::Reminder => self.reminders.len(),
            RecordKind::Meeting => self.meetings.len(),
            RecordKind::Task => self.tasks.len(),
            RecordKind::Trip => self.trips.len(),
        }
    }

    /// Whether no record of any kind has been stored yet.
    pub fn is_empty(&self) -> bool {
        RecordKind::ALL.iter().all(|kind| self.count(*kind) == 0)
    }
}
