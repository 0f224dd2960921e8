//! Record kinds and read-path integrity errors.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::expense::Amount;

/// Names one of the five per-session record sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Expense,
    Reminder,
    Meeting,
    Task,
    Trip,
}

impl RecordKind {
    /// All kinds in dashboard order of declaration.
    pub const ALL: [RecordKind; 5] = [
        RecordKind::Expense,
        RecordKind::Reminder,
        RecordKind::Meeting,
        RecordKind::Task,
        RecordKind::Trip,
    ];

    /// Stable lowercase id used in log lines and error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Reminder => "reminder",
            Self::Meeting => "meeting",
            Self::Task => "task",
            Self::Trip => "trip",
        }
    }
}

impl Display for RecordKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Invariant violation found on a stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordDefect {
    /// Expense amount below zero.
    NegativeAmount(Amount),
    /// Adding this expense pushes the total past the representable range.
    TotalOverflow,
    /// Project record with a blank project name.
    EmptyProjectName,
}

impl Display for RecordDefect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeAmount(amount) => write!(f, "amount {amount} is negative"),
            Self::TotalOverflow => write!(f, "expense total overflows"),
            Self::EmptyProjectName => write!(f, "project name is empty"),
        }
    }
}

/// Raised by a derived view when a stored record breaks a record invariant.
///
/// Views never skip such records; they stop and report the first one found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MalformedRecordError {
    pub kind: RecordKind,
    /// Position of the offending record in its sequence.
    pub index: usize,
    pub defect: RecordDefect,
}

impl Display for MalformedRecordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "malformed {} record at index {}: {}",
            self.kind, self.index, self.defect
        )
    }
}

impl Error for MalformedRecordError {}

#[cfg(test)]
mod tests {
    use super::{MalformedRecordError, RecordDefect, RecordKind};
    use crate::model::expense::Amount;

    #[test]
    fn kind_ids_are_stable() {
        let ids: Vec<&str> = RecordKind::ALL.iter().map(|kind| kind.as_str()).collect();
        assert_eq!(ids, ["expense", "reminder", "meeting", "task", "trip"]);
    }

    #[test]
    fn malformed_error_names_kind_index_and_defect() {
        let err = MalformedRecordError {
            kind: RecordKind::Expense,
            index: 2,
            defect: RecordDefect::NegativeAmount(Amount::from_cents(-150)),
        };
        assert_eq!(
            err.to_string(),
            "malformed expense record at index 2: amount -1.50 is negative"
        );
    }
}
