//! Expense record and its exact money amount.
//!
//! # Invariants
//! - `Amount` counts cents; arithmetic on it is exact and order-independent.
//! - A stored expense amount must be >= 0. Input coercion enforces this, and
//!   `Expense::validate` re-checks it on read paths.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::model::record::RecordDefect;

/// Money amount with two fractional digits, stored as integer cents.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);
    /// Largest amount accepted from user input: 100 billion.
    pub const MAX_INPUT: Amount = Amount(10_000_000_000_000);

    /// Builds an amount from a raw cent count.
    ///
    /// Does not check the sign; use `model::input::parse_amount` for user input.
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Exact addition; `None` when the result leaves the `i64` cent range.
    pub fn checked_add(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_add(rhs.0).map(Amount)
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

/// Expense category offered by the expense form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Flight,
    Hotel,
    Meals,
    Transport,
    Misc,
}

impl ExpenseCategory {
    /// Categories in form display order.
    pub const ALL: [ExpenseCategory; 5] = [
        ExpenseCategory::Flight,
        ExpenseCategory::Hotel,
        ExpenseCategory::Meals,
        ExpenseCategory::Transport,
        ExpenseCategory::Misc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Flight => "Flight",
            Self::Hotel => "Hotel",
            Self::Meals => "Meals",
            Self::Transport => "Transport",
            Self::Misc => "Misc",
        }
    }
}

impl Display for ExpenseCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One logged business expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub date: NaiveDate,
    pub item: String,
    pub amount: Amount,
    pub category: ExpenseCategory,
}

impl Expense {
    pub fn new(
        date: NaiveDate,
        item: impl Into<String>,
        amount: Amount,
        category: ExpenseCategory,
    ) -> Self {
        Self {
            date,
            item: item.into(),
            amount,
            category,
        }
    }

    /// Checks the record invariants not encoded in the field types.
    pub fn validate(&self) -> Result<(), RecordDefect> {
        if self.amount.is_negative() {
            return Err(RecordDefect::NegativeAmount(self.amount));
        }
        Ok(())
    }
}
