//! Reminder record.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A reminder due at a local, zone-less date and time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub text: String,
    /// Sort key for the upcoming-reminders view.
    pub datetime: NaiveDateTime,
}

impl Reminder {
    pub fn new(text: impl Into<String>, datetime: NaiveDateTime) -> Self {
        Self {
            text: text.into(),
            datetime,
        }
    }

    /// Combines the separate date and time-of-day form fields.
    pub fn at(text: impl Into<String>, date: NaiveDate, time: NaiveTime) -> Self {
        Self::new(text, date.and_time(time))
    }
}
