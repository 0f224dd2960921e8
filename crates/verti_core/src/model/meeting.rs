//! Meeting record.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A coordinated meeting together with the generated meeting plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// Free text: names, roles, emails.
    pub participants: String,
    pub agenda: String,
    /// Completion text returned for the meeting plan prompt.
    pub plan: String,
}
