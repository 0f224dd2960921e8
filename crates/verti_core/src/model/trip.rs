//! Business trip record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Completion text returned for the trip plan prompt.
    pub summary: String,
}
