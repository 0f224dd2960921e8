//! Meeting selection labels.
//!
//! # Invariants
//! - A label is `date - <first 30 chars of agenda>...`, counted in chars.
//! - Lookup returns the first meeting whose label matches.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::meeting::Meeting;
use crate::store::SessionState;

const LABEL_AGENDA_CHARS: usize = 30;

/// Label lookup failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    UnknownMeetingLabel(String),
}

impl Display for LookupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownMeetingLabel(label) => write!(f, "no meeting matches label `{label}`"),
        }
    }
}

impl Error for LookupError {}

/// Selection label for one meeting.
pub fn meeting_label(meeting: &Meeting) -> String {
    let prefix: String = meeting.agenda.chars().take(LABEL_AGENDA_CHARS).collect();
    format!("{} - {}...", meeting.date, prefix)
}

/// Labels for all meetings, in append order.
pub fn meeting_labels(state: &SessionState) -> Vec<String> {
    state.meetings().iter().map(meeting_label).collect()
}

/// Maps a chosen label back to its meeting and sequence index.
///
/// When several meetings share a label the earliest one wins.
pub fn find_meeting_by_label<'s>(
    state: &'s SessionState,
    label: &str,
) -> Result<(usize, &'s Meeting), LookupError> {
    state
        .meetings()
        .iter()
        .enumerate()
        .find(|(_, meeting)| meeting_label(meeting) == label)
        .ok_or_else(|| LookupError::UnknownMeetingLabel(label.to_string()))
}
