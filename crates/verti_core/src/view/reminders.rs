//! Upcoming reminder ordering.

use crate::model::reminder::Reminder;
use crate::store::SessionState;

/// Reminders ascending by datetime.
///
/// Stable: reminders due at the same instant keep their append order.
pub fn sorted_reminders(state: &SessionState) -> Vec<&Reminder> {
    let mut reminders: Vec<&Reminder> = state.reminders().iter().collect();
    reminders.sort_by_key(|reminder| reminder.datetime);
    reminders
}

/// Dashboard line for one reminder: `- YYYY-MM-DD HH:MM: text`.
pub fn reminder_line(reminder: &Reminder) -> String {
    format!(
        "- {}: {}",
        reminder.datetime.format("%Y-%m-%d %H:%M"),
        reminder.text
    )
}
