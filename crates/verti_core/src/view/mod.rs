//! Read-only derived views over one session.
//!
//! # Responsibility
//! - Aggregate, sort and label stored records for presentation.
//! - Render the dashboard text from those views.
//!
//! # Invariants
//! - Views never mutate `SessionState`.
//! - Views surface a broken record as `MalformedRecordError` instead of
//!   skipping it.

pub mod dashboard;
pub mod expenses;
pub mod meetings;
pub mod reminders;
pub mod tasks;
