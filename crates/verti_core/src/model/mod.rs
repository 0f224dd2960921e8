//! Session record model for the assistant dashboard.
//!
//! # Responsibility
//! - Define the five record shapes stored per session.
//! - Coerce raw form input into typed field values.
//!
//! # Invariants
//! - Records are plain owned data; the store never shares them.
//! - `Amount` is exact (integer cents), so totals never drift.
//! - `TaskRecord` is a sum type; callers match on it instead of probing
//!   optional fields.

pub mod expense;
pub mod input;
pub mod meeting;
pub mod record;
pub mod reminder;
pub mod task;
pub mod trip;
