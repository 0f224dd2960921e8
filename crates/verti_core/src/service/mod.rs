//! Session use-case services.
//!
//! # Responsibility
//! - Append records through one mutator per record kind.
//! - Run menu features: coerce input, prompt the completion port, record.
//!
//! # Invariants
//! - Mutators are the only write path into `SessionState`.
//! - A feature never appends when its completion call fails.

pub mod features;
pub mod mutators;
pub mod prompts;
