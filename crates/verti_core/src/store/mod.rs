//! Per-session in-memory record store.
//!
//! # Responsibility
//! - Own every record created during one session.
//! - Expose append and ordered read access per record kind.
//!
//! # Invariants
//! - Sequences are append-only; there is no update or remove path.
//! - Read order equals append order.
//! - Nothing here is global: callers own a `SessionState` and pass it down.

pub mod registry;
mod sequence;
mod session;

pub use registry::{SessionError, SessionId, SessionRegistry};
pub use sequence::RecordSeq;
pub use session::SessionState;
