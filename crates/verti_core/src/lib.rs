//! Core session logic for the Verti assistant.
//! This crate owns the per-session record store, its mutators and the views
//! derived from it; hosts inject the completion gateway.

pub mod completion;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod view;

pub use completion::{Completion, CompletionError, CompletionResult, StubCompletion};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::expense::{Amount, Expense, ExpenseCategory};
pub use model::input::ValidationError;
pub use model::meeting::Meeting;
pub use model::record::{MalformedRecordError, RecordDefect, RecordKind};
pub use model::reminder::Reminder;
pub use model::task::{ProjectRecord, TaskBatch, TaskKind, TaskRecord};
pub use model::trip::Trip;
pub use service::features::{
    AssistantService, CorrespondenceKind, ExpenseForm, Feature, FeatureError, FeatureResult,
    MeetingRequest, ProjectRequest, TripRequest,
};
pub use store::{RecordSeq, SessionError, SessionId, SessionRegistry, SessionState};
pub use view::meetings::LookupError;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
