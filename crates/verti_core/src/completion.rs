//! Completion gateway port.
//!
//! # Responsibility
//! - Define the one outbound capability the assistant needs: prompt in,
//!   generated text out.
//! - Provide a deterministic in-process stub for offline runs and tests.
//!
//! # Invariants
//! - The core never performs network I/O itself; hosts inject an adapter.
//! - Adapters report failures as `CompletionError`, never by panicking.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CompletionResult<T> = Result<T, CompletionError>;

/// Failure reported by a completion adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionError {
    /// Service could not be reached or timed out.
    Unavailable(String),
    /// Service answered but refused the prompt.
    Rejected(String),
    /// Service answered with blank text.
    EmptyResponse,
}

impl Display for CompletionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(message) => write!(f, "completion service unavailable: {message}"),
            Self::Rejected(message) => write!(f, "completion rejected: {message}"),
            Self::EmptyResponse => write!(f, "completion returned an empty response"),
        }
    }
}

impl Error for CompletionError {}

/// Prompt-to-text capability supplied by the host application.
pub trait Completion {
    fn complete(&self, prompt: &str) -> CompletionResult<String>;
}

impl<F> Completion for F
where
    F: Fn(&str) -> CompletionResult<String>,
{
    fn complete(&self, prompt: &str) -> CompletionResult<String> {
        self(prompt)
    }
}

/// Scripted completion adapter.
///
/// Replies are served in FIFO order; once the script is exhausted the
/// fallback reply is returned. Every received prompt is captured.
#[derive(Debug, Default)]
pub struct StubCompletion {
    script: RefCell<VecDeque<CompletionResult<String>>>,
    fallback: Option<String>,
    prompts: RefCell<Vec<String>>,
}

impl StubCompletion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stub that answers every prompt with the same text.
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            fallback: Some(text.into()),
            ..Self::default()
        }
    }

    /// Queues one scripted result.
    pub fn push(&self, result: CompletionResult<String>) {
        self.script.borrow_mut().push_back(result);
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.borrow().len()
    }
}

impl Completion for StubCompletion {
    fn complete(&self, prompt: &str) -> CompletionResult<String> {
        self.prompts.borrow_mut().push(prompt.to_string());
        if let Some(result) = self.script.borrow_mut().pop_front() {
            return result;
        }
        match &self.fallback {
            Some(text) => Ok(text.clone()),
            None => Err(CompletionError::Unavailable(
                "stub script exhausted".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Completion, CompletionError, CompletionResult, StubCompletion};

    #[test]
    fn stub_serves_script_then_fallback() {
        let stub = StubCompletion::replying("fallback");
        stub.push(Ok("first".to_string()));
        stub.push(Err(CompletionError::Rejected("policy".to_string())));

        assert_eq!(stub.complete("a").unwrap(), "first");
        assert_eq!(
            stub.complete("b").unwrap_err(),
            CompletionError::Rejected("policy".to_string())
        );
        assert_eq!(stub.complete("c").unwrap(), "fallback");
        assert_eq!(stub.prompts(), ["a", "b", "c"]);
    }

    #[test]
    fn stub_without_fallback_reports_unavailable() {
        let stub = StubCompletion::new();
        assert!(matches!(
            stub.complete("hello"),
            Err(CompletionError::Unavailable(_))
        ));
        assert_eq!(stub.call_count(), 1);
    }

    #[test]
    fn closures_act_as_completion_adapters() {
        let echo = |prompt: &str| -> CompletionResult<String> { Ok(prompt.to_uppercase()) };
        assert_eq!(echo.complete("abc").unwrap(), "ABC");
    }
}
