//! Session isolation for long-lived hosts.
//!
//! # Invariants
//! - Each `SessionId` maps to exactly one `SessionState`.
//! - Sessions never share records; closing one drops its records.
//! - Ids are generated here and never reused while the registry lives.

use log::{debug, info};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

use crate::store::session::SessionState;

/// Stable identifier of one user session.
pub type SessionId = Uuid;

/// Registry lookup errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    NotFound(SessionId),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "session not found: {id}"),
        }
    }
}

impl Error for SessionError {}

/// Owns the state of every open session, keyed by session id.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: BTreeMap<SessionId, SessionState>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a fresh session with five empty sequences.
    pub fn open_session(&mut self) -> SessionId {
        let mut id = Uuid::new_v4();
        while self.sessions.contains_key(&id) {
            id = Uuid::new_v4();
        }
        self.sessions.insert(id, SessionState::new());
        info!(
            "event=session_open module=store status=ok open_sessions={}",
            self.sessions.len()
        );
        id
    }

    /// Drops a session and all of its records.
    pub fn close_session(&mut self, id: SessionId) -> Result<SessionState, SessionError> {
        let state = self
            .sessions
            .remove(&id)
            .ok_or(SessionError::NotFound(id))?;
        info!(
            "event=session_close module=store status=ok open_sessions={}",
            self.sessions.len()
        );
        Ok(state)
    }

    pub fn session(&self, id: SessionId) -> Result<&SessionState, SessionError> {
        self.sessions.get(&id).ok_or(SessionError::NotFound(id))
    }

    pub fn session_mut(&mut self, id: SessionId) -> Result<&mut SessionState, SessionError> {
        match self.sessions.get_mut(&id) {
            Some(state) => Ok(state),
            None => {
                debug!("event=session_lookup module=store status=not_found");
                Err(SessionError::NotFound(id))
            }
        }
    }

    pub fn contains(&self, id: SessionId) -> bool {
        self.sessions.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Returns sorted session ids.
    pub fn session_ids(&self) -> Vec<SessionId> {
        self.sessions.keys().copied().collect()
    }
}
