//! Handoff entry model
//!
//! A handoff records what a working session finished and what comes next.
//! Entries are append-only.

use serde::{Deserialize, Serialize};

/// Agent name recorded when none is given
pub const DEFAULT_AGENT: &str = "Antigravity";

/// One session handoff
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandoffEntry {
    /// When the handoff was written (RFC 3339)
    pub timestamp: String,
    /// Who wrote it
    pub agent: String,
    /// Session identifier, possibly empty
    #[serde(default)]
    pub session_id: String,
    /// Work finished in the session
    #[serde(default)]
    pub tasks_completed: Vec<String>,
    /// Work left for the next session
    #[serde(default)]
    pub next_steps: Vec<String>,
    /// Free-form notes
    #[serde(default)]
    pub notes: String,
}

impl HandoffEntry {
    /// Create an entry stamped with the current time
    #[must_use]
    pub fn new(agent: Option<String>) -> Self {
        Self {
            timestamp: chrono::Local::now().to_rfc3339(),
            agent: agent.unwrap_or_else(|| DEFAULT_AGENT.to_string()),
            session_id: String::new(),
            tasks_completed: Vec::new(),
            next_steps: Vec::new(),
            notes: String::new(),
        }
    }

    /// Set the session ID
    #[must_use]
    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = session_id.into();
        self
    }

    /// Set completed tasks
    #[must_use]
    pub fn with_tasks_completed(mut self, tasks: Vec<String>) -> Self {
        self.tasks_completed = tasks;
        self
    }

    /// Set next steps
    #[must_use]
    pub fn with_next_steps(mut self, steps: Vec<String>) -> Self {
        self.next_steps = steps;
        self
    }

    /// Set notes
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}
