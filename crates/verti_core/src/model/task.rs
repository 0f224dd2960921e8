//! Task sequence records: tracked projects and prioritized task batches.
//!
//! # Invariants
//! - Both shapes share one sequence, discriminated by variant.
//! - On the wire a record is untagged: an object with a `project` field
//!   decodes as `TaskRecord::Project` or not at all; a task batch accepts
//!   no extra fields.
//! - A project record carries a non-blank project name.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::model::record::RecordDefect;

/// Project status snapshot plus generated advice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub project: String,
    pub goals: String,
    pub status: String,
    pub advice: String,
}

impl ProjectRecord {
    /// Checks the record invariants not encoded in the field types.
    pub fn validate(&self) -> Result<(), RecordDefect> {
        if self.project.trim().is_empty() {
            return Err(RecordDefect::EmptyProjectName);
        }
        Ok(())
    }
}

/// Raw task list plus the generated prioritization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskBatch {
    /// One task per line, as entered.
    pub tasks: String,
    pub prioritization: String,
}

/// One entry of the per-session task sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskRecord {
    Project(ProjectRecord),
    Batch(TaskBatch),
}

/// Classification used by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Project,
    TaskBatch,
}

impl TaskKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::TaskBatch => "task batch",
        }
    }

    /// Stable snake_case id used in log lines.
    pub fn id(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::TaskBatch => "task_batch",
        }
    }
}

impl Display for TaskKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TaskRecord {
    /// Classifies this entry as project or task batch.
    pub fn kind(&self) -> TaskKind {
        match self {
            Self::Project(_) => TaskKind::Project,
            Self::Batch(_) => TaskKind::TaskBatch,
        }
    }

    pub fn validate(&self) -> Result<(), RecordDefect> {
        match self {
            Self::Project(project) => project.validate(),
            Self::Batch(_) => Ok(()),
        }
    }
}

impl From<ProjectRecord> for TaskRecord {
    fn from(value: ProjectRecord) -> Self {
        Self::Project(value)
    }
}

impl From<TaskBatch> for TaskRecord {
    fn from(value: TaskBatch) -> Self {
        Self::Batch(value)
    }
}
