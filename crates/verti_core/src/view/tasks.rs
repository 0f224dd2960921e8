//! Task sequence classification.

use crate::model::record::{MalformedRecordError, RecordKind};
use crate::model::task::{TaskKind, TaskRecord};
use crate::store::SessionState;

/// Classification of every task-sequence entry, in append order.
///
/// # Errors
/// - `MalformedRecordError` for the first project record with a blank name.
pub fn task_kinds(state: &SessionState) -> Result<Vec<TaskKind>, MalformedRecordError> {
    Ok(checked_tasks(state)?.map(TaskRecord::kind).collect())
}

/// Counts of `(projects, task batches)`.
pub fn task_kind_counts(state: &SessionState) -> Result<(usize, usize), MalformedRecordError> {
    Ok(task_kinds(state)?
        .into_iter()
        .fold((0, 0), |(projects, batches), kind| match kind {
            TaskKind::Project => (projects + 1, batches),
            TaskKind::TaskBatch => (projects, batches + 1),
        }))
}

pub(crate) fn checked_tasks(
    state: &SessionState,
) -> Result<impl Iterator<Item = &TaskRecord>, MalformedRecordError> {
    for (index, record) in state.tasks().iter().enumerate() {
        record.validate().map_err(|defect| MalformedRecordError {
            kind: RecordKind::Task,
            index,
            defect,
        })?;
    }
    Ok(state.tasks().iter())
}
