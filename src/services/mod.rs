//! Board services: persistence sync and the column/task convenience edits.
//!
//! | Module | Role |
//! |--------|------|
//! | [`persistence`] | Fire-and-forget full replacement writes |
//! | [`column`] | Add, delete, and rename columns |
//! | [`task`] | Add, delete, and edit tasks |
//!
//! Every edit here is a pure function from the current column list to a new
//! one. [`crate::state::BoardState`] applies the result locally and hands it
//! to [`persistence::PersistenceSync`].

pub mod column;
pub mod persistence;
pub mod task;

use crate::board::{ColumnId, TaskId};

/// Errors produced by column and task edits. A rejected edit writes nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MutationError {
    #[error("column not found: {0}")]
    ColumnNotFound(ColumnId),

    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    #[error("title must not be blank")]
    EmptyTitle,
}
