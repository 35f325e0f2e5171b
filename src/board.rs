//! Board model: boards, columns, tasks, and identifier minting.
//!
//! A `Board` owns an ordered list of `Column`s and each column owns an ordered
//! list of `Task`s. Order is purely positional; there is no rank field. All
//! edits elsewhere in the crate build a new owning `Vec` and swap it in whole,
//! so a reader holding a clone never sees a half-edited column.
//!
//! Data flows into this layer from the remote store (JSON deserialization) and
//! out of it through the reorder resolver and the column/task services.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{COLUMN_ID_PREFIX, TASK_ID_PREFIX};

/// Unique identifier for a board.
pub type BoardId = String;

/// Unique identifier for a column, unique within its board.
pub type ColumnId = String;

/// Unique identifier for a task, unique across the whole board.
pub type TaskId = String;

/// Mint a fresh column identifier. Never collides with an existing one.
#[must_use]
pub fn new_column_id() -> ColumnId {
    format!("{COLUMN_ID_PREFIX}{}", Uuid::new_v4())
}

/// Mint a fresh task identifier. Never collides with an existing one.
#[must_use]
pub fn new_task_id() -> TaskId {
    format!("{TASK_ID_PREFIX}{}", Uuid::new_v4())
}

/// A single unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    /// Free-form body text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Labels attached to the task.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Task {
    /// Create a task with a freshly minted identifier.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self { id: new_task_id(), title: title.into(), description: None, tags: None }
    }
}

/// A column of tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Column {
    /// Create an empty column with a freshly minted identifier.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self { id: new_column_id(), title: title.into(), tasks: Vec::new() }
    }

    /// Return a copy of this column carrying `tasks` instead of its own.
    #[must_use]
    pub fn with_tasks(&self, tasks: Vec<Task>) -> Self {
        Self { id: self.id.clone(), title: self.title.clone(), tasks }
    }
}

/// The root aggregate and the unit of persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub title: String,
    #[serde(default)]
    pub columns: Vec<Column>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new(id: impl Into<BoardId>, title: impl Into<String>) -> Self {
        Self { id: id.into(), title: title.into(), columns: Vec::new() }
    }

    /// Return a copy of this board carrying `columns` instead of its own.
    #[must_use]
    pub fn with_columns(&self, columns: Vec<Column>) -> Self {
        Self { id: self.id.clone(), title: self.title.clone(), columns }
    }

    /// Total number of tasks across every column.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }

    /// Position of a column in the board's column list.
    #[must_use]
    pub fn column_index(&self, id: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.id == id)
    }

    /// Look up a column by id.
    #[must_use]
    pub fn column(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }
}

/// Find a task anywhere in `columns` as `(column_index, task_index)`.
#[must_use]
pub fn locate_task(columns: &[Column], id: &str) -> Option<(usize, usize)> {
    columns.iter().enumerate().find_map(|(ci, col)| {
        col.tasks
            .iter()
            .position(|t| t.id == id)
            .map(|ti| (ci, ti))
    })
}
