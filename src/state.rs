//! Shared board state.
//!
//! DESIGN
//! ======
//! `BoardState` owns the current board and publishes it through a
//! `tokio::sync::watch` channel. Every change replaces the whole board value,
//! so a subscriber sees either the previous board or the next one and never a
//! half-applied edit. Each committed change is applied locally first, then
//! handed to [`PersistenceSync`] as a full column replacement.
//!
//! Edits read, compute, and publish under one edit lock, so two edits from
//! different threads both land instead of one overwriting the other.
//!
//! Loading a board from the store is not a change and issues no write.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::sync::{Mutex, PoisonError};

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::board::{Board, Column, ColumnId, TaskId};
use crate::services::persistence::PersistenceSync;
use crate::services::task::{TaskDraft, TaskPatch};
use crate::services::{column, task, MutationError};

/// Handle to a spawned persistence write. `None` when no runtime was available.
pub type PendingWrite = Option<JoinHandle<()>>;

pub struct BoardState {
    tx: watch::Sender<Board>,
    sync: PersistenceSync,
    /// Serializes read-compute-publish sequences.
    edit_lock: Mutex<()>,
}

impl BoardState {
    #[must_use]
    pub fn new(board: Board, sync: PersistenceSync) -> Self {
        let (tx, _rx) = watch::channel(board);
        Self { tx, sync, edit_lock: Mutex::new(()) }
    }

    /// Receiver that observes every committed board.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Board> {
        self.tx.subscribe()
    }

    /// Snapshot of the current board.
    #[must_use]
    pub fn current(&self) -> Board {
        self.tx.borrow().clone()
    }

    /// Replace the board wholesale without persisting it.
    pub fn load(&self, board: Board) {
        let _edit = self.lock_edits();
        self.tx.send_replace(board);
    }

    /// Publish `next` and spawn its replacement write.
    pub fn commit(&self, next: Board) -> PendingWrite {
        let _edit = self.lock_edits();
        self.publish(next)
    }

    /// Compute the next board from the current one and commit it, as one step.
    ///
    /// `f` returns the next board plus a value handed back to the caller.
    ///
    /// # Errors
    ///
    /// Propagates the error from `f`; nothing is published or written.
    pub fn edit<T, E, F>(&self, f: F) -> Result<(T, PendingWrite), E>
    where
        F: FnOnce(&Board) -> Result<(Board, T), E>,
    {
        let _edit = self.lock_edits();
        let current = self.current();
        let (next, value) = f(&current)?;
        Ok((value, self.publish(next)))
    }

    /// Read the column list, compute a new one with `f`, and commit it.
    ///
    /// # Errors
    ///
    /// Propagates the error from `f`; nothing is published or written.
    pub fn update_columns<F, E>(&self, f: F) -> Result<PendingWrite, E>
    where
        F: FnOnce(&[Column]) -> Result<Vec<Column>, E>,
    {
        self.edit(|board| Ok((board.with_columns(f(&board.columns)?), ())))
            .map(|((), write)| write)
    }

    fn publish(&self, next: Board) -> PendingWrite {
        let board_id = next.id.clone();
        let columns = next.columns.clone();
        self.tx.send_replace(next);
        self.sync.push(&board_id, columns)
    }

    fn lock_edits(&self) -> std::sync::MutexGuard<'_, ()> {
        self.edit_lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ── Columns ─────────────────────────────────────────────────────

    /// # Errors
    ///
    /// See [`column::add_column`].
    pub fn add_column(&self, title: &str) -> Result<(ColumnId, PendingWrite), MutationError> {
        self.edit(|board| {
            let (columns, id) = column::add_column(&board.columns, title)?;
            Ok((board.with_columns(columns), id))
        })
    }

    /// # Errors
    ///
    /// See [`column::delete_column`].
    pub fn delete_column(&self, column_id: &str) -> Result<PendingWrite, MutationError> {
        self.update_columns(|cols| column::delete_column(cols, column_id))
    }

    /// # Errors
    ///
    /// See [`column::rename_column`].
    pub fn rename_column(&self, column_id: &str, title: &str) -> Result<PendingWrite, MutationError> {
        self.update_columns(|cols| column::rename_column(cols, column_id, title))
    }

    // ── Tasks ───────────────────────────────────────────────────────

    /// # Errors
    ///
    /// See [`task::add_task`].
    pub fn add_task(&self, column_id: &str, draft: &TaskDraft) -> Result<(TaskId, PendingWrite), MutationError> {
        self.edit(|board| {
            let (columns, id) = task::add_task(&board.columns, column_id, draft)?;
            Ok((board.with_columns(columns), id))
        })
    }

    /// # Errors
    ///
    /// See [`task::delete_task`].
    pub fn delete_task(&self, task_id: &str) -> Result<PendingWrite, MutationError> {
        self.update_columns(|cols| task::delete_task(cols, task_id))
    }

    /// # Errors
    ///
    /// See [`task::update_task`].
    pub fn update_task(&self, task_id: &str, patch: &TaskPatch) -> Result<PendingWrite, MutationError> {
        self.update_columns(|cols| task::update_task(cols, task_id, patch))
    }
}
