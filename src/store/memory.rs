//! In-process board store.
//!
//! Holds boards in a map behind a `tokio` lock and records every accepted
//! write, so callers can observe exactly which replacements were issued. A
//! failure can be armed to make subsequent writes fail.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::collections::HashMap;

use tokio::sync::RwLock;

use super::{BoardStore, StoreError};
use crate::board::{Board, BoardId, Column};

/// One accepted column replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedWrite {
    pub board_id: BoardId,
    pub columns: Vec<Column>,
}

#[derive(Default)]
pub struct MemoryBoardStore {
    boards: RwLock<HashMap<BoardId, Board>>,
    writes: RwLock<Vec<RecordedWrite>>,
    failure: RwLock<Option<String>>,
}

impl MemoryBoardStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-loaded with `boards`.
    #[must_use]
    pub fn with_boards(boards: Vec<Board>) -> Self {
        let map = boards.into_iter().map(|b| (b.id.clone(), b)).collect();
        Self { boards: RwLock::new(map), ..Self::default() }
    }

    /// Make every following write fail with `message`, or clear with `None`.
    pub async fn set_failure(&self, message: Option<&str>) {
        *self.failure.write().await = message.map(str::to_owned);
    }

    /// Accepted writes, oldest first.
    pub async fn writes(&self) -> Vec<RecordedWrite> {
        self.writes.read().await.clone()
    }

    /// Current stored copy of a board.
    pub async fn board(&self, board_id: &str) -> Option<Board> {
        self.boards.read().await.get(board_id).cloned()
    }
}

#[async_trait::async_trait]
impl BoardStore for MemoryBoardStore {
    async fn replace_columns(&self, board_id: &str, columns: &[Column]) -> Result<(), StoreError> {
        if let Some(message) = self.failure.read().await.clone() {
            return Err(StoreError::Injected(message));
        }

        {
            let mut boards = self.boards.write().await;
            let Some(board) = boards.get_mut(board_id) else {
                return Err(StoreError::BoardNotFound(board_id.to_owned()));
            };
            board.columns = columns.to_vec();
        }

        self.writes
            .write()
            .await
            .push(RecordedWrite { board_id: board_id.to_owned(), columns: columns.to_vec() });
        Ok(())
    }

    async fn fetch_boards(&self) -> Result<Vec<Board>, StoreError> {
        let mut boards: Vec<Board> = self.boards.read().await.values().cloned().collect();
        boards.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(boards)
    }
}
