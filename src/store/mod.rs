//! Remote board store: the persistence port and its adapters.
//!
//! DESIGN
//! ======
//! The board is the unit of persistence. Every accepted structural change is
//! written as a full replacement of one board's column list; there are no
//! differential patches. Delivery is at-most-once and unordered: callers fire
//! writes and move on, and nothing here retries, cancels, or sequences them.
//!
//! | Adapter | Role |
//! |---------|------|
//! | [`http::HttpBoardStore`] | REST store reached over `reqwest` |
//! | [`memory::MemoryBoardStore`] | In-process store for tests and offline hosts |

pub mod http;
pub mod memory;

use crate::board::{Board, Column};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by board store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("store request failed: {0}")]
    Request(String),

    /// The store answered with a non-success status.
    #[error("store response error: status {status}")]
    Status { status: u16, body: String },

    /// The store's response body could not be decoded.
    #[error("store response decode failed: {0}")]
    Decode(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The addressed board does not exist in the store.
    #[error("board not found: {0}")]
    BoardNotFound(String),

    /// A failure injected by a test double.
    #[error("injected failure: {0}")]
    Injected(String),
}

// =============================================================================
// PORT
// =============================================================================

/// Persistence port consumed by the board core.
#[async_trait::async_trait]
pub trait BoardStore: Send + Sync {
    /// Replace the full column list of `board_id`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the write is rejected or never arrives.
    async fn replace_columns(&self, board_id: &str, columns: &[Column]) -> Result<(), StoreError>;

    /// Load every board the store holds.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the read fails or cannot be decoded.
    async fn fetch_boards(&self) -> Result<Vec<Board>, StoreError>;
}
