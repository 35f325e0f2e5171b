//! Persistence service: fire-and-forget full replacement writes.
//!
//! DESIGN
//! ======
//! Local board state is updated first and synchronously; this service then
//! spawns one task per accepted change that writes the board's entire column
//! list to the store. Writes are independent: no queue, no ordering between
//! them, no retry and no cancellation.
//!
//! ERROR HANDLING
//! ==============
//! A failed write is logged and dropped. Local state is never rolled back, so
//! the user keeps seeing their reordered board even when the store is down.

#[cfg(test)]
#[path = "persistence_test.rs"]
mod persistence_test;

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, error};

use crate::board::Column;
use crate::store::BoardStore;

#[derive(Clone)]
pub struct PersistenceSync {
    store: Arc<dyn BoardStore>,
}

impl PersistenceSync {
    #[must_use]
    pub fn new(store: Arc<dyn BoardStore>) -> Self {
        Self { store }
    }

    /// Spawn a replacement write of `columns` for `board_id`.
    ///
    /// The handle may be dropped; the write still runs. Returns `None` when
    /// called outside a tokio runtime, in which case nothing is written.
    pub fn push(&self, board_id: &str, columns: Vec<Column>) -> Option<JoinHandle<()>> {
        let Ok(runtime) = Handle::try_current() else {
            error!(%board_id, "no tokio runtime; board write dropped");
            return None;
        };

        let store = Arc::clone(&self.store);
        let board_id = board_id.to_owned();
        Some(runtime.spawn(async move {
            match store.replace_columns(&board_id, &columns).await {
                Ok(()) => debug!(%board_id, columns = columns.len(), "board columns persisted"),
                Err(e) => error!(error = %e, %board_id, "board write failed; keeping local state"),
            }
        }))
    }
}
