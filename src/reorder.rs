//! Reorder resolver: compute a new board from a drag's source and destination.
//!
//! Pure functions only. Every successful resolution builds fresh owning
//! sequences (the board's column list, or one or two task lists) and leaves
//! every other column equal in value to its input. Failure is closed: an
//! unknown container or an empty source slot yields the input board untouched.
//!
//! Both reorder kinds share one primitive: remove the element at the source
//! index, then insert it at the destination index clamped to the length of
//! the target sequence after removal.

#[cfg(test)]
#[path = "reorder_test.rs"]
mod reorder_test;

use tracing::warn;

use crate::board::Board;
use crate::consts::COLUMN_LIST_ID;
use crate::geometry::ContainerId;
use crate::input::{DragKind, Location};

/// Why a move could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("unknown container: {0}")]
    UnknownContainer(ContainerId),
    #[error("source index {index} out of range for {container} (len {len})")]
    SourceIndexOutOfRange { container: ContainerId, index: usize, len: usize },
}

// =============================================================================
// SEQUENCE PRIMITIVES
// =============================================================================

/// Split the element at `index` out of `seq`. `None` if `index` is past the end.
#[must_use]
pub fn remove_at<T: Clone>(seq: &[T], index: usize) -> Option<(T, Vec<T>)> {
    if index >= seq.len() {
        return None;
    }
    let mut rest = seq.to_vec();
    let item = rest.remove(index);
    Some((item, rest))
}

/// Insert `item` at `index` clamped to `[0, seq.len()]`. Returns the position used.
pub fn insert_clamped<T>(seq: &mut Vec<T>, index: usize, item: T) -> usize {
    let at = index.min(seq.len());
    seq.insert(at, item);
    at
}

/// Remove-then-clamped-insert within a single sequence.
#[must_use]
pub fn move_within<T: Clone>(seq: &[T], from: usize, to: usize) -> Option<Vec<T>> {
    let (item, mut rest) = remove_at(seq, from)?;
    insert_clamped(&mut rest, to, item);
    Some(rest)
}

// =============================================================================
// RESOLUTION
// =============================================================================

/// Apply a move, reporting why it was rejected.
///
/// # Errors
///
/// Returns [`ResolveError`] when either container is missing from `board`
/// (for column drags, when either is not the column list) or the source
/// index does not address an element.
pub fn try_resolve(
    board: &Board,
    kind: DragKind,
    source: &Location,
    destination: &Location,
) -> Result<Board, ResolveError> {
    match kind {
        DragKind::ContainerReorder => {
            // Columns live in the board's single column list.
            for loc in [source, destination] {
                if loc.container_id != COLUMN_LIST_ID {
                    return Err(ResolveError::UnknownContainer(loc.container_id.clone()));
                }
            }
            let columns = move_within(&board.columns, source.index, destination.index).ok_or_else(|| {
                ResolveError::SourceIndexOutOfRange {
                    container: source.container_id.clone(),
                    index: source.index,
                    len: board.columns.len(),
                }
            })?;
            Ok(board.with_columns(columns))
        }
        DragKind::ItemReorder => resolve_item(board, source, destination),
    }
}

/// Apply a move, falling back to an unchanged copy of `board` on failure.
#[must_use]
pub fn resolve(board: &Board, kind: DragKind, source: &Location, destination: &Location) -> Board {
    match try_resolve(board, kind, source, destination) {
        Ok(next) => next,
        Err(e) => {
            warn!(error = %e, board_id = %board.id, "reorder rejected; keeping current order");
            board.clone()
        }
    }
}

fn resolve_item(board: &Board, source: &Location, destination: &Location) -> Result<Board, ResolveError> {
    let src_idx = board
        .column_index(&source.container_id)
        .ok_or_else(|| ResolveError::UnknownContainer(source.container_id.clone()))?;
    let dst_idx = board
        .column_index(&destination.container_id)
        .ok_or_else(|| ResolveError::UnknownContainer(destination.container_id.clone()))?;

    let src_col = &board.columns[src_idx];
    let out_of_range = || ResolveError::SourceIndexOutOfRange {
        container: src_col.id.clone(),
        index: source.index,
        len: src_col.tasks.len(),
    };

    let mut columns = board.columns.clone();

    if src_idx == dst_idx {
        let tasks = move_within(&src_col.tasks, source.index, destination.index).ok_or_else(out_of_range)?;
        columns[src_idx] = src_col.with_tasks(tasks);
    } else {
        let (moved, src_tasks) = remove_at(&src_col.tasks, source.index).ok_or_else(out_of_range)?;
        let dst_col = &board.columns[dst_idx];
        let mut dst_tasks = dst_col.tasks.clone();
        insert_clamped(&mut dst_tasks, destination.index, moved);
        columns[src_idx] = src_col.with_tasks(src_tasks);
        columns[dst_idx] = dst_col.with_tasks(dst_tasks);
    }

    Ok(board.with_columns(columns))
}
