//! Drop-target correction against live geometry.
//!
//! Near column boundaries during fast motion the gesture library can report a
//! stale destination column, because hit-testing across nested scroll regions
//! lags the pointer. At drop time the last recorded pointer sample is hit
//! tested again through the [`GeometryProvider`], and that answer wins.
//!
//! When the column was substituted for a cross-column item move, the reported
//! index belongs to the wrong column and is re-estimated from where the
//! pointer sits vertically within the corrected column.

#[cfg(test)]
#[path = "correct_test.rs"]
mod correct_test;

use tracing::debug;

use crate::board::Board;
use crate::geometry::{ContainerId, GeometryProvider, Point, Rect};
use crate::input::{DragKind, Location};

/// Why no correction was attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Column drags move within the single column list.
    ContainerGesture,
    /// No pointer sample was recorded during the session.
    NoPointer,
    /// Nothing eligible lies under the pointer.
    NoContainerUnderPointer,
    /// The container under the pointer is not a column of this board.
    NotAColumn(ContainerId),
}

/// What the corrector did with the nominal destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Correction {
    Skipped(SkipReason),
    /// Geometry agrees with the nominal destination.
    Confirmed,
    /// Geometry named a different column, which replaced the nominal one.
    Substituted {
        from: ContainerId,
        /// Whether the insertion index was re-estimated from the pointer.
        index_estimated: bool,
    },
}

/// The authoritative destination plus a record of how it was reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corrected {
    pub destination: Location,
    pub correction: Correction,
}

impl Corrected {
    fn unchanged(nominal: &Location, correction: Correction) -> Self {
        Self { destination: nominal.clone(), correction }
    }
}

/// Reconcile the nominal drop destination with the container under `pointer`.
pub fn correct_destination<G>(
    geometry: &G,
    board: &Board,
    kind: DragKind,
    source: &Location,
    nominal: &Location,
    pointer: Option<Point>,
) -> Corrected
where
    G: GeometryProvider + ?Sized,
{
    if kind == DragKind::ContainerReorder {
        return Corrected::unchanged(nominal, Correction::Skipped(SkipReason::ContainerGesture));
    }
    let Some(pt) = pointer else {
        return Corrected::unchanged(nominal, Correction::Skipped(SkipReason::NoPointer));
    };
    let Some(found) = geometry.container_at(pt) else {
        return Corrected::unchanged(nominal, Correction::Skipped(SkipReason::NoContainerUnderPointer));
    };
    if found == nominal.container_id {
        return Corrected::unchanged(nominal, Correction::Confirmed);
    }
    let Some(column) = board.column(&found) else {
        return Corrected::unchanged(nominal, Correction::Skipped(SkipReason::NotAColumn(found)));
    };

    let mut index = nominal.index;
    let mut index_estimated = false;
    // EDGE: a same-column drop keeps the library's index; only the foreign
    // column's index is meaningless.
    if found != source.container_id {
        if let Some(estimate) = geometry
            .bounds_of(&found)
            .and_then(|bounds| estimate_index(pt, bounds, column.tasks.len()))
        {
            index = estimate;
            index_estimated = true;
        }
    }

    debug!(
        nominal = %nominal.container_id,
        corrected = %found,
        index,
        index_estimated,
        "drop destination corrected from pointer geometry"
    );

    Corrected {
        destination: Location { container_id: found, index },
        correction: Correction::Substituted { from: nominal.container_id.clone(), index_estimated },
    }
}

/// Estimate an insertion index from the pointer's vertical position in `bounds`.
///
/// Returns `None` for degenerate bounds (zero or negative height).
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn estimate_index(pointer: Point, bounds: Rect, task_count: usize) -> Option<usize> {
    if bounds.height.is_nan() || bounds.height <= 0.0 {
        return None;
    }
    let fraction = (pointer.y - bounds.top) / bounds.height;
    let raw = (fraction * task_count as f64).round();
    Some(raw.clamp(0.0, task_count as f64) as usize)
}
