//! Drag session controller: the single entry point for gesture events.
//!
//! DESIGN
//! ======
//! `DragSession` is the board-side counterpart of a drag-and-drop library.
//! The host forwards three events (drag start, pointer samples, drop) and
//! gets back a [`SessionOutcome`] describing what happened, the same way the
//! canvas engine hands actions back to its host.
//!
//! At most one gesture is tracked. Pointer samples update the shared
//! [`SessionState`] and re-evaluate the auto-scroll loop. On drop the nominal
//! destination is reconciled with pointer geometry, the move is resolved into
//! a new board, the board is published locally, and a replacement write is
//! spawned.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here fails the gesture. A cancelled drop or an unresolvable move
//! leaves the board untouched and issues no write; both are reported through
//! the outcome and logged.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::autoscroll::{AutoScrollConfig, AutoScroller, ScrollDirection, ScrollViewport};
use crate::correct::{correct_destination, Correction};
use crate::geometry::{GeometryProvider, Point};
use crate::input::{DragKind, DragPhase, DropResult, Location, SessionState};
use crate::reorder::{try_resolve, ResolveError};
use crate::state::{BoardState, PendingWrite};

/// What a session event did, for the host to act on.
#[derive(Debug)]
pub enum SessionOutcome {
    /// A gesture was already in progress; the new one was not started.
    Rejected,
    /// A gesture of this kind is now being tracked.
    Started(DragKind),
    /// The event arrived with no gesture in progress.
    Ignored,
    /// A pointer sample was recorded; carries the auto-scroll classification.
    Sampled(ScrollDirection),
    /// The gesture ended without a destination.
    Cancelled,
    /// The drop could not be applied; the board is unchanged.
    Unchanged(ResolveError),
    /// The drop was applied and its write spawned.
    Applied { destination: Location, correction: Correction, write: PendingWrite },
}

pub struct DragSession<G: GeometryProvider, V: ScrollViewport> {
    phase: DragPhase,
    session: SessionState,
    scroller: AutoScroller<V>,
    geometry: G,
    board: Arc<BoardState>,
}

impl<G: GeometryProvider, V: ScrollViewport> DragSession<G, V> {
    #[must_use]
    pub fn new(board: Arc<BoardState>, geometry: G, viewport: Arc<V>, config: AutoScrollConfig) -> Self {
        Self {
            phase: DragPhase::Idle,
            session: SessionState::default(),
            scroller: AutoScroller::new(viewport, config),
            geometry,
            board,
        }
    }

    // --- Accessors ---

    #[must_use]
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    #[must_use]
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    #[must_use]
    pub fn board(&self) -> &Arc<BoardState> {
        &self.board
    }

    #[must_use]
    pub fn scroller(&self) -> &AutoScroller<V> {
        &self.scroller
    }

    #[must_use]
    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    // --- Gesture events ---

    /// Start tracking a gesture.
    pub fn begin_drag(&mut self, kind: DragKind) -> SessionOutcome {
        if let DragPhase::Dragging(active) = self.phase {
            warn!(?active, requested = ?kind, "drag already in progress; ignoring begin");
            return SessionOutcome::Rejected;
        }

        self.phase = DragPhase::Dragging(kind);
        self.session = SessionState::begun();
        debug!(?kind, "drag started");
        SessionOutcome::Started(kind)
    }

    /// Record a pointer sample and re-evaluate auto-scroll.
    ///
    /// `prospective` is the destination the drag library currently reports,
    /// if any. It is kept for diagnostics only.
    pub fn on_pointer_move(&mut self, point: Point, prospective: Option<Location>) -> SessionOutcome {
        if !self.phase.is_dragging() || !self.session.sampling {
            debug!(x = point.x, y = point.y, "pointer sample outside a drag; ignoring");
            return SessionOutcome::Ignored;
        }

        self.session.pointer = Some(point);
        self.session.prospective = prospective;
        // First sample of the session grants scroll permission.
        self.session.scroll_allowed = true;
        SessionOutcome::Sampled(self.scroller.update(&self.session))
    }

    /// Finish the gesture and apply its drop, if it has one.
    pub fn end_drag(&mut self, result: &DropResult) -> SessionOutcome {
        let DragPhase::Dragging(kind) = self.phase else {
            debug!("drop outside a drag; ignoring");
            return SessionOutcome::Ignored;
        };
        if kind != result.kind {
            warn!(tracked = ?kind, reported = ?result.kind, "drop kind differs from tracked drag");
        }

        let pointer = self.session.pointer;
        self.session.sampling = false;
        self.session.scroll_allowed = false;
        self.scroller.update(&self.session);
        self.phase = DragPhase::Idle;

        let Some(nominal) = &result.destination else {
            debug!(?kind, "drag cancelled");
            return SessionOutcome::Cancelled;
        };

        let geometry = &self.geometry;
        let applied = self.board.edit(|current| {
            let corrected = correct_destination(geometry, current, result.kind, &result.source, nominal, pointer);
            try_resolve(current, result.kind, &result.source, &corrected.destination)
                .map(|next| (next, corrected))
                .map_err(|e| (e, current.id.clone()))
        });

        match applied {
            Ok((corrected, write)) => {
                info!(
                    kind = ?result.kind,
                    from = %result.source.container_id,
                    to = %corrected.destination.container_id,
                    index = corrected.destination.index,
                    "drop applied"
                );
                SessionOutcome::Applied { destination: corrected.destination, correction: corrected.correction, write }
            }
            Err((e, board_id)) => {
                warn!(error = %e, %board_id, "drop not applied; board unchanged");
                SessionOutcome::Unchanged(e)
            }
        }
    }
}
