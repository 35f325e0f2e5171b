//! Gesture model: drag kinds, drop locations, and the shared session record.
//!
//! `DragPhase` is the gesture being tracked between pointer-down and drop.
//! `SessionState` is the explicit record of the values that both the session
//! controller (writer) and the auto-scroll controller (reader) care about: the
//! latest pointer sample and whether scrolling is currently permitted.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geometry::{ContainerId, Point};

/// What a gesture is moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    /// A whole column within the board's column list.
    ContainerReorder,
    /// A task within or across columns.
    ItemReorder,
}

/// A slot in a container: which container, and which position in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub container_id: ContainerId,
    pub index: usize,
}

impl Location {
    #[must_use]
    pub fn new(container_id: impl Into<ContainerId>, index: usize) -> Self {
        Self { container_id: container_id.into(), index }
    }
}

/// The gesture library's report at drop time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropResult {
    pub kind: DragKind,
    pub source: Location,
    /// `None` when the gesture was abandoned outside any valid container.
    pub destination: Option<Location>,
}

impl DropResult {
    /// A drop onto `destination`.
    #[must_use]
    pub fn dropped(kind: DragKind, source: Location, destination: Location) -> Self {
        Self { kind, source, destination: Some(destination) }
    }

    /// An abandoned gesture.
    #[must_use]
    pub fn cancelled(kind: DragKind, source: Location) -> Self {
        Self { kind, source, destination: None }
    }
}

/// Gesture state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    /// No gesture in progress; waiting for the next drag start.
    #[default]
    Idle,
    /// A gesture of the given kind is in progress.
    Dragging(DragKind),
}

impl DragPhase {
    #[must_use]
    pub fn is_dragging(self) -> bool {
        matches!(self, Self::Dragging(_))
    }
}

/// Per-session pointer and permission values.
///
/// Owned by the drag session; handed by reference to the auto-scroll
/// controller on every sample and permission change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    /// Most recent pointer sample of the current session.
    pub pointer: Option<Point>,
    /// Whether the auto-scroll loop may run.
    pub scroll_allowed: bool,
    /// Whether pointer samples are currently being accepted.
    pub sampling: bool,
    /// Destination the gesture library last reported while hovering.
    pub prospective: Option<Location>,
}

impl SessionState {
    /// Fresh state for a session that just began.
    #[must_use]
    pub fn begun() -> Self {
        Self { pointer: None, scroll_allowed: false, sampling: true, prospective: None }
    }

    /// Pointer x-coordinate, if a sample has been recorded.
    #[must_use]
    pub fn pointer_x(&self) -> Option<f64> {
        self.pointer.map(|p| p.x)
    }
}
