//! Geometry: points, rectangles, and the container hit-testing capability.
//!
//! The drag core never measures rendered layout itself. Whatever draws the
//! board implements [`GeometryProvider`] and answers two questions: where is a
//! container, and which container is under a point. [`LayoutGeometry`] is an
//! in-memory implementation over registered rectangles, used by hosts that
//! already own a layout pass and by the tests.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// Identifier of a drop container: a column id, or the board's column list.
pub type ContainerId = String;

/// A point in viewport coordinates (CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned bounding rectangle in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Build a rectangle from its four edges.
    #[must_use]
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, width: right - left, height: bottom - top }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Whether `pt` lies inside. Left/top edges are inclusive, right/bottom exclusive.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.left && pt.x < self.right() && pt.y >= self.top && pt.y < self.bottom()
    }
}

/// Hit-testing against rendered geometry. Any rendering backend implements this.
pub trait GeometryProvider {
    /// Current bounding rectangle of a container, if it is laid out.
    fn bounds_of(&self, id: &str) -> Option<Rect>;

    /// The deepest eligible container under `pt`, if any.
    fn container_at(&self, pt: Point) -> Option<ContainerId>;
}

/// Geometry backed by a list of registered container rectangles.
///
/// Containers nest (the column list encloses every column), so the deepest
/// container under a point is the smallest registered rectangle containing it.
#[derive(Debug, Clone, Default)]
pub struct LayoutGeometry {
    entries: Vec<(ContainerId, Rect)>,
}

impl LayoutGeometry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or move a container.
    pub fn set(&mut self, id: impl Into<ContainerId>, rect: Rect) {
        let id = id.into();
        if let Some(entry) = self.entries.iter_mut().find(|(eid, _)| *eid == id) {
            entry.1 = rect;
        } else {
            self.entries.push((id, rect));
        }
    }
}

impl GeometryProvider for LayoutGeometry {
    fn bounds_of(&self, id: &str) -> Option<Rect> {
        self.entries
            .iter()
            .find(|(eid, _)| eid == id)
            .map(|(_, rect)| *rect)
    }

    fn container_at(&self, pt: Point) -> Option<ContainerId> {
        self.entries
            .iter()
            .filter(|(_, rect)| rect.contains(pt))
            .min_by(|(_, a), (_, b)| a.area().total_cmp(&b.area()))
            .map(|(id, _)| id.clone())
    }
}
