//! Horizontal auto-scroll while a drag hovers near the viewport's edges.
//!
//! The controller is re-evaluated on every pointer sample and every change of
//! the scroll permission. Each evaluation classifies the pointer against the
//! viewport's edge zones and then makes sure at most one scroll loop is alive:
//! a loop in the classified direction when scrolling is permitted, none
//! otherwise. The loop itself is a tokio task stepping the viewport by a
//! constant delta at a fixed interval until it is aborted.

#[cfg(test)]
#[path = "autoscroll_test.rs"]
mod autoscroll_test;

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, warn};

use crate::consts::{EDGE_MARGIN_PX, SCROLL_STEP_PX, SCROLL_TICK_MS};
use crate::geometry::Rect;
use crate::input::SessionState;

/// Where the pointer sits relative to the viewport's edge zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
    Stable,
}

/// Classify a pointer x-coordinate against `bounds` with an edge zone of `margin`.
#[must_use]
pub fn classify(x: Option<f64>, bounds: Rect, margin: f64) -> ScrollDirection {
    let Some(x) = x else {
        return ScrollDirection::Stable;
    };
    if x < bounds.left + margin {
        ScrollDirection::Left
    } else if x > bounds.right() - margin {
        ScrollDirection::Right
    } else {
        ScrollDirection::Stable
    }
}

/// The horizontally overflowing element being scrolled.
///
/// Implementations use interior mutability: `scroll_by` is called from the
/// scroll loop task.
pub trait ScrollViewport: Send + Sync + 'static {
    /// Current bounding rectangle, or `None` when the viewport is not mounted.
    fn bounds(&self) -> Option<Rect>;

    /// Scroll horizontally by `dx` pixels (negative scrolls left).
    fn scroll_by(&self, dx: f64);
}

/// Edge zone width and loop cadence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoScrollConfig {
    pub edge_margin: f64,
    pub step_px: f64,
    pub tick: Duration,
}

impl Default for AutoScrollConfig {
    fn default() -> Self {
        Self { edge_margin: EDGE_MARGIN_PX, step_px: SCROLL_STEP_PX, tick: Duration::from_millis(SCROLL_TICK_MS) }
    }
}

struct ScrollLoop {
    direction: ScrollDirection,
    handle: JoinHandle<()>,
}

/// Owns the single scroll loop of a viewport.
pub struct AutoScroller<V: ScrollViewport> {
    viewport: Arc<V>,
    config: AutoScrollConfig,
    active: Option<ScrollLoop>,
}

impl<V: ScrollViewport> AutoScroller<V> {
    #[must_use]
    pub fn new(viewport: Arc<V>, config: AutoScrollConfig) -> Self {
        Self { viewport, config, active: None }
    }

    /// The viewport this controller scrolls.
    #[must_use]
    pub fn viewport(&self) -> &Arc<V> {
        &self.viewport
    }

    /// Re-evaluate against the latest session values. Returns the classification.
    pub fn update(&mut self, session: &SessionState) -> ScrollDirection {
        let direction = self
            .viewport
            .bounds()
            .map_or(ScrollDirection::Stable, |bounds| {
                classify(session.pointer_x(), bounds, self.config.edge_margin)
            });

        if direction == ScrollDirection::Stable || !session.scroll_allowed {
            self.stop();
            return direction;
        }

        // A live loop already heading this way is the loop we would start.
        if self.direction() == direction {
            return direction;
        }

        self.stop();
        self.start(direction);
        direction
    }

    /// Abort the running loop, if any.
    pub fn stop(&mut self) {
        if let Some(active) = self.active.take() {
            active.handle.abort();
            debug!(direction = ?active.direction, "auto-scroll stopped");
        }
    }

    /// Whether a scroll loop is currently running.
    #[must_use]
    pub fn is_scrolling(&self) -> bool {
        self.active.as_ref().is_some_and(|l| !l.handle.is_finished())
    }

    /// Direction of the running loop, or `Stable` when idle.
    #[must_use]
    pub fn direction(&self) -> ScrollDirection {
        match &self.active {
            Some(l) if !l.handle.is_finished() => l.direction,
            _ => ScrollDirection::Stable,
        }
    }

    fn start(&mut self, direction: ScrollDirection) {
        let Ok(runtime) = Handle::try_current() else {
            warn!("no tokio runtime; auto-scroll unavailable");
            return;
        };

        let dx = match direction {
            ScrollDirection::Left => -self.config.step_px,
            ScrollDirection::Right => self.config.step_px,
            ScrollDirection::Stable => return,
        };
        let tick = self.config.tick.max(Duration::from_millis(1));
        let viewport = Arc::clone(&self.viewport);

        let handle = runtime.spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + tick, tick);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                viewport.scroll_by(dx);
            }
        });

        debug!(?direction, "auto-scroll started");
        self.active = Some(ScrollLoop { direction, handle });
    }
}

impl<V: ScrollViewport> Drop for AutoScroller<V> {
    fn drop(&mut self) {
        self.stop();
    }
}
