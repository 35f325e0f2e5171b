//! Shared numeric and identifier constants for the board core.

// ── Auto-scroll ─────────────────────────────────────────────────

/// Width of the edge zone, in pixels, that triggers horizontal auto-scroll.
pub const EDGE_MARGIN_PX: f64 = 50.0;

/// Pixels scrolled per auto-scroll tick.
pub const SCROLL_STEP_PX: f64 = 10.0;

/// Interval between auto-scroll ticks, in milliseconds.
pub const SCROLL_TICK_MS: u64 = 10;

// ── Identifiers ─────────────────────────────────────────────────

/// Droppable identifier of the board's own column list (container gestures).
pub const COLUMN_LIST_ID: &str = "all-columns";

/// Prefix for freshly minted column identifiers.
pub const COLUMN_ID_PREFIX: &str = "col-";

/// Prefix for freshly minted task identifiers.
pub const TASK_ID_PREFIX: &str = "task-";

// ── Remote store ────────────────────────────────────────────────

/// Base URL of the board REST store when none is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:4000";

/// Whole-request timeout for store calls, in seconds.
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

/// Connect timeout for store calls, in seconds.
pub const DEFAULT_API_CONNECT_TIMEOUT_SECS: u64 = 10;
