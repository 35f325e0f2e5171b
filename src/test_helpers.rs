//! Fixtures shared by the unit tests.

use std::sync::Mutex;

use crate::autoscroll::ScrollViewport;
use crate::board::{Board, Column, Task};
use crate::geometry::Rect;

pub(crate) const TEST_BOARD_ID: &str = "board-1";

/// Build a board from `(column_id, [task_id, ...])` pairs. Titles mirror ids.
pub(crate) fn board_of(columns: &[(&str, &[&str])]) -> Board {
    Board {
        id: TEST_BOARD_ID.to_owned(),
        title: "Test board".to_owned(),
        columns: columns
            .iter()
            .map(|(cid, tasks)| Column {
                id: (*cid).to_owned(),
                title: (*cid).to_owned(),
                tasks: tasks
                    .iter()
                    .map(|tid| Task { id: (*tid).to_owned(), title: (*tid).to_owned(), description: None, tags: None })
                    .collect(),
            })
            .collect(),
    }
}

/// Task ids of one column, in order. Empty when the column is missing.
pub(crate) fn task_ids(board: &Board, column_id: &str) -> Vec<String> {
    board
        .column(column_id)
        .map(|c| c.tasks.iter().map(|t| t.id.clone()).collect())
        .unwrap_or_default()
}

/// Column ids of a board, in order.
pub(crate) fn column_ids(board: &Board) -> Vec<String> {
    board.columns.iter().map(|c| c.id.clone()).collect()
}

/// Viewport that records every scroll step it receives.
pub(crate) struct RecordingViewport {
    bounds: Rect,
    steps: Mutex<Vec<f64>>,
}

impl RecordingViewport {
    pub(crate) fn new(bounds: Rect) -> Self {
        Self { bounds, steps: Mutex::new(Vec::new()) }
    }

    pub(crate) fn steps(&self) -> Vec<f64> {
        self.steps.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub(crate) fn scrolled(&self) -> f64 {
        self.steps().iter().sum()
    }
}

impl ScrollViewport for RecordingViewport {
    fn bounds(&self) -> Option<Rect> {
        Some(self.bounds)
    }

    fn scroll_by(&self, dx: f64) {
        if let Ok(mut steps) = self.steps.lock() {
            steps.push(dx);
        }
    }
}
