//! Drag-and-drop reorder core for a column/task board.
//!
//! A host UI forwards drag events to [`session::DragSession`], which tracks
//! the single active gesture, drives edge auto-scrolling, reconciles the drop
//! target with pointer geometry, resolves the move into a new board, and
//! hands the result to the persistence layer.
//!
//! | Module | Role |
//! |--------|------|
//! | [`board`] | Board, column, and task model |
//! | [`input`] | Drag kinds, drop locations, session record |
//! | [`geometry`] | Points, rectangles, hit-testing port |
//! | [`reorder`] | Pure move resolution |
//! | [`correct`] | Pointer-based drop target correction |
//! | [`autoscroll`] | Edge auto-scroll loop |
//! | [`session`] | Gesture state machine |
//! | [`state`] | Published board value and committed edits |
//! | [`services`] | Persistence sync and column/task edits |
//! | [`store`] | Remote board store port and adapters |
//! | [`config`] | Environment configuration |

pub mod autoscroll;
pub mod board;
pub mod config;
pub mod consts;
pub mod correct;
pub mod geometry;
pub mod input;
pub mod reorder;
pub mod services;
pub mod session;
pub mod state;
pub mod store;

#[cfg(test)]
pub(crate) mod test_helpers;
