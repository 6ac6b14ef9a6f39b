//! # Task Board Core
//!
//! Board state for a three-column kanban task board, and the reducer that
//! applies task creation, renaming, deletion and drag-and-drop moves.
//!
//! Rendering and gesture recognition live elsewhere. This crate only turns
//! a board plus an intent into the next board.

pub mod domain;
pub mod drag;
pub mod error;
pub mod store;

// Re-export commonly used types
pub use domain::{
    board::{Board, BoardConfig},
    column::{Column, ColumnId},
    reducer::{reduce, NoOpReason, Operation, Outcome},
    task::{Task, TaskId},
};
pub use drag::{DragEvent, DragSession, DropIndicator};
pub use error::{BoardError, Result};
pub use store::BoardStore;
