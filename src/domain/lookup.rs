//! Resolution of opaque drag identifiers against a board.
//!
//! The drag gesture source reports plain strings that may name either a
//! column or a task. [`Target::resolve`] decides which, once, so callers
//! branch on a tagged value instead of searching both sequences again.

use crate::domain::board::Board;

/// What an opaque identifier refers to on a given board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A column, addressed by its index in `Board::columns`
    Column { column: usize },
    /// A task at `index` within column `column`
    Task { column: usize, index: usize },
    None,
}

impl Target {
    /// Column IDs win over task IDs when both match.
    pub fn resolve(board: &Board, id: &str) -> Self {
        if let Some(column) = board.column_index(id) {
            return Self::Column { column };
        }
        match board.locate_task(id) {
            Some((column, index)) => Self::Task { column, index },
            None => Self::None,
        }
    }

    /// Resolves an identifier that must name a task
    pub fn resolve_task(board: &Board, id: &str) -> Self {
        match board.locate_task(id) {
            Some((column, index)) => Self::Task { column, index },
            None => Self::None,
        }
    }

    /// Index of the column this target lives in
    pub fn column(&self) -> Option<usize> {
        match *self {
            Self::Column { column } | Self::Task { column, .. } => Some(column),
            Self::None => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
