use crate::domain::{
    reducer::{self, Operation, Outcome},
    Board, BoardConfig, ColumnId, TaskId,
};
use crate::error::Result;

/// Holds the current board and replaces it on every operation
///
/// The store is the only writer. Each call runs to completion and swaps in
/// the reducer's result, so a borrowed snapshot is never mutated underneath
/// an observer.
#[derive(Debug, Clone, Default)]
pub struct BoardStore {
    board: Board,
    revision: u64,
}

impl BoardStore {
    pub fn new(board: Board) -> Self {
        Self { board, revision: 0 }
    }

    pub fn from_config(config: BoardConfig) -> Result<Self> {
        Ok(Self::new(Board::new(config)?))
    }

    /// Current board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Owned copy of the current board
    pub fn snapshot(&self) -> Board {
        self.board.clone()
    }

    /// Number of operations that changed the board
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn dispatch(&mut self, operation: Operation) -> Outcome {
        let reduction = reducer::reduce(&self.board, &operation);
        if reduction.outcome.is_applied() {
            self.board = reduction.board;
            self.revision += 1;
        }
        reduction.outcome
    }

    pub fn add_task(&mut self, column: impl Into<ColumnId>, text: impl Into<String>) -> Outcome {
        self.dispatch(Operation::add_task(column, text))
    }

    pub fn rename_task(&mut self, task: impl Into<TaskId>, text: impl Into<String>) -> Outcome {
        self.dispatch(Operation::rename_task(task, text))
    }

    pub fn delete_task(&mut self, task: impl Into<TaskId>) -> Outcome {
        self.dispatch(Operation::delete_task(task))
    }

    pub fn move_task(&mut self, active: impl Into<TaskId>, over: impl Into<String>) -> Outcome {
        self.dispatch(Operation::move_task(active, over))
    }
}
