//! Pure board transitions.
//!
//! Every function here takes the current [`Board`] by reference and returns a
//! [`Reduction`] holding the next board. Stale or invalid input never fails;
//! it yields [`Outcome::Unchanged`] together with a board equal to the input.

use crate::domain::board::Board;
use crate::domain::column::ColumnId;
use crate::domain::lookup::Target;
use crate::domain::task::{normalize_text, Task, TaskId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An intent from the presentation layer or the drag gesture source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    AddTask { column: ColumnId, text: String },
    RenameTask { task: TaskId, text: String },
    DeleteTask { task: TaskId },
    /// `over` names either a task (insert at its slot) or a column (append)
    MoveTask { active: TaskId, over: String },
}

impl Operation {
    pub fn add_task(column: impl Into<ColumnId>, text: impl Into<String>) -> Self {
        Self::AddTask {
            column: column.into(),
            text: text.into(),
        }
    }

    pub fn rename_task(task: impl Into<TaskId>, text: impl Into<String>) -> Self {
        Self::RenameTask {
            task: task.into(),
            text: text.into(),
        }
    }

    pub fn delete_task(task: impl Into<TaskId>) -> Self {
        Self::DeleteTask { task: task.into() }
    }

    pub fn move_task(active: impl Into<TaskId>, over: impl Into<String>) -> Self {
        Self::MoveTask {
            active: active.into(),
            over: over.into(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::AddTask { .. } => "add_task",
            Self::RenameTask { .. } => "rename_task",
            Self::DeleteTask { .. } => "delete_task",
            Self::MoveTask { .. } => "move_task",
        }
    }
}

/// Why an operation left the board untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoOpReason {
    UnknownTask,
    UnknownColumn,
    UnknownTarget,
    EmptyText,
    SameText,
    SamePosition,
    /// A column drop target inside the task's own column. Cross-column drops
    /// onto a column append instead; this asymmetry is kept as-is.
    ColumnDropInSameColumn,
}

impl fmt::Display for NoOpReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTask => write!(f, "unknown task"),
            Self::UnknownColumn => write!(f, "unknown column"),
            Self::UnknownTarget => write!(f, "unknown drop target"),
            Self::EmptyText => write!(f, "empty text"),
            Self::SameText => write!(f, "text unchanged"),
            Self::SamePosition => write!(f, "task already at target position"),
            Self::ColumnDropInSameColumn => write!(f, "column drop within the same column"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Unchanged(NoOpReason),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// The next board and whether it differs from the previous one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    pub board: Board,
    pub outcome: Outcome,
}

impl Reduction {
    fn applied(board: Board) -> Self {
        Self {
            board,
            outcome: Outcome::Applied,
        }
    }

    fn unchanged(board: &Board, reason: NoOpReason) -> Self {
        Self {
            board: board.clone(),
            outcome: Outcome::Unchanged(reason),
        }
    }
}

/// Applies an operation, stamping new tasks with the current time
pub fn reduce(board: &Board, operation: &Operation) -> Reduction {
    reduce_at(board, operation, Utc::now())
}

/// Applies an operation with an explicit creation time for new task IDs
pub fn reduce_at(board: &Board, operation: &Operation, now: DateTime<Utc>) -> Reduction {
    let reduction = match operation {
        Operation::AddTask { column, text } => add_task(board, column.as_str(), text, now),
        Operation::RenameTask { task, text } => rename_task(board, task.as_str(), text),
        Operation::DeleteTask { task } => delete_task(board, task.as_str()),
        Operation::MoveTask { active, over } => move_task(board, active.as_str(), over),
    };

    match reduction.outcome {
        Outcome::Applied => tracing::trace!(operation = operation.name(), "board updated"),
        Outcome::Unchanged(reason) => {
            tracing::debug!(operation = operation.name(), %reason, "operation absorbed")
        }
    }

    reduction
}

/// Appends a task with the trimmed text to the end of a column
pub fn add_task(board: &Board, column_id: &str, text: &str, now: DateTime<Utc>) -> Reduction {
    let Some(text) = normalize_text(text) else {
        return Reduction::unchanged(board, NoOpReason::EmptyText);
    };
    let Some(col_idx) = board.column_index(column_id) else {
        return Reduction::unchanged(board, NoOpReason::UnknownColumn);
    };

    let column = &board.columns[col_idx].id;
    let id = board
        .id_strategy
        .generate(column, now, |candidate| board.contains_task(candidate.as_str()));

    let mut next = board.clone();
    next.columns[col_idx].tasks.push(Task::new(id, text));
    Reduction::applied(next)
}

/// Replaces a task's text in place
pub fn rename_task(board: &Board, task_id: &str, text: &str) -> Reduction {
    let Some(text) = normalize_text(text) else {
        return Reduction::unchanged(board, NoOpReason::EmptyText);
    };
    let Some((col_idx, pos)) = board.locate_task(task_id) else {
        return Reduction::unchanged(board, NoOpReason::UnknownTask);
    };
    if board.columns[col_idx].tasks[pos].text == text {
        return Reduction::unchanged(board, NoOpReason::SameText);
    }

    let mut next = board.clone();
    next.columns[col_idx].tasks[pos].text = text.to_string();
    Reduction::applied(next)
}

/// Removes a task, shifting the tasks after it up by one
pub fn delete_task(board: &Board, task_id: &str) -> Reduction {
    let Some((col_idx, pos)) = board.locate_task(task_id) else {
        return Reduction::unchanged(board, NoOpReason::UnknownTask);
    };

    let mut next = board.clone();
    next.columns[col_idx].tasks.remove(pos);
    Reduction::applied(next)
}

/// Moves `active_id` to the slot named by `over_id`.
///
/// `over_id` is a task ID (take that task's slot) or a column ID (append to
/// that column). Within a single column only task targets reorder; dropping
/// onto the task's own column is absorbed.
pub fn move_task(board: &Board, active_id: &str, over_id: &str) -> Reduction {
    let Target::Task {
        column: source,
        index: old_index,
    } = Target::resolve_task(board, active_id)
    else {
        return Reduction::unchanged(board, NoOpReason::UnknownTask);
    };
    let Some(destination) = Target::resolve(board, over_id).column() else {
        return Reduction::unchanged(board, NoOpReason::UnknownTarget);
    };

    let target_index = board.columns[destination].position(over_id);

    if source == destination {
        let Some(new_index) = target_index else {
            return Reduction::unchanged(board, NoOpReason::ColumnDropInSameColumn);
        };
        if new_index == old_index {
            return Reduction::unchanged(board, NoOpReason::SamePosition);
        }

        let mut next = board.clone();
        array_move(&mut next.columns[source].tasks, old_index, new_index);
        return Reduction::applied(next);
    }

    let mut next = board.clone();
    let task = next.columns[source].tasks.remove(old_index);
    let tasks = &mut next.columns[destination].tasks;
    let insert_index = target_index.unwrap_or(tasks.len());
    tasks.insert(insert_index, task);
    Reduction::applied(next)
}

/// Removes the element at `from` and reinserts it at `to`
fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    let item = items.remove(from);
    items.insert(to, item);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    fn ids(board: &Board, column: &str) -> Vec<String> {
        board
            .column(column)
            .unwrap()
            .task_ids()
            .map(|id| id.to_string())
            .collect()
    }

    fn abc_board() -> Board {
        let mut board = Board::default();
        board.columns[0].tasks = vec![
            Task::new("a", "A"),
            Task::new("b", "B"),
            Task::new("c", "C"),
        ];
        board
    }

    #[test]
    fn test_add_task_appends_to_column() {
        let board = Board::seeded();
        let reduction = add_task(&board, "to-do", "Buy milk", at(1_000));

        assert!(reduction.outcome.is_applied());
        let todo = reduction.board.column("to-do").unwrap();
        assert_eq!(todo.len(), 3);
        assert_eq!(todo.tasks[2].text, "Buy milk");
        assert_eq!(todo.tasks[2].id, "to-do-1000");
        assert_ne!(todo.tasks[2].id, "1");
        assert_ne!(todo.tasks[2].id, "2");
    }

    #[test]
    fn test_add_task_trims_text() {
        let board = Board::default();
        let reduction = add_task(&board, "done", "  Ship it  ", at(5));
        assert_eq!(reduction.board.column("done").unwrap().tasks[0].text, "Ship it");
    }

    #[test]
    fn test_add_task_empty_text_is_noop() {
        let board = Board::seeded();
        for text in ["", "   ", "\t\n"] {
            let reduction = add_task(&board, "to-do", text, at(1));
            assert_eq!(reduction.outcome, Outcome::Unchanged(NoOpReason::EmptyText));
            assert_eq!(reduction.board, board);
        }
    }

    #[test]
    fn test_add_task_unknown_column_is_noop() {
        let board = Board::seeded();
        let reduction = add_task(&board, "backlog", "Something", at(1));
        assert_eq!(
            reduction.outcome,
            Outcome::Unchanged(NoOpReason::UnknownColumn)
        );
        assert_eq!(reduction.board, board);
    }

    #[test]
    fn test_add_task_twice_in_same_millisecond() {
        let board = Board::default();
        let first = add_task(&board, "to-do", "One", at(7)).board;
        let second = add_task(&first, "to-do", "Two", at(7)).board;

        assert_eq!(ids(&second, "to-do"), ["to-do-7", "to-do-8"]);
        assert!(second.validate().is_ok());
    }

    #[test]
    fn test_rename_task() {
        let board = Board::seeded();
        let reduction = rename_task(&board, "1", "  Updated text  ");

        assert!(reduction.outcome.is_applied());
        let todo = reduction.board.column("to-do").unwrap();
        assert_eq!(todo.tasks[0], Task::new("1", "Updated text"));
        assert_eq!(todo.tasks[1], Task::new("2", "Task 2"));
    }

    #[test]
    fn test_rename_task_noops() {
        let board = Board::seeded();

        let reduction = rename_task(&board, "1", "Task 1");
        assert_eq!(reduction.outcome, Outcome::Unchanged(NoOpReason::SameText));

        let reduction = rename_task(&board, "1", "   ");
        assert_eq!(reduction.outcome, Outcome::Unchanged(NoOpReason::EmptyText));

        let reduction = rename_task(&board, "999", "New");
        assert_eq!(reduction.outcome, Outcome::Unchanged(NoOpReason::UnknownTask));
        assert_eq!(reduction.board, board);
    }

    #[test]
    fn test_delete_task() {
        let board = abc_board();
        let reduction = delete_task(&board, "a");

        assert!(reduction.outcome.is_applied());
        assert_eq!(ids(&reduction.board, "to-do"), ["b", "c"]);

        let reduction = delete_task(&reduction.board, "a");
        assert_eq!(reduction.outcome, Outcome::Unchanged(NoOpReason::UnknownTask));
    }

    #[test]
    fn test_move_onto_empty_column() {
        let board = Board::seeded();
        let reduction = move_task(&board, "2", "in-progress");

        assert!(reduction.outcome.is_applied());
        assert_eq!(ids(&reduction.board, "to-do"), ["1"]);
        assert_eq!(ids(&reduction.board, "in-progress"), ["2"]);
        assert_eq!(reduction.board.task("2").unwrap().text, "Task 2");
    }

    #[test]
    fn test_move_onto_task_in_other_column() {
        let board = move_task(&Board::seeded(), "2", "in-progress").board;
        let reduction = move_task(&board, "1", "2");

        assert!(reduction.outcome.is_applied());
        assert!(reduction.board.column("to-do").unwrap().is_empty());
        // Takes task 2's slot, pushing it down
        assert_eq!(ids(&reduction.board, "in-progress"), ["1", "2"]);
    }

    #[test]
    fn test_move_onto_non_empty_column_appends() {
        let mut board = abc_board();
        board.columns[2].tasks.push(Task::new("d", "D"));

        let reduction = move_task(&board, "b", "done");
        assert_eq!(ids(&reduction.board, "to-do"), ["a", "c"]);
        assert_eq!(ids(&reduction.board, "done"), ["d", "b"]);
    }

    #[test]
    fn test_reorder_forward() {
        let reduction = move_task(&abc_board(), "a", "c");
        assert!(reduction.outcome.is_applied());
        assert_eq!(ids(&reduction.board, "to-do"), ["b", "c", "a"]);
    }

    #[test]
    fn test_reorder_backward() {
        let reduction = move_task(&abc_board(), "c", "a");
        assert_eq!(ids(&reduction.board, "to-do"), ["c", "a", "b"]);
    }

    #[test]
    fn test_move_onto_self_is_noop() {
        let board = abc_board();
        let reduction = move_task(&board, "b", "b");
        assert_eq!(
            reduction.outcome,
            Outcome::Unchanged(NoOpReason::SamePosition)
        );
        assert_eq!(reduction.board, board);
    }

    #[test]
    fn test_move_onto_own_column_is_noop() {
        let board = abc_board();
        let reduction = move_task(&board, "a", "to-do");
        assert_eq!(
            reduction.outcome,
            Outcome::Unchanged(NoOpReason::ColumnDropInSameColumn)
        );
        assert_eq!(reduction.board, board);
    }

    #[test]
    fn test_move_unknown_ids_is_noop() {
        let board = Board::seeded();

        let reduction = move_task(&board, "999", "to-do");
        assert_eq!(reduction.outcome, Outcome::Unchanged(NoOpReason::UnknownTask));
        assert_eq!(reduction.board, board);

        let reduction = move_task(&board, "1", "nowhere");
        assert_eq!(
            reduction.outcome,
            Outcome::Unchanged(NoOpReason::UnknownTarget)
        );
        assert_eq!(reduction.board, board);
    }

    #[test]
    fn test_reorder_composition() {
        let board = abc_board();

        let stepwise = move_task(&board, "a", "b").board;
        let stepwise = move_task(&stepwise, "a", "c").board;
        let direct = move_task(&board, "a", "c").board;

        assert_eq!(stepwise, direct);
    }

    #[test]
    fn test_reduce_dispatches_operations() {
        let board = Board::seeded();

        let reduction = reduce_at(&board, &Operation::add_task("done", "Celebrate"), at(9));
        assert_eq!(ids(&reduction.board, "done"), ["done-9"]);

        let reduction = reduce(&reduction.board, &Operation::move_task("done-9", "1"));
        assert_eq!(ids(&reduction.board, "to-do"), ["done-9", "1", "2"]);

        let reduction = reduce(&reduction.board, &Operation::rename_task("done-9", "Party"));
        assert_eq!(reduction.board.task("done-9").unwrap().text, "Party");

        let reduction = reduce(&reduction.board, &Operation::delete_task("done-9"));
        assert_eq!(reduction.board, board);
    }

    #[test]
    fn test_operation_serialization() {
        let op = Operation::move_task("1", "done");
        let json = serde_json::to_string(&op).unwrap();
        assert_eq!(json, r#"{"op":"move_task","active":"1","over":"done"}"#);

        let parsed: Operation = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, op);
    }
}
