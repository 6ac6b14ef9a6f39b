use crate::domain::column::{Column, ColumnAccent, ColumnId};
use crate::domain::task::{IdStrategy, Task, TaskId};
use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Configuration for a board column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnConfig {
    pub id: ColumnId,
    pub title: String,
    #[serde(default)]
    pub accent: ColumnAccent,
    #[serde(default)]
    pub accepts_new_tasks: bool,
}

impl ColumnConfig {
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            accent: ColumnAccent::Neutral,
            accepts_new_tasks: false,
        }
    }

    pub fn with_accent(mut self, accent: ColumnAccent) -> Self {
        self.accent = accent;
        self
    }

    pub fn with_task_input(mut self) -> Self {
        self.accepts_new_tasks = true;
        self
    }
}

/// A task placed on the board at construction time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedTask {
    pub column: ColumnId,
    pub id: TaskId,
    pub text: String,
}

impl SeedTask {
    pub fn new(
        column: impl Into<ColumnId>,
        id: impl Into<TaskId>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            column: column.into(),
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Board configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    pub columns: Vec<ColumnConfig>,
    #[serde(default)]
    pub seed: Vec<SeedTask>,
    #[serde(default)]
    pub id_strategy: IdStrategy,
}

impl BoardConfig {
    /// The default columns with the two starter tasks in To-Do
    pub fn seeded() -> Self {
        Self {
            seed: vec![
                SeedTask::new(ColumnId::TODO, "1", "Task 1"),
                SeedTask::new(ColumnId::TODO, "2", "Task 2"),
            ],
            ..Self::default()
        }
    }

    pub fn with_id_strategy(mut self, strategy: IdStrategy) -> Self {
        self.id_strategy = strategy;
        self
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            columns: vec![
                ColumnConfig::new(ColumnId::TODO, "To-Do").with_task_input(),
                ColumnConfig::new(ColumnId::IN_PROGRESS, "In Progress")
                    .with_accent(ColumnAccent::Active),
                ColumnConfig::new(ColumnId::DONE, "Done").with_accent(ColumnAccent::Complete),
            ],
            seed: Vec::new(),
            id_strategy: IdStrategy::default(),
        }
    }
}

/// Kanban board state
///
/// A board is a plain value. Reducer functions in [`crate::domain::reducer`]
/// take a board by reference and return a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub columns: Vec<Column>,
    #[serde(default)]
    pub id_strategy: IdStrategy,
}

impl Board {
    /// Builds a board from a validated configuration
    pub fn new(config: BoardConfig) -> Result<Self> {
        if config.columns.is_empty() {
            return Err(BoardError::NoColumns);
        }

        let mut column_ids = HashSet::new();
        let mut columns = Vec::with_capacity(config.columns.len());
        for column in config.columns {
            if column.id.as_str().is_empty() {
                return Err(BoardError::EmptyColumnId);
            }
            if !column_ids.insert(column.id.clone()) {
                return Err(BoardError::DuplicateColumnId(column.id.to_string()));
            }
            columns.push(Column {
                id: column.id,
                title: column.title,
                accent: column.accent,
                accepts_new_tasks: column.accepts_new_tasks,
                tasks: Vec::new(),
            });
        }

        let mut board = Self {
            columns,
            id_strategy: config.id_strategy,
        };

        for seed in config.seed {
            if board.contains_task(seed.id.as_str()) {
                return Err(BoardError::DuplicateTaskId(seed.id.to_string()));
            }
            let column = board
                .columns
                .iter_mut()
                .find(|col| col.id == seed.column)
                .ok_or_else(|| BoardError::UnknownSeedColumn(seed.column.to_string()))?;
            column.tasks.push(Task::new(seed.id, seed.text));
        }

        Ok(board)
    }

    /// The standard three columns with the two starter tasks
    pub fn seeded() -> Self {
        Self::with_default_columns(vec![
            Task::new("1", "Task 1"),
            Task::new("2", "Task 2"),
        ])
    }

    fn with_default_columns(todo: Vec<Task>) -> Self {
        let config = BoardConfig::default();
        let mut columns: Vec<Column> = config
            .columns
            .into_iter()
            .map(|column| Column {
                id: column.id,
                title: column.title,
                accent: column.accent,
                accepts_new_tasks: column.accepts_new_tasks,
                tasks: Vec::new(),
            })
            .collect();
        columns[0].tasks = todo;
        Self {
            columns,
            id_strategy: config.id_strategy,
        }
    }

    /// Gets a column by ID
    pub fn column(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|col| col.id == id)
    }

    pub fn column_index(&self, id: &str) -> Option<usize> {
        self.columns.iter().position(|col| col.id == id)
    }

    /// Finds the column index and position of a task
    pub fn locate_task(&self, id: &str) -> Option<(usize, usize)> {
        self.columns
            .iter()
            .enumerate()
            .find_map(|(col_idx, col)| col.position(id).map(|pos| (col_idx, pos)))
    }

    /// Gets the column that currently holds a task
    pub fn column_of_task(&self, id: &str) -> Option<&Column> {
        self.locate_task(id).map(|(col_idx, _)| &self.columns[col_idx])
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.locate_task(id)
            .map(|(col_idx, pos)| &self.columns[col_idx].tasks[pos])
    }

    pub fn contains_task(&self, id: &str) -> bool {
        self.locate_task(id).is_some()
    }

    /// Total number of tasks across all columns
    pub fn task_count(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    pub fn task_ids(&self) -> impl Iterator<Item = &TaskId> {
        self.columns.iter().flat_map(Column::task_ids)
    }

    /// Checks that column IDs are unique and every task ID appears exactly once
    pub fn validate(&self) -> Result<()> {
        if self.columns.is_empty() {
            return Err(BoardError::NoColumns);
        }

        let mut column_ids = HashSet::new();
        for column in &self.columns {
            if column.id.as_str().is_empty() {
                return Err(BoardError::EmptyColumnId);
            }
            if !column_ids.insert(&column.id) {
                return Err(BoardError::DuplicateColumnId(column.id.to_string()));
            }
        }

        let mut task_ids = HashSet::new();
        for id in self.task_ids() {
            if !task_ids.insert(id) {
                return Err(BoardError::DuplicateTaskId(id.to_string()));
            }
        }

        Ok(())
    }

    /// Serializes the board snapshot for the presentation layer
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Reads a board snapshot, rejecting boards that break task exclusivity
    pub fn from_json(json: &str) -> Result<Self> {
        let board: Board = serde_json::from_str(json)?;
        board.validate()?;
        Ok(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::with_default_columns(Vec::new())
    }
}
