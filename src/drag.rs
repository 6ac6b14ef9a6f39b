//! Ephemeral drag state.
//!
//! The drag gesture source reports lifecycle messages carrying opaque IDs.
//! [`DragSession`] keeps what the presentation needs while a drag is in
//! flight (the lifted task for the overlay, the hover target for the insertion
//! marker) and turns a completed drop into a move on the [`BoardStore`].
//! None of this state is ever written into the [`Board`].

use crate::domain::{
    lookup::Target,
    reducer::Outcome,
    Board, ColumnId, Task, TaskId,
};
use crate::store::BoardStore;
use serde::{Deserialize, Serialize};

/// A message from the drag gesture source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DragEvent {
    Start {
        active_id: String,
    },
    Over {
        over_id: Option<String>,
    },
    /// `over_id` is `None` when the task was dropped outside every target
    End {
        active_id: String,
        over_id: Option<String>,
    },
}

/// Where the presentation should draw the insertion marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropIndicator {
    /// Above the task at `index`
    Before { column: ColumnId, index: usize },
    /// After the last task of the column
    End { column: ColumnId },
}

#[derive(Debug, Clone, Default)]
pub struct DragSession {
    active: Option<Task>,
    over: Option<String>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes a message. Only `End` produces an outcome, and only when the
    /// drop landed on a target.
    pub fn handle(&mut self, store: &mut BoardStore, event: DragEvent) -> Option<Outcome> {
        match event {
            DragEvent::Start { active_id } => {
                self.start(store.board(), &active_id);
                None
            }
            DragEvent::Over { over_id } => {
                self.hover(over_id);
                None
            }
            DragEvent::End { active_id, over_id } => self.end(store, &active_id, over_id),
        }
    }

    /// Caches the lifted task for the overlay. Unknown IDs leave the session idle.
    pub fn start(&mut self, board: &Board, active_id: &str) {
        match board.task(active_id) {
            Some(task) => {
                tracing::trace!(task = %task.id, "drag started");
                self.active = Some(task.clone());
            }
            None => tracing::debug!(active_id, "drag started on unknown task"),
        }
    }

    pub fn hover(&mut self, over_id: Option<String>) {
        self.over = over_id;
    }

    /// Clears the session and applies the drop, if any
    pub fn end(
        &mut self,
        store: &mut BoardStore,
        active_id: &str,
        over_id: Option<String>,
    ) -> Option<Outcome> {
        self.clear();

        let Some(over_id) = over_id else {
            tracing::debug!(active_id, "drag abandoned");
            return None;
        };
        Some(store.move_task(TaskId::from(active_id), over_id))
    }

    pub fn clear(&mut self) {
        self.active = None;
        self.over = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Task shown in the drag overlay
    pub fn active_task(&self) -> Option<&Task> {
        self.active.as_ref()
    }

    pub fn over_id(&self) -> Option<&str> {
        self.over.as_deref()
    }

    /// Resolves the hover target against the current board
    pub fn drop_indicator(&self, board: &Board) -> Option<DropIndicator> {
        let over = self.over.as_deref()?;
        match Target::resolve(board, over) {
            Target::Column { column } => Some(DropIndicator::End {
                column: board.columns[column].id.clone(),
            }),
            Target::Task { column, index } => Some(DropIndicator::Before {
                column: board.columns[column].id.clone(),
                index,
            }),
            Target::None => None,
        }
    }
}
