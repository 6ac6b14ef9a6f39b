pub mod board;
pub mod column;
pub mod lookup;
pub mod reducer;
pub mod task;

pub use board::{Board, BoardConfig, ColumnConfig, SeedTask};
pub use column::{Column, ColumnAccent, ColumnId};
pub use lookup::Target;
pub use reducer::{NoOpReason, Operation, Outcome, Reduction};
pub use task::{IdStrategy, Task, TaskId};
