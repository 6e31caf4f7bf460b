//! Application services for the to-do list.

mod board;
mod command;

pub use board::{TodoService, TodoServiceError, TodoServiceResult};
pub use command::{CommandOutcome, SubmitTaskRequest, TodoCommand};
