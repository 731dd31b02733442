pub mod command;
pub mod date;
pub mod error;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;

pub use command::Command;
pub use date::{looks_like_date, normalize_date};
pub use error::{Result, TaskError};
pub use input::parse;
pub use model::task::{Task, TaskKind};
pub use model::task_list::TaskList;
pub use repository::{FileTaskRepository, TaskRepository};
pub use service::outcome::{Outcome, FAREWELL_TEXT, HELP_TEXT};
pub use service::task_service::TaskService;
