pub mod outcome;
pub mod task_service;
