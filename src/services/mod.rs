pub mod batch_service;
pub mod executor_service;
pub mod shell_service;
