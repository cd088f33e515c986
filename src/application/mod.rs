//! Application layer - Use cases and orchestration

pub mod init;
pub mod list_areas;
pub mod questions;
pub mod random_pick;

pub use questions::QuestionService;
