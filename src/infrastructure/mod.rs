//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod repository;

pub use config::ServerConfig;
pub use repository::{JsonFileRepository, QuestionRepository};
