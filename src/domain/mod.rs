//! Domain layer - Question bank models and matching rules

pub mod difficulty;
pub mod filter;
pub mod question;
pub mod source;
mod variant;

pub use difficulty::Difficulty;
pub use filter::QuestionFilter;
pub use question::{Alternative, Question};
pub use source::{ExamSource, ExamType};
