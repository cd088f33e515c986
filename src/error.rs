//! Error types for the question bank

use thiserror::Error;
use uuid::Uuid;

/// Main error type for the questions service
#[derive(Debug, Error)]
pub enum QuestionsError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Question not found: {0}")]
    QuestionNotFound(Uuid),

    #[error("No questions found: {0}")]
    NoMatch(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl QuestionsError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            QuestionsError::Config(_) => 2,
            QuestionsError::Validation(_) => 3,
            QuestionsError::QuestionNotFound(_) | QuestionsError::NoMatch(_) => 4,
            _ => 1,
        }
    }

    /// Whether this error means the requested data does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            QuestionsError::QuestionNotFound(_) | QuestionsError::NoMatch(_)
        )
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            QuestionsError::NoMatch(what) => {
                format!(
                    "No questions found: {}\n\n\
                    Suggestions:\n\
                    • Filters match substrings and ignore case (e.g., 'math' finds 'Mathematics')\n\
                    • Use 'questions areas' to see the areas in the bank\n\
                    • Drop a filter to broaden the search",
                    what
                )
            }
            QuestionsError::Config(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Run 'questions init' to create a question bank in this directory\n\
                    • Pass --root or set QUESTIONS_ROOT to point at an existing bank",
                    msg
                )
            }
            QuestionsError::TomlDeserialize(e) => {
                format!(
                    "Failed to parse questions.toml: {}\n\n\
                    Valid keys: bind, data_file, log_level\n\
                    Example: bind = \"127.0.0.1:5000\"",
                    e
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using QuestionsError
pub type Result<T> = std::result::Result<T, QuestionsError>;
