//! Application state for the HTTP server

use crate::application::QuestionService;
use crate::error::{QuestionsError, Result};

/// State shared by all handlers
///
/// Holds no question data: every request goes back to the document.
#[derive(Debug, Clone)]
pub struct AppState {
    pub questions: QuestionService,
}

impl AppState {
    pub fn new(questions: QuestionService) -> Self {
        AppState { questions }
    }

    /// Run a blocking service call off the async executor
    pub async fn run<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&QuestionService) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let service = self.questions.clone();
        tokio::task::spawn_blocking(move || f(&service))
            .await
            .map_err(|e| QuestionsError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?
    }
}
