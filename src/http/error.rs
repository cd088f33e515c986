//! Mapping of service errors to HTTP responses

use crate::error::QuestionsError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

impl QuestionsError {
    /// HTTP status and machine-readable type for this error
    pub fn status(&self) -> (StatusCode, &'static str) {
        match self {
            QuestionsError::Validation(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            QuestionsError::QuestionNotFound(_) => (StatusCode::NOT_FOUND, "question_not_found"),
            QuestionsError::NoMatch(_) => (StatusCode::NOT_FOUND, "no_match"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }
}

impl IntoResponse for QuestionsError {
    fn into_response(self) -> Response {
        let (status, error_type) = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = Json(json!({
            "error": {
                "type": error_type,
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            QuestionsError::Validation("x".into()).status().0,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            QuestionsError::QuestionNotFound(Uuid::nil()).status().0,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            QuestionsError::NoMatch("x".into()).status().0,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            QuestionsError::Config("x".into()).status().0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_response_status() {
        let response = QuestionsError::NoMatch("nothing".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
