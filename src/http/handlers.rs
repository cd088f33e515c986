//! Question bank HTTP handlers

use crate::domain::{Question, QuestionFilter};
use crate::error::{QuestionsError, Result};
use crate::http::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

/// Service banner
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Questions API is up.",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// List all questions, or those matching the query filters
pub async fn list_questions(
    State(state): State<AppState>,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Question>>> {
    let filter = QuestionFilter::from_query_pairs(query);
    let questions = if filter.is_empty() {
        state.run(|service| service.get_all()).await?
    } else {
        state.run(move |service| service.filter(&filter)).await?
    };
    Ok(Json(questions))
}

/// Get a question by id
pub async fn get_question(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Question>> {
    let id = parse_id(&raw_id)?;
    state
        .run(move |service| service.get_by_id(id))
        .await?
        .map(Json)
        .ok_or(QuestionsError::QuestionNotFound(id))
}

/// Create a question; the statement is required
pub async fn create_question(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse> {
    let question = parse_question(body)?;
    if question.statement.trim().is_empty() {
        return Err(QuestionsError::Validation(
            "Statement is required".to_string(),
        ));
    }

    let created = state.run(move |service| service.add(question)).await?;
    let location = format!("/questoes/{}", created.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// Replace every field of a question except its id
pub async fn update_question(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(body): Json<Value>,
) -> Result<StatusCode> {
    let id = parse_id(&raw_id)?;
    let question = parse_question(body)?;

    if state.run(move |service| service.update(id, question)).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(QuestionsError::QuestionNotFound(id))
    }
}

/// Delete a question
pub async fn delete_question(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode> {
    let id = parse_id(&raw_id)?;

    if state.run(move |service| service.delete(id)).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(QuestionsError::QuestionNotFound(id))
    }
}

/// Random question among those matching the query filters
pub async fn random_question(
    State(state): State<AppState>,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<Json<Question>> {
    let filter = QuestionFilter::from_query_pairs(query);
    let question = state.run(move |service| service.random(&filter)).await?;
    Ok(Json(question))
}

/// Random question within one area
pub async fn random_question_in_area(
    State(state): State<AppState>,
    Path(area): Path<String>,
) -> Result<Json<Question>> {
    let question = state
        .run(move |service| service.random_in_area(&area))
        .await?;
    Ok(Json(question))
}

/// All questions within one area
pub async fn questions_by_area(
    State(state): State<AppState>,
    Path(area): Path<String>,
) -> Result<Json<Vec<Question>>> {
    let questions = state.run(move |service| service.by_area(&area)).await?;
    Ok(Json(questions))
}

/// Distinct areas, sorted
pub async fn list_areas(State(state): State<AppState>) -> Result<Json<Vec<String>>> {
    let areas = state.run(|service| service.list_areas()).await?;
    Ok(Json(areas))
}

/// Ids that are not UUIDs cannot name a question
fn parse_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw)
        .map_err(|_| QuestionsError::NoMatch(format!("'{}' is not a question id", raw)))
}

/// Question payloads match field names regardless of case
fn parse_question(body: Value) -> Result<Question> {
    Question::from_value(body)
        .map_err(|e| QuestionsError::Validation(format!("Invalid question payload: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string()).unwrap(), id);
        assert!(parse_id("random-ish").unwrap_err().is_not_found());
    }

    #[test]
    fn test_parse_question_rejects_wrong_types() {
        let err = parse_question(json!({"statement": 42})).unwrap_err();
        assert!(matches!(err, QuestionsError::Validation(_)));
    }

    #[test]
    fn test_parse_question_case_insensitive() {
        let q = parse_question(json!({"Statement": "2+2=?", "AREA": "Math"})).unwrap();
        assert_eq!(q.statement, "2+2=?");
        assert_eq!(q.area, "Math");
    }
}
