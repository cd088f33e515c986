//! HTTP route definitions

use crate::http::{handlers, logging::log_requests, state::AppState};
use axum::{
    middleware,
    routing::get,
    Router,
};

/// Question bank routes
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route(
            "/questoes",
            get(handlers::list_questions).post(handlers::create_question),
        )
        .route("/questoes/random", get(handlers::random_question))
        .route(
            "/questoes/random/area/:area",
            get(handlers::random_question_in_area),
        )
        .route("/questoes/area/:area", get(handlers::questions_by_area))
        .route(
            "/questoes/:id",
            get(handlers::get_question)
                .put(handlers::update_question)
                .delete(handlers::delete_question),
        )
        .route("/areas", get(handlers::list_areas))
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}
