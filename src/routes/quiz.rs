use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use uuid::Uuid;
use validator::Validate;

use crate::dto::quiz_dto::{
    FinishAttemptResponse, ListSectionsQuery, StartAttemptRequest, StartAttemptResponse,
};
use crate::AppState;

#[axum::debug_handler]
pub async fn list_tests(State(state): State<AppState>) -> crate::error::Result<Response> {
    let tests = state.test_service.list_tests().await?;
    Ok(Json(tests).into_response())
}

#[axum::debug_handler]
pub async fn list_sections(
    State(state): State<AppState>,
    Path(test_id): Path<Uuid>,
    Query(query): Query<ListSectionsQuery>,
) -> crate::error::Result<Response> {
    let sections = state
        .section_service
        .list_sections(test_id, query.user_id)
        .await?;
    Ok(Json(sections).into_response())
}

#[axum::debug_handler]
pub async fn start_attempt(
    State(state): State<AppState>,
    Path(section_id): Path<Uuid>,
    Json(req): Json<StartAttemptRequest>,
) -> crate::error::Result<Response> {
    req.validate()?;
    let attempt = state
        .attempt_service
        .start_attempt(section_id, req.user_id)
        .await?;
    let response = StartAttemptResponse {
        attempt_id: attempt.id,
        section_id: attempt.section_id,
        status: attempt.status,
        started_at: attempt.started_at,
    };
    Ok((StatusCode::CREATED, Json(response)).into_response())
}

#[axum::debug_handler]
pub async fn finish_attempt(
    State(state): State<AppState>,
    Path(attempt_id): Path<Uuid>,
) -> crate::error::Result<Response> {
    let attempt = state.attempt_service.complete_attempt(attempt_id).await?;
    let response = FinishAttemptResponse {
        attempt_id: attempt.id,
        status: attempt.status,
        completed_at: attempt
            .completed_at
            .ok_or_else(|| crate::error::Error::Internal("completed_at missing after completion".to_string()))?,
        time_spent_seconds: attempt.time_spent_seconds.unwrap_or(0),
    };
    Ok(Json(response).into_response())
}
