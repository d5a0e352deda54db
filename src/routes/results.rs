use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json, Response},
};
use uuid::Uuid;

use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/quiz/attempts/{attempt_id}/result",
    params(
        ("attempt_id" = Uuid, Path, description = "Attempt ID")
    ),
    responses(
        (status = 200, description = "Assembled result payload", body = Json<serde_json::Value>),
        (status = 404, description = "Attempt not found"),
        (status = 409, description = "Attempt has not been completed yet"),
    ),
)]
pub async fn get_attempt_result(
    State(state): State<AppState>,
    Path(attempt_id): Path<Uuid>,
) -> crate::error::Result<Response> {
    let payload = state.result_service.assemble(attempt_id).await?;
    if !payload.answer_available {
        tracing::info!(%attempt_id, "results withheld pending release");
    }
    Ok(Json(payload).into_response())
}
