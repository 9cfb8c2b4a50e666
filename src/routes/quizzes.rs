use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Extension, Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::dto::quiz_dto::SubmitQuizRequest;
use crate::middleware::auth::Claims;
use crate::AppState;

#[axum::debug_handler]
pub async fn get_quiz(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(quiz_id): Path<Uuid>,
) -> crate::error::Result<impl IntoResponse> {
    let quiz = state
        .quiz_service
        .get_available(quiz_id, claims.student_id()?)
        .await?;
    Ok(Json(quiz))
}

#[axum::debug_handler]
pub async fn submit_quiz(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(quiz_id): Path<Uuid>,
    Json(req): Json<SubmitQuizRequest>,
) -> crate::error::Result<impl IntoResponse> {
    req.validate()?;
    let response = state
        .quiz_service
        .submit(
            quiz_id,
            claims.student_id()?,
            req,
            &state.notification_service,
        )
        .await?;
    Ok(Json(response))
}
