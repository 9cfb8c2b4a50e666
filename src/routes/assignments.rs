use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Extension, Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::dto::assignment_dto::{SubmitAssignmentRequest, SubmitAssignmentResponse};
use crate::middleware::auth::Claims;
use crate::AppState;

#[axum::debug_handler]
pub async fn submit_assignment(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(assignment_id): Path<Uuid>,
    Json(req): Json<SubmitAssignmentRequest>,
) -> crate::error::Result<impl IntoResponse> {
    req.validate()?;
    let submission = state
        .assignment_service
        .submit(
            assignment_id,
            claims.student_id()?,
            req.file_base64,
            &state.notification_service,
        )
        .await?;
    Ok(Json(SubmitAssignmentResponse {
        message: "Assignment submitted successfully".to_string(),
        submission_id: submission.id,
        status: submission.status,
    }))
}
