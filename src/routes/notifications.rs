use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Extension, Json,
};
use serde_json::json;
use uuid::Uuid;

use crate::middleware::auth::Claims;
use crate::AppState;

#[axum::debug_handler]
pub async fn list_notifications(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> crate::error::Result<impl IntoResponse> {
    let notifications = state
        .notification_service
        .list_for_student(claims.student_id()?)
        .await?;
    Ok(Json(notifications))
}

#[axum::debug_handler]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(notification_id): Path<Uuid>,
) -> crate::error::Result<impl IntoResponse> {
    state
        .notification_service
        .mark_read(notification_id, claims.student_id()?)
        .await?;
    Ok(Json(json!({ "message": "Notification marked as read" })))
}
