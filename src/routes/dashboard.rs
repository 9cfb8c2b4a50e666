use axum::{extract::State, response::IntoResponse, Extension, Json};
use serde_json::json;

use crate::middleware::auth::Claims;
use crate::AppState;

#[axum::debug_handler]
pub async fn get_dashboard(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> crate::error::Result<impl IntoResponse> {
    let student_id = claims.student_id()?;
    let user = state.user_service.get_by_id(student_id).await?;

    let announcements = state.announcement_service.latest(3).await?;
    let pending_assignments = state.assignment_service.pending_count(student_id).await?;
    let upcoming_quizzes = state.quiz_service.upcoming_count(student_id).await?;
    let fee_due = state.fee_service.current_due(&user).await?;
    let unread_notifications = state.notification_service.unread_count(student_id).await?;

    Ok(Json(json!({
        "announcements": announcements,
        "stats": {
            "pending_assignments": pending_assignments,
            "upcoming_quizzes": upcoming_quizzes,
            "fee_due": fee_due,
            "unread_notifications": unread_notifications,
        }
    })))
}
