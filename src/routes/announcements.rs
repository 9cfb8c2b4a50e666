use axum::{extract::State, response::IntoResponse, Extension, Json};

use crate::middleware::auth::Claims;
use crate::AppState;

#[axum::debug_handler]
pub async fn list_announcements(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> crate::error::Result<impl IntoResponse> {
    let user = state.user_service.get_by_id(claims.student_id()?).await?;
    let announcements = state.announcement_service.for_year(user.year).await?;
    Ok(Json(announcements))
}
