use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Extension, Json,
};

use crate::middleware::auth::Claims;
use crate::AppState;

#[axum::debug_handler]
pub async fn list_results(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> crate::error::Result<impl IntoResponse> {
    let results = state
        .result_service
        .list_for_student(claims.student_id()?)
        .await?;
    Ok(Json(results))
}

#[axum::debug_handler]
pub async fn semester_results(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(semester): Path<i32>,
) -> crate::error::Result<impl IntoResponse> {
    let response = state
        .result_service
        .semester_results(claims.student_id()?, semester)
        .await?;
    Ok(Json(response))
}
