use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Extension, Json,
};
use serde::Deserialize;

use crate::middleware::auth::Claims;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct BookSearchParams {
    pub query: Option<String>,
}

#[axum::debug_handler]
pub async fn search_books(
    State(state): State<AppState>,
    Query(params): Query<BookSearchParams>,
) -> crate::error::Result<impl IntoResponse> {
    let books = state
        .library_service
        .search_books(params.query.as_deref())
        .await?;
    Ok(Json(books))
}

#[axum::debug_handler]
pub async fn issued_books(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> crate::error::Result<impl IntoResponse> {
    let issues = state
        .library_service
        .issued_to_student(claims.student_id()?)
        .await?;
    Ok(Json(issues))
}
