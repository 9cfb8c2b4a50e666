use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Extension, Json,
};
use uuid::Uuid;

use crate::middleware::auth::Claims;
use crate::AppState;

#[axum::debug_handler]
pub async fn list_subjects(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> crate::error::Result<impl IntoResponse> {
    let user = state.user_service.get_by_id(claims.student_id()?).await?;
    let subjects = state
        .subject_service
        .list_for_student(user.year, user.semester)
        .await?;
    Ok(Json(subjects))
}

#[axum::debug_handler]
pub async fn get_subject(
    State(state): State<AppState>,
    Path(subject_id): Path<Uuid>,
) -> crate::error::Result<impl IntoResponse> {
    let subject = state.subject_service.get(subject_id).await?;
    Ok(Json(subject))
}

#[axum::debug_handler]
pub async fn list_assignments(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(subject_id): Path<Uuid>,
) -> crate::error::Result<impl IntoResponse> {
    let assignments = state
        .assignment_service
        .list_for_subject(subject_id, claims.student_id()?)
        .await?;
    Ok(Json(assignments))
}

#[axum::debug_handler]
pub async fn list_quizzes(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(subject_id): Path<Uuid>,
) -> crate::error::Result<impl IntoResponse> {
    let quizzes = state
        .quiz_service
        .list_for_subject(subject_id, claims.student_id()?)
        .await?;
    Ok(Json(quizzes))
}

#[axum::debug_handler]
pub async fn list_materials(
    State(state): State<AppState>,
    Path(subject_id): Path<Uuid>,
) -> crate::error::Result<impl IntoResponse> {
    let materials = state.subject_service.materials(subject_id).await?;
    Ok(Json(materials))
}
