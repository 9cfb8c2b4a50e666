use axum::{extract::State, response::IntoResponse, Extension, Json};
use validator::Validate;

use crate::dto::registration_dto::{CreateRegistrationRequest, CreateRegistrationResponse};
use crate::middleware::auth::Claims;
use crate::AppState;

#[axum::debug_handler]
pub async fn list_registrations(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> crate::error::Result<impl IntoResponse> {
    let registrations = state
        .registration_service
        .list_for_student(claims.student_id()?)
        .await?;
    Ok(Json(registrations))
}

#[axum::debug_handler]
pub async fn create_registration(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<CreateRegistrationRequest>,
) -> crate::error::Result<impl IntoResponse> {
    req.validate()?;
    let user = state.user_service.get_by_id(claims.student_id()?).await?;
    let registration = state
        .registration_service
        .create(&user, req, &state.notification_service)
        .await?;
    Ok(Json(CreateRegistrationResponse {
        message: "Registration submitted successfully".to_string(),
        registration_id: registration.id,
    }))
}
