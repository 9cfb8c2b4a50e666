use axum::{extract::State, response::IntoResponse, Extension, Json};
use validator::Validate;

use crate::dto::auth_dto::{AuthResponse, LoginRequest, RegisterRequest, UserProfile};
use crate::middleware::auth::Claims;
use crate::utils::token::create_token;
use crate::AppState;

#[axum::debug_handler]
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> crate::error::Result<impl IntoResponse> {
    req.validate()?;
    let user = state.user_service.register(req).await?;
    let token = create_token(user.id, &user.email)?;
    tracing::info!(user_id = %user.id, "student registered");
    Ok(Json(AuthResponse {
        token,
        user: UserProfile::from(user),
    }))
}

#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> crate::error::Result<impl IntoResponse> {
    req.validate()?;
    let user = state.user_service.login(req).await?;
    let token = create_token(user.id, &user.email)?;
    Ok(Json(AuthResponse {
        token,
        user: UserProfile::from(user),
    }))
}

#[axum::debug_handler]
pub async fn me(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> crate::error::Result<impl IntoResponse> {
    let user = state.user_service.get_by_id(claims.student_id()?).await?;
    Ok(Json(UserProfile::from(user)))
}
