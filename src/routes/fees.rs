use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Extension, Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::dto::fee_dto::{RecordPaymentRequest, RecordPaymentResponse};
use crate::middleware::auth::Claims;
use crate::AppState;

#[axum::debug_handler]
pub async fn list_fees(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> crate::error::Result<impl IntoResponse> {
    let fees = state
        .fee_service
        .list_for_student(claims.student_id()?)
        .await?;
    Ok(Json(fees))
}

#[axum::debug_handler]
pub async fn current_fee(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> crate::error::Result<impl IntoResponse> {
    let user = state.user_service.get_by_id(claims.student_id()?).await?;
    let fee = state.fee_service.current_fee(&user).await?;
    Ok(Json(fee))
}

#[axum::debug_handler]
pub async fn create_order(
    State(state): State<AppState>,
    Path(fee_id): Path<Uuid>,
) -> crate::error::Result<impl IntoResponse> {
    let order = state.fee_service.create_order(fee_id).await?;
    Ok(Json(order))
}

#[axum::debug_handler]
pub async fn record_payment(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(fee_id): Path<Uuid>,
    Json(req): Json<RecordPaymentRequest>,
) -> crate::error::Result<impl IntoResponse> {
    req.validate()?;
    state
        .fee_service
        .record_payment(
            fee_id,
            claims.student_id()?,
            req.amount,
            req.order_reference,
            req.payment_reference,
            &state.notification_service,
        )
        .await?;
    Ok(Json(RecordPaymentResponse {
        message: "Payment recorded successfully".to_string(),
    }))
}
