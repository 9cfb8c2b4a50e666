use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RecordPaymentRequest {
    #[validate(range(min = 1, message = "Payment amount must be positive"))]
    pub amount: i32,
    pub order_reference: Option<String>,
    pub payment_reference: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateOrderResponse {
    pub order_id: String,
    pub amount: i32,
    pub currency: String,
    pub key_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordPaymentResponse {
    pub message: String,
}
