use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "fee_status", rename_all = "lowercase")]
pub enum FeeStatus {
    Pending,
    Paid,
    Overdue,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Fee {
    pub id: Uuid,
    pub student_id: Uuid,
    pub semester: i32,
    pub year: i32,
    pub tuition_fee: i32,
    pub hostel_fee: i32,
    pub other_fees: i32,
    pub total_amount: i32,
    pub paid_amount: i32,
    pub due_amount: i32,
    pub due_date: DateTime<Utc>,
    pub status: FeeStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "payment_status", rename_all = "lowercase")]
pub enum PaymentStatus {
    Success,
}

/// Append-only audit row; never mutated after insert.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FeePayment {
    pub id: Uuid,
    pub fee_id: Uuid,
    pub student_id: Uuid,
    pub amount: i32,
    pub payment_method: String,
    pub order_reference: Option<String>,
    pub payment_reference: Option<String>,
    pub payment_date: DateTime<Utc>,
    pub status: PaymentStatus,
}
