use crate::dto::fee_dto::CreateOrderResponse;
use crate::error::{Error, Result};
use crate::models::fee::{Fee, FeePayment, FeeStatus};
use crate::models::notification::NotificationKind;
use crate::models::user::User;
use crate::services::notification_service::NotificationService;
use crate::utils::time::Clock;
use chrono::Duration;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

/// Ledger transition applied by a recorded payment.
///
/// Any successful payment, whatever its amount, zeroes the due balance and
/// marks the fee paid. Partial payments are not modeled. See DESIGN.md
/// before changing this.
pub fn apply_payment(fee: &Fee, amount: i32) -> Fee {
    let mut updated = fee.clone();
    updated.paid_amount = fee.paid_amount + amount;
    updated.due_amount = 0;
    updated.status = FeeStatus::Paid;
    updated
}

#[derive(Clone)]
pub struct FeeService {
    pool: PgPool,
    clock: Arc<dyn Clock>,
}

impl FeeService {
    pub fn new(pool: PgPool, clock: Arc<dyn Clock>) -> Self {
        Self { pool, clock }
    }

    pub async fn list_for_student(&self, student_id: Uuid) -> Result<Vec<Fee>> {
        let fees = sqlx::query_as::<_, Fee>(
            r#"SELECT * FROM fees WHERE student_id = $1 ORDER BY year DESC"#,
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(fees)
    }

    /// Fetches the fee row for the student's current semester, seeding it
    /// with the standard amounts when none exists yet.
    pub async fn current_fee(&self, student: &User) -> Result<Fee> {
        let existing = sqlx::query_as::<_, Fee>(
            r#"SELECT * FROM fees WHERE student_id = $1 AND semester = $2 AND year = $3"#,
        )
        .bind(student.id)
        .bind(student.semester)
        .bind(student.year)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(fee) = existing {
            return Ok(fee);
        }

        let due_date = self.clock.now() + Duration::days(30);
        let fee = sqlx::query_as::<_, Fee>(
            r#"
            INSERT INTO fees (student_id, semester, year, due_date)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (student_id, semester, year) DO UPDATE SET due_date = fees.due_date
            RETURNING *
            "#,
        )
        .bind(student.id)
        .bind(student.semester)
        .bind(student.year)
        .bind(due_date)
        .fetch_one(&self.pool)
        .await?;
        Ok(fee)
    }

    pub async fn current_due(&self, student: &User) -> Result<i32> {
        let due: Option<i32> = sqlx::query_scalar(
            r#"SELECT due_amount FROM fees WHERE student_id = $1 AND semester = $2"#,
        )
        .bind(student.id)
        .bind(student.semester)
        .fetch_optional(&self.pool)
        .await?;
        Ok(due.unwrap_or(0))
    }

    /// Mock payment order; no gateway integration exists server-side.
    pub async fn create_order(&self, fee_id: Uuid) -> Result<CreateOrderResponse> {
        let fee = sqlx::query_as::<_, Fee>(r#"SELECT * FROM fees WHERE id = $1"#)
            .bind(fee_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("Fee not found".to_string()))?;

        let order_id = format!("order_{}", &Uuid::new_v4().simple().to_string()[..16]);
        Ok(CreateOrderResponse {
            order_id,
            amount: fee.due_amount,
            currency: "INR".to_string(),
            key_id: "rzp_test_key".to_string(),
        })
    }

    /// Appends the audit payment row and applies the ledger transition in a
    /// single atomic update (increment paid, zero due, mark paid). Amount
    /// positivity is checked by the caller's request validation.
    pub async fn record_payment(
        &self,
        fee_id: Uuid,
        student_id: Uuid,
        amount: i32,
        order_reference: Option<String>,
        payment_reference: Option<String>,
        notifications: &NotificationService,
    ) -> Result<FeePayment> {
        let _fee = sqlx::query_as::<_, Fee>(r#"SELECT * FROM fees WHERE id = $1"#)
            .bind(fee_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("Fee not found".to_string()))?;

        let payment = sqlx::query_as::<_, FeePayment>(
            r#"
            INSERT INTO fee_payments (fee_id, student_id, amount, order_reference, payment_reference)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(fee_id)
        .bind(student_id)
        .bind(amount)
        .bind(order_reference)
        .bind(payment_reference)
        .fetch_one(&self.pool)
        .await?;

        sqlx::query(
            r#"UPDATE fees SET paid_amount = paid_amount + $1, due_amount = 0, status = 'paid' WHERE id = $2"#,
        )
        .bind(amount)
        .bind(fee_id)
        .execute(&self.pool)
        .await?;

        notifications
            .notify(
                student_id,
                "Payment Successful",
                &format!("Your payment of ₹{} has been received", amount),
                NotificationKind::Fee,
            )
            .await;

        Ok(payment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn fee(total: i32, paid: i32, due: i32) -> Fee {
        Fee {
            id: Uuid::new_v4(),
            student_id: Uuid::new_v4(),
            semester: 6,
            year: 3,
            tuition_fee: 50000,
            hostel_fee: 20000,
            other_fees: 5000,
            total_amount: total,
            paid_amount: paid,
            due_amount: due,
            due_date: Utc::now(),
            status: FeeStatus::Pending,
        }
    }

    #[test]
    fn full_payment_settles_the_fee() {
        let updated = apply_payment(&fee(75000, 0, 75000), 75000);
        assert_eq!(updated.paid_amount, 75000);
        assert_eq!(updated.due_amount, 0);
        assert_eq!(updated.status, FeeStatus::Paid);
    }

    #[test]
    fn partial_payment_still_zeroes_the_due_balance() {
        // Even 1 unit settles the ledger.
        let updated = apply_payment(&fee(75000, 0, 75000), 1);
        assert_eq!(updated.paid_amount, 1);
        assert_eq!(updated.due_amount, 0);
        assert_eq!(updated.status, FeeStatus::Paid);
    }

    #[test]
    fn repeated_payments_keep_accumulating_paid_amount() {
        let first = apply_payment(&fee(75000, 0, 75000), 40000);
        let second = apply_payment(&first, 35000);
        assert_eq!(second.paid_amount, 75000);
        assert_eq!(second.due_amount, 0);
        assert_eq!(second.status, FeeStatus::Paid);
    }
}
