use crate::error::Result;
use crate::models::notification::{Notification, NotificationKind};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct NotificationService {
    pool: PgPool,
}

impl NotificationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fire-and-forget sink: a failed insert is logged and swallowed so it
    /// can never fail the operation that raised the notification.
    pub async fn notify(
        &self,
        student_id: Uuid,
        title: &str,
        message: &str,
        kind: NotificationKind,
    ) {
        let result = sqlx::query(
            r#"INSERT INTO notifications (student_id, title, message, kind) VALUES ($1, $2, $3, $4)"#,
        )
        .bind(student_id)
        .bind(title)
        .bind(message)
        .bind(kind)
        .execute(&self.pool)
        .await;

        if let Err(err) = result {
            tracing::warn!(error = ?err, %student_id, title, "failed to record notification");
        }
    }

    pub async fn list_for_student(&self, student_id: Uuid) -> Result<Vec<Notification>> {
        let notifications = sqlx::query_as::<_, Notification>(
            r#"SELECT * FROM notifications WHERE student_id = $1 ORDER BY created_at DESC LIMIT 50"#,
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(notifications)
    }

    pub async fn mark_read(&self, notification_id: Uuid, student_id: Uuid) -> Result<()> {
        sqlx::query(
            r#"UPDATE notifications SET read = TRUE WHERE id = $1 AND student_id = $2"#,
        )
        .bind(notification_id)
        .bind(student_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn unread_count(&self, student_id: Uuid) -> Result<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM notifications WHERE student_id = $1 AND read = FALSE"#,
        )
        .bind(student_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}
