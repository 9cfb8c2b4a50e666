use crate::error::Result;
use crate::models::announcement::Announcement;
use sqlx::PgPool;

#[derive(Clone)]
pub struct AnnouncementService {
    pool: PgPool,
}

impl AnnouncementService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn latest(&self, limit: i64) -> Result<Vec<Announcement>> {
        let announcements = sqlx::query_as::<_, Announcement>(
            r#"SELECT * FROM announcements ORDER BY created_at DESC LIMIT $1"#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(announcements)
    }

    /// Announcements addressed to everyone or to the student's cohort.
    pub async fn for_year(&self, year: i32) -> Result<Vec<Announcement>> {
        let audience = format!("year{}", year);
        let announcements = sqlx::query_as::<_, Announcement>(
            r#"
            SELECT * FROM announcements
            WHERE target_audience IN ('all', $1)
            ORDER BY created_at DESC LIMIT 20
            "#,
        )
        .bind(audience)
        .fetch_all(&self.pool)
        .await?;
        Ok(announcements)
    }
}
