use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Subject {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub category: String,
    pub credits: i32,
    pub year: i32,
    pub semester: i32,
    pub lecture_hours: i32,
    pub tutorial_hours: i32,
    pub practical_hours: i32,
    pub evaluation_pattern: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Enrollment {
    pub id: Uuid,
    pub student_id: Uuid,
    pub subject_id: Uuid,
    pub semester: i32,
    pub year: i32,
    pub enrolled_at: DateTime<Utc>,
}
