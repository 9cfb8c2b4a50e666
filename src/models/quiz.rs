use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options`. Never sent to students; see the quiz DTOs.
    pub correct_answer: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Quiz {
    pub id: Uuid,
    pub subject_id: Uuid,
    pub title: String,
    pub description: String,
    pub duration_minutes: i32,
    pub max_marks: i32,
    pub questions: Json<Vec<QuizQuestion>>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// An attempt is terminal: a second submit for the same (quiz, student)
/// is rejected at the store boundary, never overwritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "attempt_status", rename_all = "lowercase")]
pub enum AttemptStatus {
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QuizAttempt {
    pub id: Uuid,
    pub quiz_id: Uuid,
    pub student_id: Uuid,
    pub answers: Json<Vec<i32>>,
    pub score: i32,
    pub time_taken: i32,
    pub submitted_at: DateTime<Utc>,
    pub status: AttemptStatus,
}
