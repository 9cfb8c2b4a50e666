use crate::models::quiz::{Quiz, QuizAttempt, QuizQuestion};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Question as shown to a student: the correct index stays server-side.
#[derive(Debug, Clone, Serialize)]
pub struct RedactedQuestion {
    pub question: String,
    pub options: Vec<String>,
}

impl From<&QuizQuestion> for RedactedQuestion {
    fn from(q: &QuizQuestion) -> Self {
        Self {
            question: q.question.clone(),
            options: q.options.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizView {
    pub id: Uuid,
    pub subject_id: Uuid,
    pub title: String,
    pub description: String,
    pub duration_minutes: i32,
    pub max_marks: i32,
    pub questions: Vec<RedactedQuestion>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl From<&Quiz> for QuizView {
    fn from(quiz: &Quiz) -> Self {
        Self {
            id: quiz.id,
            subject_id: quiz.subject_id,
            title: quiz.title.clone(),
            description: quiz.description.clone(),
            duration_minutes: quiz.duration_minutes,
            max_marks: quiz.max_marks,
            questions: quiz.questions.0.iter().map(RedactedQuestion::from).collect(),
            start_time: quiz.start_time,
            end_time: quiz.end_time,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizWithAttempt {
    #[serde(flatten)]
    pub quiz: QuizView,
    pub attempt: Option<QuizAttempt>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitQuizRequest {
    pub answers: Vec<i32>,
    #[validate(range(min = 0, message = "time_taken must be non-negative"))]
    pub time_taken: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitQuizResponse {
    pub message: String,
    pub score: i32,
    pub total: i32,
    pub correct_answers: i32,
    pub total_questions: i32,
}
