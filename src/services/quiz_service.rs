use crate::dto::quiz_dto::{QuizView, QuizWithAttempt, SubmitQuizRequest, SubmitQuizResponse};
use crate::error::{is_unique_violation, Error, Result};
use crate::models::notification::NotificationKind;
use crate::models::quiz::{Quiz, QuizAttempt};
use crate::services::grading_service::GradingService;
use crate::services::notification_service::NotificationService;
use crate::utils::time::Clock;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

/// Availability window check shared by the read and submit paths.
fn check_window(now: DateTime<Utc>, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<()> {
    if now < start {
        return Err(Error::WindowViolation("Quiz not started yet".to_string()));
    }
    if now > end {
        return Err(Error::WindowViolation("Quiz has ended".to_string()));
    }
    Ok(())
}

#[derive(Clone)]
pub struct QuizService {
    pool: PgPool,
    clock: Arc<dyn Clock>,
}

impl QuizService {
    pub fn new(pool: PgPool, clock: Arc<dyn Clock>) -> Self {
        Self { pool, clock }
    }

    pub async fn list_for_subject(
        &self,
        subject_id: Uuid,
        student_id: Uuid,
    ) -> Result<Vec<QuizWithAttempt>> {
        let quizzes = sqlx::query_as::<_, Quiz>(
            r#"SELECT * FROM quizzes WHERE subject_id = $1 ORDER BY start_time DESC"#,
        )
        .bind(subject_id)
        .fetch_all(&self.pool)
        .await?;

        let mut out = Vec::with_capacity(quizzes.len());
        for quiz in quizzes {
            let attempt = self.find_attempt(quiz.id, student_id).await?;
            out.push(QuizWithAttempt {
                quiz: QuizView::from(&quiz),
                attempt,
            });
        }
        Ok(out)
    }

    /// Fetches a quiz for taking: rejected when already attempted or when
    /// outside the [start_time, end_time] window. Correct answers are
    /// redacted from the returned view.
    pub async fn get_available(&self, quiz_id: Uuid, student_id: Uuid) -> Result<QuizView> {
        let quiz = self.fetch_quiz(quiz_id).await?;

        if self.find_attempt(quiz_id, student_id).await?.is_some() {
            return Err(Error::AlreadyCompleted("Quiz already attempted".to_string()));
        }

        check_window(self.clock.now(), quiz.start_time, quiz.end_time)?;
        Ok(QuizView::from(&quiz))
    }

    /// Scores and records an attempt. The uniqueness of (quiz, student) is
    /// enforced by the store's unique key, so two racing submissions cannot
    /// both land; the loser surfaces as `AlreadyCompleted`. The stored
    /// attempt is terminal and never altered afterwards.
    pub async fn submit(
        &self,
        quiz_id: Uuid,
        student_id: Uuid,
        req: SubmitQuizRequest,
        notifications: &NotificationService,
    ) -> Result<SubmitQuizResponse> {
        let quiz = self.fetch_quiz(quiz_id).await?;

        check_window(self.clock.now(), quiz.start_time, quiz.end_time)?;

        if req.answers.is_empty() && !quiz.questions.0.is_empty() {
            return Err(Error::BadRequest("No answers submitted".to_string()));
        }

        let score = GradingService::score_quiz(&quiz.questions.0, &req.answers, quiz.max_marks);

        let inserted = sqlx::query_as::<_, QuizAttempt>(
            r#"
            INSERT INTO quiz_attempts (quiz_id, student_id, answers, score, time_taken)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(quiz_id)
        .bind(student_id)
        .bind(Json(req.answers))
        .bind(score.marks)
        .bind(req.time_taken)
        .fetch_one(&self.pool)
        .await;

        let attempt = match inserted {
            Ok(attempt) => attempt,
            Err(err) if is_unique_violation(&err) => {
                return Err(Error::AlreadyCompleted(
                    "Quiz already attempted".to_string(),
                ))
            }
            Err(err) => return Err(err.into()),
        };

        notifications
            .notify(
                student_id,
                "Quiz Completed",
                &format!("You scored {}/{} in {}", attempt.score, quiz.max_marks, quiz.title),
                NotificationKind::Quiz,
            )
            .await;

        Ok(SubmitQuizResponse {
            message: "Quiz submitted successfully".to_string(),
            score: attempt.score,
            total: quiz.max_marks,
            correct_answers: score.correct_count,
            total_questions: score.total_questions,
        })
    }

    /// Quizzes that have not yet opened across the student's enrollments.
    pub async fn upcoming_count(&self, student_id: Uuid) -> Result<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM quizzes q
            JOIN enrollments e ON e.subject_id = q.subject_id
            WHERE e.student_id = $1 AND q.start_time >= $2
            "#,
        )
        .bind(student_id)
        .bind(self.clock.now())
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    async fn fetch_quiz(&self, quiz_id: Uuid) -> Result<Quiz> {
        sqlx::query_as::<_, Quiz>(r#"SELECT * FROM quizzes WHERE id = $1"#)
            .bind(quiz_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("Quiz not found".to_string()))
    }

    async fn find_attempt(
        &self,
        quiz_id: Uuid,
        student_id: Uuid,
    ) -> Result<Option<QuizAttempt>> {
        let attempt = sqlx::query_as::<_, QuizAttempt>(
            r#"SELECT * FROM quiz_attempts WHERE quiz_id = $1 AND student_id = $2"#,
        )
        .bind(quiz_id)
        .bind(student_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(attempt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn window() -> (DateTime<Utc>, DateTime<Utc>) {
        (
            Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap(),
        )
    }

    #[test]
    fn before_start_is_a_window_violation() {
        let (start, end) = window();
        let now = start - chrono::Duration::minutes(1);
        assert!(matches!(
            check_window(now, start, end),
            Err(Error::WindowViolation(_))
        ));
    }

    #[test]
    fn after_end_is_a_window_violation() {
        let (start, end) = window();
        let now = end + chrono::Duration::seconds(1);
        assert!(matches!(
            check_window(now, start, end),
            Err(Error::WindowViolation(_))
        ));
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let (start, end) = window();
        assert!(check_window(start, start, end).is_ok());
        assert!(check_window(end, start, end).is_ok());
    }

    #[test]
    fn window_check_runs_against_the_injected_clock() {
        let (start, end) = window();
        let mut clock = crate::utils::time::MockClock::new();
        clock
            .expect_now()
            .return_const(start + chrono::Duration::minutes(30));
        assert!(check_window(clock.now(), start, end).is_ok());
    }
}
