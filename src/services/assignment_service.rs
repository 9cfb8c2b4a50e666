use crate::dto::assignment_dto::AssignmentWithSubmission;
use crate::error::{Error, Result};
use crate::models::assignment::{Assignment, AssignmentSubmission, SubmissionStatus};
use crate::models::notification::NotificationKind;
use crate::services::notification_service::NotificationService;
use crate::utils::time::Clock;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

/// Late iff strictly after the deadline; the deadline instant itself is
/// still on-time.
pub fn classify_submission(now: DateTime<Utc>, deadline: DateTime<Utc>) -> SubmissionStatus {
    if now > deadline {
        SubmissionStatus::Late
    } else {
        SubmissionStatus::Submitted
    }
}

#[derive(Clone)]
pub struct AssignmentService {
    pool: PgPool,
    clock: Arc<dyn Clock>,
}

impl AssignmentService {
    pub fn new(pool: PgPool, clock: Arc<dyn Clock>) -> Self {
        Self { pool, clock }
    }

    pub async fn list_for_subject(
        &self,
        subject_id: Uuid,
        student_id: Uuid,
    ) -> Result<Vec<AssignmentWithSubmission>> {
        let assignments = sqlx::query_as::<_, Assignment>(
            r#"SELECT * FROM assignments WHERE subject_id = $1 ORDER BY deadline DESC"#,
        )
        .bind(subject_id)
        .fetch_all(&self.pool)
        .await?;

        let mut out = Vec::with_capacity(assignments.len());
        for assignment in assignments {
            let submission = sqlx::query_as::<_, AssignmentSubmission>(
                r#"SELECT * FROM assignment_submissions WHERE assignment_id = $1 AND student_id = $2"#,
            )
            .bind(assignment.id)
            .bind(student_id)
            .fetch_optional(&self.pool)
            .await?;
            out.push(AssignmentWithSubmission {
                assignment,
                submission,
            });
        }
        Ok(out)
    }

    /// Submits (or resubmits) an assignment. Resubmission overwrites the
    /// prior row in place through the unique key on (assignment, student);
    /// no history is kept and earlier marks/feedback are cleared.
    pub async fn submit(
        &self,
        assignment_id: Uuid,
        student_id: Uuid,
        file_base64: String,
        notifications: &NotificationService,
    ) -> Result<AssignmentSubmission> {
        let assignment = sqlx::query_as::<_, Assignment>(
            r#"SELECT * FROM assignments WHERE id = $1"#,
        )
        .bind(assignment_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Assignment not found".to_string()))?;

        let now = self.clock.now();
        let status = classify_submission(now, assignment.deadline);

        let submission = sqlx::query_as::<_, AssignmentSubmission>(
            r#"
            INSERT INTO assignment_submissions (assignment_id, student_id, file_base64, submitted_at, status)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (assignment_id, student_id) DO UPDATE SET
                file_base64 = EXCLUDED.file_base64,
                submitted_at = EXCLUDED.submitted_at,
                status = EXCLUDED.status,
                marks = NULL,
                feedback = NULL
            RETURNING *
            "#,
        )
        .bind(assignment_id)
        .bind(student_id)
        .bind(file_base64)
        .bind(now)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        notifications
            .notify(
                student_id,
                "Assignment Submitted",
                &format!(
                    "You have successfully submitted assignment: {}",
                    assignment.title
                ),
                NotificationKind::Assignment,
            )
            .await;

        Ok(submission)
    }

    /// Assignments still open across the student's enrolled subjects.
    pub async fn pending_count(&self, student_id: Uuid) -> Result<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM assignments a
            JOIN enrollments e ON e.subject_id = a.subject_id
            WHERE e.student_id = $1 AND a.deadline >= $2
            "#,
        )
        .bind(student_id)
        .bind(self.clock.now())
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn submission_at_the_deadline_instant_is_on_time() {
        let deadline = Utc.with_ymd_and_hms(2025, 3, 10, 23, 59, 59).unwrap();
        assert_eq!(
            classify_submission(deadline, deadline),
            SubmissionStatus::Submitted
        );
    }

    #[test]
    fn submission_one_second_after_the_deadline_is_late() {
        let deadline = Utc.with_ymd_and_hms(2025, 3, 10, 23, 59, 59).unwrap();
        let now = deadline + chrono::Duration::seconds(1);
        assert_eq!(classify_submission(now, deadline), SubmissionStatus::Late);
    }

    #[test]
    fn submission_before_the_deadline_is_on_time() {
        let deadline = Utc.with_ymd_and_hms(2025, 3, 10, 0, 0, 0).unwrap();
        let now = deadline - chrono::Duration::days(2);
        assert_eq!(
            classify_submission(now, deadline),
            SubmissionStatus::Submitted
        );
    }
}
