use crate::dto::registration_dto::CreateRegistrationRequest;
use crate::error::{Error, Result};
use crate::models::notification::NotificationKind;
use crate::models::registration::{Registration, RegistrationStatus};
use crate::models::user::User;
use crate::services::notification_service::NotificationService;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct RegistrationService {
    pool: PgPool,
}

impl RegistrationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_for_student(&self, student_id: Uuid) -> Result<Vec<Registration>> {
        let registrations = sqlx::query_as::<_, Registration>(
            r#"SELECT * FROM registrations WHERE student_id = $1 ORDER BY submitted_at DESC"#,
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(registrations)
    }

    /// One registration per student per semester; a rejected one may be
    /// re-submitted. Selected subjects and electives become enrollments.
    pub async fn create(
        &self,
        student: &User,
        req: CreateRegistrationRequest,
        notifications: &NotificationService,
    ) -> Result<Registration> {
        let existing = sqlx::query_as::<_, Registration>(
            r#"SELECT * FROM registrations WHERE student_id = $1 AND semester = $2 AND year = $3
               ORDER BY submitted_at DESC LIMIT 1"#,
        )
        .bind(student.id)
        .bind(student.semester)
        .bind(student.year)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(existing) = existing {
            if existing.status != RegistrationStatus::Rejected {
                return Err(Error::BadRequest(
                    "Registration already submitted for this semester".to_string(),
                ));
            }
        }

        let registration = sqlx::query_as::<_, Registration>(
            r#"
            INSERT INTO registrations (student_id, semester, year, selected_subjects, electives)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(student.id)
        .bind(student.semester)
        .bind(student.year)
        .bind(Json(req.selected_subjects.clone()))
        .bind(Json(req.electives.clone()))
        .fetch_one(&self.pool)
        .await?;

        for subject_id in req.selected_subjects.iter().chain(req.electives.iter()) {
            sqlx::query(
                r#"
                INSERT INTO enrollments (student_id, subject_id, semester, year)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (student_id, subject_id) DO NOTHING
                "#,
            )
            .bind(student.id)
            .bind(subject_id)
            .bind(student.semester)
            .bind(student.year)
            .execute(&self.pool)
            .await?;
        }

        notifications
            .notify(
                student.id,
                "Registration Submitted",
                "Your course registration has been submitted for approval",
                NotificationKind::Registration,
            )
            .await;

        Ok(registration)
    }
}
