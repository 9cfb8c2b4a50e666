use crate::error::{Error, Result};
use crate::models::material::StudyMaterial;
use crate::models::subject::Subject;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct SubjectService {
    pool: PgPool,
}

impl SubjectService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_for_student(&self, year: i32, semester: i32) -> Result<Vec<Subject>> {
        let subjects = sqlx::query_as::<_, Subject>(
            r#"SELECT * FROM subjects WHERE year = $1 AND semester = $2 ORDER BY code"#,
        )
        .bind(year)
        .bind(semester)
        .fetch_all(&self.pool)
        .await?;
        Ok(subjects)
    }

    pub async fn get(&self, subject_id: Uuid) -> Result<Subject> {
        sqlx::query_as::<_, Subject>(r#"SELECT * FROM subjects WHERE id = $1"#)
            .bind(subject_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("Subject not found".to_string()))
    }

    pub async fn materials(&self, subject_id: Uuid) -> Result<Vec<StudyMaterial>> {
        let materials = sqlx::query_as::<_, StudyMaterial>(
            r#"SELECT * FROM study_materials WHERE subject_id = $1 ORDER BY uploaded_at DESC"#,
        )
        .bind(subject_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(materials)
    }
}
