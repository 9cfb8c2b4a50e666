use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Stored marks for one subject in one semester. The letter grade is
/// derived from internal_total + end_sem on every read, never trusted
/// from the stored column.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SubjectResult {
    pub id: Uuid,
    pub student_id: Uuid,
    pub subject_id: Uuid,
    pub semester: i32,
    pub year: i32,
    pub assignment_marks: i32,
    pub quiz_marks: i32,
    pub mid_sem: i32,
    pub end_sem: i32,
    pub internal_total: i32,
    pub grade: Option<String>,
}
