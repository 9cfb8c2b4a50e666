use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "registration_status", rename_all = "lowercase")]
pub enum RegistrationStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Registration {
    pub id: Uuid,
    pub student_id: Uuid,
    pub semester: i32,
    pub year: i32,
    pub selected_subjects: Json<Vec<Uuid>>,
    pub electives: Json<Vec<Uuid>>,
    pub status: RegistrationStatus,
    pub submitted_at: DateTime<Utc>,
}
