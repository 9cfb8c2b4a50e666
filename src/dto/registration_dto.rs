use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRegistrationRequest {
    #[validate(length(min = 1, message = "At least one subject must be selected"))]
    pub selected_subjects: Vec<Uuid>,
    pub electives: Vec<Uuid>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateRegistrationResponse {
    pub message: String,
    pub registration_id: Uuid,
}
