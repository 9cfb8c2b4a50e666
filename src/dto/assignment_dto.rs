use crate::models::assignment::{Assignment, AssignmentSubmission, SubmissionStatus};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize)]
pub struct AssignmentWithSubmission {
    #[serde(flatten)]
    pub assignment: Assignment,
    pub submission: Option<AssignmentSubmission>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitAssignmentRequest {
    #[validate(length(min = 1, message = "Submission file is required"))]
    pub file_base64: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitAssignmentResponse {
    pub message: String,
    pub submission_id: Uuid,
    pub status: SubmissionStatus,
}
