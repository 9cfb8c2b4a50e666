pub mod announcement_service;
pub mod assignment_service;
pub mod fee_service;
pub mod grading_service;
pub mod library_service;
pub mod notification_service;
pub mod quiz_service;
pub mod registration_service;
pub mod result_service;
pub mod subject_service;
pub mod user_service;
