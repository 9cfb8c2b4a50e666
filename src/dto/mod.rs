pub mod assignment_dto;
pub mod auth_dto;
pub mod fee_dto;
pub mod quiz_dto;
pub mod registration_dto;
pub mod result_dto;
