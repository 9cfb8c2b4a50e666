pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::{
    announcement_service::AnnouncementService, assignment_service::AssignmentService,
    fee_service::FeeService, library_service::LibraryService,
    notification_service::NotificationService, quiz_service::QuizService,
    registration_service::RegistrationService, result_service::ResultService,
    subject_service::SubjectService, user_service::UserService,
};
use crate::utils::time::{Clock, SystemClock};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub user_service: UserService,
    pub subject_service: SubjectService,
    pub assignment_service: AssignmentService,
    pub quiz_service: QuizService,
    pub result_service: ResultService,
    pub fee_service: FeeService,
    pub registration_service: RegistrationService,
    pub library_service: LibraryService,
    pub notification_service: NotificationService,
    pub announcement_service: AnnouncementService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self::with_clock(pool, Arc::new(SystemClock))
    }

    pub fn with_clock(pool: PgPool, clock: Arc<dyn Clock>) -> Self {
        let user_service = UserService::new(pool.clone());
        let subject_service = SubjectService::new(pool.clone());
        let assignment_service = AssignmentService::new(pool.clone(), clock.clone());
        let quiz_service = QuizService::new(pool.clone(), clock.clone());
        let result_service = ResultService::new(pool.clone());
        let fee_service = FeeService::new(pool.clone(), clock.clone());
        let registration_service = RegistrationService::new(pool.clone());
        let library_service = LibraryService::new(pool.clone());
        let notification_service = NotificationService::new(pool.clone());
        let announcement_service = AnnouncementService::new(pool.clone());

        Self {
            pool,
            user_service,
            subject_service,
            assignment_service,
            quiz_service,
            result_service,
            fee_service,
            registration_service,
            library_service,
            notification_service,
            announcement_service,
        }
    }
}
