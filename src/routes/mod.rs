use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::AppState;

pub mod announcements;
pub mod assignments;
pub mod auth;
pub mod dashboard;
pub mod fees;
pub mod health;
pub mod library;
pub mod notifications;
pub mod quizzes;
pub mod registrations;
pub mod results;
pub mod subjects;

pub fn build_router(state: AppState) -> Router {
    let public_api = Router::new()
        .route("/health", get(health::health))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login));

    let student_api = Router::new()
        .route("/api/auth/me", get(auth::me))
        .route("/api/dashboard", get(dashboard::get_dashboard))
        .route("/api/subjects", get(subjects::list_subjects))
        .route("/api/subjects/:id", get(subjects::get_subject))
        .route(
            "/api/subjects/:id/assignments",
            get(subjects::list_assignments),
        )
        .route("/api/subjects/:id/quizzes", get(subjects::list_quizzes))
        .route("/api/subjects/:id/materials", get(subjects::list_materials))
        .route(
            "/api/assignments/:id/submit",
            post(assignments::submit_assignment),
        )
        .route("/api/quizzes/:id", get(quizzes::get_quiz))
        .route("/api/quizzes/:id/submit", post(quizzes::submit_quiz))
        .route("/api/results", get(results::list_results))
        .route(
            "/api/results/semester/:semester",
            get(results::semester_results),
        )
        .route("/api/fees", get(fees::list_fees))
        .route("/api/fees/current", get(fees::current_fee))
        .route("/api/fees/:id/create-order", post(fees::create_order))
        .route("/api/fees/:id/payment", post(fees::record_payment))
        .route(
            "/api/registrations",
            get(registrations::list_registrations).post(registrations::create_registration),
        )
        .route("/api/library/books", get(library::search_books))
        .route("/api/library/issued", get(library::issued_books))
        .route("/api/notifications", get(notifications::list_notifications))
        .route(
            "/api/notifications/:id/read",
            put(notifications::mark_notification_read),
        )
        .route("/api/announcements", get(announcements::list_announcements))
        .layer(axum::middleware::from_fn(
            crate::middleware::auth::require_bearer_auth,
        ));

    public_api
        .merge(student_api)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
