//! Axum router configuration for the courses API.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    checkout, course_detail, enroll, list_courses, list_enrolled, payment_verification,
    CoursesAppState,
};

/// Create the courses API router.
///
/// # Routes
///
/// ## Public Endpoints
/// - `GET /` - Catalog listing (metadata only)
/// - `GET /:course_id` - Course detail; protected fields gated
///
/// ## Authenticated Endpoints
/// - `POST /checkout` - Create a provider order
/// - `POST /paymentverification` - Verify callback, grant enrollment
/// - `POST /:course_id/enroll` - Enroll without payment (free/admin)
/// - `GET /user/enrolled` - Courses the caller is enrolled in
///
/// Mount at `/api/courses`.
pub fn course_routes() -> Router<CoursesAppState> {
    Router::new()
        // Payment flow
        .route("/checkout", post(checkout))
        .route("/paymentverification", post(payment_verification))
        // Enrollment and dashboard
        .route("/user/enrolled", get(list_enrolled))
        .route("/:course_id/enroll", post(enroll))
        // Catalog
        .route("/", get(list_courses))
        .route("/:course_id", get(course_detail))
}
