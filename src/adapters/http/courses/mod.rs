//! HTTP adapter for the courses API.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CheckoutCourseResponse, CheckoutRequest, CheckoutResponse, CourseDetailResponse,
    CourseSummaryResponse, EnrolledResponse, ErrorResponse, LectureResponse, LiveClassResponse,
    PaymentVerificationRequest, PaymentVerifiedResponse,
};
pub use handlers::{AuthenticatedUser, CoursesApiError, CoursesAppState, MaybeUser};
pub use routes::course_routes;
