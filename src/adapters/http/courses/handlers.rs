//! HTTP handlers for the courses API.
//!
//! These handlers connect Axum routes to application layer command/query
//! handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use secrecy::SecretString;
use uuid::Uuid;

use crate::application::handlers::access::AccessGate;
use crate::application::handlers::checkout::{
    ConfirmPaymentCommand, ConfirmPaymentHandler, CreateOrderCommand, CreateOrderHandler,
    DirectEnrollCommand, DirectEnrollHandler, ListEnrolledHandler, ListEnrolledQuery,
};
use crate::domain::enrollment::EnrollmentError;
use crate::domain::foundation::{CourseId, Role, UserId};
use crate::ports::{CourseStore, PaymentGateway, UserStore};

use super::dto::{
    CheckoutCourseResponse, CheckoutRequest, CheckoutResponse, CourseDetailResponse,
    CourseSummaryResponse, EnrolledResponse, ErrorResponse, PaymentVerificationRequest,
    PaymentVerifiedResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// Cloned per request; dependencies are Arc-wrapped for cheap sharing.
#[derive(Clone)]
pub struct CoursesAppState {
    pub courses: Arc<dyn CourseStore>,
    pub users: Arc<dyn UserStore>,
    pub gateway: Arc<dyn PaymentGateway>,
    /// Shared secret for payment callback signatures.
    pub callback_secret: SecretString,
    /// Where the client should land after a confirmed payment.
    pub post_payment_redirect: String,
}

impl CoursesAppState {
    /// Create handlers on demand from the shared state.
    pub fn create_order_handler(&self) -> CreateOrderHandler {
        CreateOrderHandler::new(self.courses.clone(), self.gateway.clone())
    }

    pub fn confirm_payment_handler(&self) -> ConfirmPaymentHandler {
        ConfirmPaymentHandler::new(self.users.clone(), self.callback_secret.clone())
    }

    pub fn direct_enroll_handler(&self) -> DirectEnrollHandler {
        DirectEnrollHandler::new(self.courses.clone(), self.users.clone())
    }

    pub fn list_enrolled_handler(&self) -> ListEnrolledHandler {
        ListEnrolledHandler::new(self.courses.clone(), self.users.clone())
    }

    pub fn access_gate(&self) -> AccessGate {
        AccessGate::new(self.users.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// User Context (supplied by the identity middleware)
// ════════════════════════════════════════════════════════════════════════════════

/// Authenticated caller context extracted from the request.
///
/// The session middleware is an external collaborator; in production it
/// validates a token and stamps the identity headers. For development and
/// tests the extractor reads `X-User-Id` and `X-User-Role` directly.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub role: Role,
}

/// Rejection type for AuthenticatedUser extraction.
pub struct AuthenticationRequired;

impl IntoResponse for AuthenticationRequired {
    fn into_response(self) -> axum::response::Response {
        let error = ErrorResponse::new("Authentication is required");
        (StatusCode::UNAUTHORIZED, Json(error)).into_response()
    }
}

fn identity_from_parts(parts: &axum::http::request::Parts) -> Option<AuthenticatedUser> {
    let user_id = parts
        .headers
        .get("X-User-Id")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| UserId::new(s).ok())?;
    let role = parts
        .headers
        .get("X-User-Role")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse::<Role>().ok())
        .unwrap_or(Role::Student);
    Some(AuthenticatedUser { user_id, role })
}

impl<S> axum::extract::FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AuthenticationRequired;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move { identity_from_parts(parts).ok_or(AuthenticationRequired) })
    }
}

/// Optional caller context for endpoints that serve anonymous browsers.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<AuthenticatedUser>);

impl<S> axum::extract::FromRequestParts<S> for MaybeUser
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move { Ok(MaybeUser(identity_from_parts(parts))) })
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Payment Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/courses/checkout - Create a provider order for a course
pub async fn checkout(
    State(state): State<CoursesAppState>,
    user: AuthenticatedUser,
    Json(request): Json<CheckoutRequest>,
) -> Result<impl IntoResponse, CoursesApiError> {
    let handler = state.create_order_handler();
    let cmd = CreateOrderCommand {
        course_id: request.course_id,
        user_id: user.user_id,
        role: user.role,
    };

    let result = handler.handle(cmd).await?;

    let response = CheckoutResponse {
        success: true,
        course: CheckoutCourseResponse::from(&result.course),
        order: result.order,
    };

    Ok(Json(response))
}

/// POST /api/courses/paymentverification - Verify the callback and enroll
pub async fn payment_verification(
    State(state): State<CoursesAppState>,
    user: AuthenticatedUser,
    Json(request): Json<PaymentVerificationRequest>,
) -> Result<impl IntoResponse, CoursesApiError> {
    let handler = state.confirm_payment_handler();
    let cmd = ConfirmPaymentCommand {
        order_id: request.razorpay_order_id,
        payment_id: request.razorpay_payment_id,
        signature: request.razorpay_signature,
        course_id: request.course_id,
        user_id: user.user_id,
        role: user.role,
    };

    // Duplicate confirmations come back AlreadyEnrolled and still succeed.
    handler.handle(cmd).await?;

    let response = PaymentVerifiedResponse {
        success: true,
        redirect_to: state.post_payment_redirect.clone(),
    };

    Ok(Json(response))
}

/// POST /api/courses/:course_id/enroll - Enroll without payment
pub async fn enroll(
    State(state): State<CoursesAppState>,
    user: AuthenticatedUser,
    Path(course_id): Path<Uuid>,
) -> Result<impl IntoResponse, CoursesApiError> {
    let handler = state.direct_enroll_handler();
    let cmd = DirectEnrollCommand {
        course_id: CourseId::from_uuid(course_id),
        user_id: user.user_id,
        role: user.role,
    };

    handler.handle(cmd).await?;

    Ok(Json(EnrolledResponse {
        success: true,
        msg: "Enrolled successfully".to_string(),
    }))
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/courses - Public catalog listing
pub async fn list_courses(
    State(state): State<CoursesAppState>,
) -> Result<impl IntoResponse, CoursesApiError> {
    let courses = state.courses.list().await.map_err(EnrollmentError::from)?;
    let response: Vec<CourseSummaryResponse> =
        courses.iter().map(CourseSummaryResponse::from).collect();
    Ok(Json(response))
}

/// GET /api/courses/:course_id - Course detail with gated content
pub async fn course_detail(
    State(state): State<CoursesAppState>,
    MaybeUser(user): MaybeUser,
    Path(course_id): Path<Uuid>,
) -> Result<impl IntoResponse, CoursesApiError> {
    let course_id = CourseId::from_uuid(course_id);
    let course = state
        .courses
        .find_by_id(&course_id)
        .await
        .map_err(EnrollmentError::from)?
        .ok_or(EnrollmentError::CourseNotFound(course_id))?;

    let gate = state.access_gate();
    let user_id = user.as_ref().map(|u| &u.user_id);
    let has_access = gate
        .can_access(user_id, &course)
        .await
        .map_err(EnrollmentError::from)?;

    Ok(Json(CourseDetailResponse::redacted(&course, has_access)))
}

/// GET /api/courses/user/enrolled - Student dashboard listing
pub async fn list_enrolled(
    State(state): State<CoursesAppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, CoursesApiError> {
    let handler = state.list_enrolled_handler();
    let query = ListEnrolledQuery {
        user_id: user.user_id,
    };

    let courses = handler.handle(query).await?;

    // Enrolled callers see their content unredacted.
    let response: Vec<CourseDetailResponse> = courses
        .iter()
        .map(|c| CourseDetailResponse::redacted(c, true))
        .collect();

    Ok(Json(response))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts flow errors to HTTP responses.
pub struct CoursesApiError(EnrollmentError);

impl From<EnrollmentError> for CoursesApiError {
    fn from(err: EnrollmentError) -> Self {
        Self(err)
    }
}

impl IntoResponse for CoursesApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            EnrollmentError::CourseNotFound(_) => StatusCode::NOT_FOUND,
            EnrollmentError::VerificationFailed | EnrollmentError::AlreadyEnrolled { .. } => {
                StatusCode::BAD_REQUEST
            }
            EnrollmentError::Forbidden { .. } => StatusCode::FORBIDDEN,
            EnrollmentError::UpstreamPayment { .. } | EnrollmentError::Infrastructure(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorResponse::new(self.0.message());
        (status, Json(body)).into_response()
    }
}
