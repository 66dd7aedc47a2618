//! Integration tests for the courses HTTP API.
//!
//! These tests drive the full axum router with in-memory stores and the
//! mock payment gateway: checkout, payment verification, enrollment
//! idempotency, and content gating.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use secrecy::SecretString;
use serde_json::{json, Value};
use tower::ServiceExt;

use courseloft::adapters::http::courses::{course_routes, CoursesAppState};
use courseloft::adapters::memory::{InMemoryCourseStore, InMemoryUserStore};
use courseloft::adapters::razorpay::MockPaymentGateway;
use courseloft::domain::course::{Course, Lecture, Price};
use courseloft::domain::enrollment::signature;
use courseloft::domain::foundation::{CourseId, Role, UserId};
use courseloft::domain::user::User;
use courseloft::ports::GatewayError;

const SECRET: &str = "rzp_test_secret_12345";
const STUDENT: &str = "student-1";

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestApp {
    router: Router,
    courses: Arc<InMemoryCourseStore>,
    users: Arc<InMemoryUserStore>,
    gateway: Arc<MockPaymentGateway>,
}

impl TestApp {
    async fn new() -> Self {
        let courses = Arc::new(InMemoryCourseStore::new());
        let users = Arc::new(InMemoryUserStore::new());
        let gateway = Arc::new(MockPaymentGateway::new());

        users
            .insert(User::new(
                UserId::new(STUDENT).unwrap(),
                "Asha",
                Role::Student,
            ))
            .await;

        let state = CoursesAppState {
            courses: courses.clone(),
            users: users.clone(),
            gateway: gateway.clone(),
            callback_secret: SecretString::new(SECRET.to_string()),
            post_payment_redirect: "/student/dashboard".to_string(),
        };

        let router = Router::new()
            .nest("/api/courses", course_routes())
            .with_state(state);

        Self {
            router,
            courses,
            users,
            gateway,
        }
    }

    async fn seed_course(&self, title: &str, price: u32) -> CourseId {
        let mut course = Course::new(
            CourseId::new(),
            title,
            "A seeded course",
            "programming",
            Price::new(price),
            UserId::new("teacher-1").unwrap(),
        )
        .unwrap();
        course.lectures = vec![
            Lecture::new("Welcome", "vid-preview").with_free_preview(),
            Lecture::new("Deep dive", "vid-paid").with_notes("https://example.com/notes.pdf"),
        ];
        let id = course.id;
        self.courses.insert(course).await;
        id
    }

    async fn request(&self, req: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    async fn post_json(&self, path: &str, user: Option<&str>, body: Value) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(user_id) = user {
            builder = builder.header("X-User-Id", user_id);
        }
        self.request(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }

    async fn get(&self, path: &str, user: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method("GET").uri(path);
        if let Some(user_id) = user {
            builder = builder.header("X-User-Id", user_id);
        }
        self.request(builder.body(Body::empty()).unwrap()).await
    }

    /// Runs the checkout step and returns the provider order id.
    async fn checkout(&self, course_id: CourseId) -> String {
        let (status, body) = self
            .post_json(
                "/api/courses/checkout",
                Some(STUDENT),
                json!({ "courseId": course_id.to_string() }),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        body["order"]["id"].as_str().unwrap().to_string()
    }

    /// Builds a valid verification payload for an order.
    fn verification_body(&self, order_id: &str, course_id: CourseId) -> Value {
        let payment_id = "pay_test_1";
        json!({
            "razorpay_order_id": order_id,
            "razorpay_payment_id": payment_id,
            "razorpay_signature": signature::sign(order_id, payment_id, SECRET),
            "courseId": course_id.to_string(),
        })
    }
}

// =============================================================================
// Checkout
// =============================================================================

#[tokio::test]
async fn checkout_converts_price_to_minor_units() {
    let app = TestApp::new().await;
    let course_id = app.seed_course("Rust Systems", 499).await;

    let (status, body) = app
        .post_json(
            "/api/courses/checkout",
            Some(STUDENT),
            json!({ "courseId": course_id.to_string() }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["order"]["amount"], json!(49_900));
    assert_eq!(body["order"]["currency"], json!("INR"));
    assert_eq!(body["course"]["title"], json!("Rust Systems"));
    assert_eq!(body["course"]["price"], json!(499));
    assert_eq!(app.gateway.requests(), vec![(49_900, "INR".to_string())]);
}

#[tokio::test]
async fn checkout_unknown_course_returns_404() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post_json(
            "/api/courses/checkout",
            Some(STUDENT),
            json!({ "courseId": CourseId::new().to_string() }),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn checkout_without_identity_returns_401() {
    let app = TestApp::new().await;
    let course_id = app.seed_course("Rust Systems", 499).await;

    let (status, _) = app
        .post_json(
            "/api/courses/checkout",
            None,
            json!({ "courseId": course_id.to_string() }),
        )
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn checkout_surfaces_gateway_failure_as_500() {
    let app = TestApp::new().await;
    let course_id = app.seed_course("Rust Systems", 499).await;
    app.gateway.fail_next(GatewayError::network("provider unreachable"));

    let (status, body) = app
        .post_json(
            "/api/courses/checkout",
            Some(STUDENT),
            json!({ "courseId": course_id.to_string() }),
        )
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], json!(false));
}

// =============================================================================
// Payment Verification & Enrollment
// =============================================================================

#[tokio::test]
async fn verified_payment_enrolls_and_redirects() {
    let app = TestApp::new().await;
    let course_id = app.seed_course("Rust Systems", 499).await;
    let order_id = app.checkout(course_id).await;

    let (status, body) = app
        .post_json(
            "/api/courses/paymentverification",
            Some(STUDENT),
            app.verification_body(&order_id, course_id),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["redirect_to"], json!("/student/dashboard"));

    let (status, enrolled) = app.get("/api/courses/user/enrolled", Some(STUDENT)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(enrolled.as_array().unwrap().len(), 1);
    assert_eq!(enrolled[0]["title"], json!("Rust Systems"));
}

#[tokio::test]
async fn duplicate_verification_is_idempotent() {
    let app = TestApp::new().await;
    let course_id = app.seed_course("Rust Systems", 499).await;
    let order_id = app.checkout(course_id).await;
    let body = app.verification_body(&order_id, course_id);

    let (first, _) = app
        .post_json("/api/courses/paymentverification", Some(STUDENT), body.clone())
        .await;
    let (second, _) = app
        .post_json("/api/courses/paymentverification", Some(STUDENT), body)
        .await;

    // Both submissions succeed; exactly one grant exists.
    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::OK);
    let (_, enrolled) = app.get("/api/courses/user/enrolled", Some(STUDENT)).await;
    assert_eq!(enrolled.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn tampered_signature_is_rejected_without_enrollment() {
    let app = TestApp::new().await;
    let course_id = app.seed_course("Rust Systems", 499).await;
    let order_id = app.checkout(course_id).await;

    let mut body = app.verification_body(&order_id, course_id);
    // Flip one character of the signature.
    let mut sig = body["razorpay_signature"].as_str().unwrap().to_string();
    let flipped = if sig.ends_with('0') { '1' } else { '0' };
    sig.pop();
    sig.push(flipped);
    body["razorpay_signature"] = json!(sig);

    let (status, response) = app
        .post_json("/api/courses/paymentverification", Some(STUDENT), body)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["success"], json!(false));
    assert_eq!(response["msg"], json!("Payment verification failed"));

    let (_, enrolled) = app.get("/api/courses/user/enrolled", Some(STUDENT)).await;
    assert!(enrolled.as_array().unwrap().is_empty());
}

// =============================================================================
// Direct Enrollment
// =============================================================================

#[tokio::test]
async fn student_enrolls_directly_in_free_course() {
    let app = TestApp::new().await;
    let course_id = app.seed_course("Free Intro", 0).await;
    let path = format!("/api/courses/{}/enroll", course_id);

    let (status, body) = app.post_json(&path, Some(STUDENT), json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], json!("Enrolled successfully"));

    // A second attempt is a rejected duplicate, unlike payment callbacks.
    let (status, body) = app.post_json(&path, Some(STUDENT), json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn student_cannot_directly_enroll_in_priced_course() {
    let app = TestApp::new().await;
    let course_id = app.seed_course("Paid Course", 499).await;
    let path = format!("/api/courses/{}/enroll", course_id);

    let (status, _) = app.post_json(&path, Some(STUDENT), json!({})).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

// =============================================================================
// Catalog & Access Gate
// =============================================================================

#[tokio::test]
async fn catalog_is_browsable_anonymously() {
    let app = TestApp::new().await;
    app.seed_course("Rust Systems", 499).await;

    let (status, body) = app.get("/api/courses", None).await;

    assert_eq!(status, StatusCode::OK);
    let listing = body.as_array().unwrap();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0]["title"], json!("Rust Systems"));
    assert_eq!(listing[0]["lecture_count"], json!(2));
}

#[tokio::test]
async fn detail_gates_paid_content_until_enrollment() {
    let app = TestApp::new().await;
    let course_id = app.seed_course("Rust Systems", 499).await;
    let path = format!("/api/courses/{}", course_id);

    // Anonymous: free preview visible, paid lecture video and notes hidden.
    let (status, body) = app.get(&path, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["lectures"][0]["video_id"], json!("vid-preview"));
    assert!(body["lectures"][1].get("video_id").is_none());
    assert!(body["lectures"][1].get("notes").is_none());

    // Authenticated but not enrolled: same redaction.
    let (_, body) = app.get(&path, Some(STUDENT)).await;
    assert!(body["lectures"][1].get("video_id").is_none());

    // Enroll through a verified payment, then the content opens up.
    let order_id = app.checkout(course_id).await;
    app.post_json(
        "/api/courses/paymentverification",
        Some(STUDENT),
        app.verification_body(&order_id, course_id),
    )
    .await;

    let (_, body) = app.get(&path, Some(STUDENT)).await;
    assert_eq!(body["lectures"][1]["video_id"], json!("vid-paid"));
    assert_eq!(
        body["lectures"][1]["notes"],
        json!("https://example.com/notes.pdf")
    );
}

#[tokio::test]
async fn free_course_content_is_open_to_everyone() {
    let app = TestApp::new().await;
    let course_id = app.seed_course("Free Intro", 0).await;
    let path = format!("/api/courses/{}", course_id);

    let (status, body) = app.get(&path, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["lectures"][1]["video_id"], json!("vid-paid"));
}

#[tokio::test]
async fn detail_unknown_course_returns_404() {
    let app = TestApp::new().await;

    let (status, _) = app
        .get(&format!("/api/courses/{}", CourseId::new()), None)
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
