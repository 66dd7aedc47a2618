//! HTTP DTOs (Data Transfer Objects) for the courses API.
//!
//! These types define the JSON request/response structure and are the
//! boundary between HTTP and the application layer. Field names follow
//! the public wire contract: `courseId` camelCase, the provider callback
//! fields exactly as the provider posts them.

use serde::{Deserialize, Serialize};

use crate::domain::course::{Course, Lecture, LiveClass};
use crate::domain::foundation::CourseId;
use crate::ports::ProviderOrder;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to start a checkout.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutRequest {
    #[serde(rename = "courseId")]
    pub course_id: CourseId,
}

/// The provider's signed payment confirmation, plus the client-asserted
/// course id.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentVerificationRequest {
    pub razorpay_order_id: String,
    pub razorpay_payment_id: String,
    pub razorpay_signature: String,
    #[serde(rename = "courseId")]
    pub course_id: CourseId,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for a created checkout order.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutResponse {
    pub success: bool,
    pub order: ProviderOrder,
    pub course: CheckoutCourseResponse,
}

/// Course snapshot a client needs to render the payment widget.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutCourseResponse {
    pub id: String,
    pub title: String,
    /// Price in whole currency units (the order amount is in hundredths).
    pub price: u32,
    pub thumbnail: Option<String>,
}

impl From<&Course> for CheckoutCourseResponse {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id.to_string(),
            title: course.title.clone(),
            price: course.price.units(),
            thumbnail: course.thumbnail.clone(),
        }
    }
}

/// Response for a verified payment.
///
/// The original flow answered with an HTTP redirect; this is normalized
/// to JSON carrying the redirect target so every response on this API is
/// a JSON body.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentVerifiedResponse {
    pub success: bool,
    pub redirect_to: String,
}

/// Response for a direct enrollment.
#[derive(Debug, Clone, Serialize)]
pub struct EnrolledResponse {
    pub success: bool,
    pub msg: String,
}

/// Catalog entry: course metadata only, safe for anonymous browsing.
#[derive(Debug, Clone, Serialize)]
pub struct CourseSummaryResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: u32,
    pub thumbnail: Option<String>,
    pub instructor: String,
    pub lecture_count: usize,
}

impl From<&Course> for CourseSummaryResponse {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id.to_string(),
            title: course.title.clone(),
            description: course.description.clone(),
            category: course.category.clone(),
            price: course.price.units(),
            thumbnail: course.thumbnail.clone(),
            instructor: course.instructor.to_string(),
            lecture_count: course.lectures.len(),
        }
    }
}

/// Full course view with protected fields redacted by the access gate.
#[derive(Debug, Clone, Serialize)]
pub struct CourseDetailResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: u32,
    pub thumbnail: Option<String>,
    pub instructor: String,
    pub lectures: Vec<LectureResponse>,
    pub live_classes: Vec<LiveClassResponse>,
}

impl CourseDetailResponse {
    /// Builds the view for a caller with the given access decision.
    ///
    /// Metadata is always present. Video references appear when the
    /// caller has access or the lecture is a free preview; notes and
    /// meeting links only with access.
    pub fn redacted(course: &Course, has_access: bool) -> Self {
        Self {
            id: course.id.to_string(),
            title: course.title.clone(),
            description: course.description.clone(),
            category: course.category.clone(),
            price: course.price.units(),
            thumbnail: course.thumbnail.clone(),
            instructor: course.instructor.to_string(),
            lectures: course
                .lectures
                .iter()
                .map(|l| LectureResponse::redacted(l, has_access))
                .collect(),
            live_classes: course
                .live_classes
                .iter()
                .map(|lc| LiveClassResponse::redacted(lc, has_access))
                .collect(),
        }
    }
}

/// A lecture as served to a given caller.
#[derive(Debug, Clone, Serialize)]
pub struct LectureResponse {
    pub title: String,
    pub is_free: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl LectureResponse {
    fn redacted(lecture: &Lecture, has_access: bool) -> Self {
        let video_visible = has_access || lecture.is_free;
        Self {
            title: lecture.title.clone(),
            is_free: lecture.is_free,
            video_id: video_visible.then(|| lecture.video_id.clone()),
            notes: if has_access {
                lecture.notes.clone()
            } else {
                None
            },
        }
    }
}

/// A live class as served to a given caller.
#[derive(Debug, Clone, Serialize)]
pub struct LiveClassResponse {
    pub topic: String,
    pub date: String,
    pub time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_link: Option<String>,
}

impl LiveClassResponse {
    fn redacted(live_class: &LiveClass, has_access: bool) -> Self {
        Self {
            topic: live_class.topic.clone(),
            date: live_class.date.to_string(),
            time: live_class.time.clone(),
            meeting_link: has_access.then(|| live_class.meeting_link.clone()),
        }
    }
}

/// Error body for every failure on this API.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub msg: String,
}

impl ErrorResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            msg: msg.into(),
        }
    }
}
