//! CreateOrderHandler - mints a provider order for a course checkout.

use std::sync::Arc;

use crate::domain::course::Course;
use crate::domain::enrollment::EnrollmentError;
use crate::domain::foundation::{authorize, CourseAction, CourseId, Role, UserId};
use crate::ports::{CourseStore, PaymentGateway, ProviderOrder, ORDER_CURRENCY};

/// Command to start a checkout for a course.
#[derive(Debug, Clone)]
pub struct CreateOrderCommand {
    pub course_id: CourseId,
    pub user_id: UserId,
    pub role: Role,
}

/// Result of a successful order creation: the provider order plus the
/// course snapshot the client needs to render its payment widget.
#[derive(Debug, Clone)]
pub struct CreateOrderResult {
    pub order: ProviderOrder,
    pub course: Course,
}

/// Handler for creating payment-provider orders.
pub struct CreateOrderHandler {
    courses: Arc<dyn CourseStore>,
    gateway: Arc<dyn PaymentGateway>,
}

impl CreateOrderHandler {
    pub fn new(courses: Arc<dyn CourseStore>, gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { courses, gateway }
    }

    pub async fn handle(
        &self,
        cmd: CreateOrderCommand,
    ) -> Result<CreateOrderResult, EnrollmentError> {
        authorize(cmd.role, CourseAction::Checkout)?;

        // 1. Resolve the course; checkout against an unknown course is a 404.
        let course = self
            .courses
            .find_by_id(&cmd.course_id)
            .await?
            .ok_or(EnrollmentError::CourseNotFound(cmd.course_id))?;

        // 2. The provider expects smallest currency units: price * 100.
        let amount = course.price.minor_units();

        // 3. Mint the provider order. On failure the attempt is abandoned;
        //    no local state has been created at this point.
        let order = self
            .gateway
            .create_order(amount, ORDER_CURRENCY)
            .await
            .map_err(|e| {
                tracing::error!(
                    course_id = %cmd.course_id,
                    user_id = %cmd.user_id,
                    error = %e,
                    "Order creation failed at payment gateway"
                );
                EnrollmentError::upstream_payment(e.to_string())
            })?;

        tracing::info!(
            course_id = %cmd.course_id,
            user_id = %cmd.user_id,
            order_id = %order.id,
            amount_minor = order.amount,
            "Provider order created"
        );

        Ok(CreateOrderResult { order, course })
    }
}
