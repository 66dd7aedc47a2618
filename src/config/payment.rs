//! Payment configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Payment configuration (Razorpay)
///
/// The key secret doubles as the HMAC secret for verifying the provider's
/// payment confirmation callback.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentConfig {
    /// Razorpay API key id
    pub razorpay_key_id: String,

    /// Razorpay API key secret (also signs callbacks)
    pub razorpay_key_secret: String,

    /// Client path to land on after a confirmed payment
    #[serde(default = "default_redirect")]
    pub post_payment_redirect: String,
}

impl PaymentConfig {
    /// Check if using Razorpay test mode
    pub fn is_test_mode(&self) -> bool {
        self.razorpay_key_id.starts_with("rzp_test_")
    }

    /// Check if using Razorpay live mode
    pub fn is_live_mode(&self) -> bool {
        self.razorpay_key_id.starts_with("rzp_live_")
    }

    /// Validate payment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.razorpay_key_id.is_empty() {
            return Err(ValidationError::MissingRequired("RAZORPAY_KEY_ID"));
        }
        if self.razorpay_key_secret.is_empty() {
            return Err(ValidationError::MissingRequired("RAZORPAY_KEY_SECRET"));
        }

        // Verify key prefix for safety
        if !self.razorpay_key_id.starts_with("rzp_") {
            return Err(ValidationError::InvalidRazorpayKeyId);
        }

        if !self.post_payment_redirect.starts_with('/') {
            return Err(ValidationError::InvalidRedirectPath);
        }

        Ok(())
    }
}

fn default_redirect() -> String {
    "/student/dashboard".to_string()
}
