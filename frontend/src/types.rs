//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Wizard Types** - verification method and wizard step
//! - **API Types** - request bodies sent to the deletion endpoint

use serde::Serialize;

// =============================================================================
// Wizard Types
// =============================================================================

/// How the user proves they own the account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VerificationMethod {
    /// Four-digit code sent to the mobile number.
    #[default]
    Otp,
    /// Existing account password.
    Password,
}

impl VerificationMethod {
    /// Value of the radio input.
    pub fn as_str(self) -> &'static str {
        match self {
            VerificationMethod::Otp => "otp",
            VerificationMethod::Password => "password",
        }
    }

    /// Label of the step 1 submit button.
    pub fn request_label(self) -> &'static str {
        match self {
            VerificationMethod::Otp => "Get 4-Digit OTP",
            VerificationMethod::Password => "Proceed to Verify",
        }
    }
}

/// Wizard position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Step {
    /// Step 1: mobile number and method.
    #[default]
    CollectMobile,
    /// Step 2: OTP or password.
    CollectVerification,
}

// =============================================================================
// API Request Types
// =============================================================================

/// Body of the verification request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VerificationPayload {
    pub mobile: String,
}

/// Body of the deletion confirmation.
///
/// Exactly one of `password` / `otp` is non-empty.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct DeletionPayload {
    pub mobile: String,
    pub password: String,
    pub otp: String,
}

impl DeletionPayload {
    /// Build the body for `method`, blanking the credential it does not use.
    pub fn new(mobile: &str, method: VerificationMethod, otp: &str, password: &str) -> Self {
        let (password, otp) = match method {
            VerificationMethod::Otp => (String::new(), otp.to_string()),
            VerificationMethod::Password => (password.to_string(), String::new()),
        };
        Self {
            mobile: mobile.to_string(),
            password,
            otp,
        }
    }
}

// Credentials stay out of logs.
impl std::fmt::Debug for DeletionPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeletionPayload")
            .field("mobile", &crate::validation::mask_mobile(&self.mobile))
            .field("password", &"<redacted>")
            .field("otp", &"<redacted>")
            .finish()
    }
}
