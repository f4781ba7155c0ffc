//! Error types for the account deletion flow.
//!
//! - [`ValidationError`] - input rejected before any request is made
//! - [`AccountError`] - anything that ends an attempt (validation,
//!   server rejection, network)
//!
//! Every error is recoverable: the form shows [`AccountError::banner`]
//! and lets the user submit again.

use thiserror::Error;

// =============================================================================
// Call stages
// =============================================================================

/// The two calls made against the deletion endpoint.
///
/// Each stage has its own fallback texts for the banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// `{mobile}` - asks the server to start verification.
    Verification,
    /// `{mobile, password, otp}` - deletes the account.
    Deletion,
}

impl Stage {
    /// Banner text when the server rejects without a message.
    pub fn fallback_message(self) -> &'static str {
        match self {
            Stage::Verification => "Verification failed. Please check your mobile number.",
            Stage::Deletion => "Deletion failed. Incorrect OTP or Password.",
        }
    }

    /// Banner text when the request or its reply could not be processed.
    pub fn connection_message(self) -> &'static str {
        match self {
            Stage::Verification => "Connection error. Please try again later.",
            Stage::Deletion => "Connection error. Please try again.",
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Local input errors. The message is shown to the user verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Mobile number does not match `^[6-9]\d{9}$`.
    #[error("Please enter a valid 10-digit Indian mobile number")]
    InvalidMobile,

    /// OTP is not exactly four digits.
    #[error("Please enter a 4-digit OTP")]
    InvalidOtp,
}

// =============================================================================
// Account Errors (top-level)
// =============================================================================

/// Why an attempt at either stage failed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AccountError {
    /// Input never left the browser.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Server answered with something other than success.
    #[error("Rejected by server: {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { message: Option<String> },

    /// Request failed or the reply was not usable JSON.
    #[error("Network error: {0}")]
    Network(String),
}

impl AccountError {
    /// Text for the inline error banner.
    pub fn banner(&self, stage: Stage) -> String {
        match self {
            AccountError::Validation(err) => err.to_string(),
            AccountError::Rejected { message: Some(message) } => message.clone(),
            AccountError::Rejected { message: None } => stage.fallback_message().to_string(),
            AccountError::Network(_) => stage.connection_message().to_string(),
        }
    }
}

impl From<gloo_net::Error> for AccountError {
    fn from(err: gloo_net::Error) -> Self {
        AccountError::Network(err.to_string())
    }
}

/// Result type for account operations.
pub type AccountResult<T> = Result<T, AccountError>;
