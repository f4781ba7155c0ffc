//! Form state for the delete-account wizard.
//!
//! [`DeletionRequest`] holds everything the page knows and is only
//! changed through its methods, so the wizard rules live here rather
//! than in the view:
//!
//! ```text
//! CollectMobile ──begin_verification──▶ (loading) ──finish_verification(Ok)──▶ CollectVerification
//!       ▲                                                                           │
//!       └──────────────────────────────── back ─────────────────────────────────────┤
//!                                                                                   │
//!                                   begin_deletion ─▶ (loading) ─ finish_deletion(Ok) ─▶ completed
//! ```

use crate::error::{AccountError, AccountResult, Stage};
use crate::types::{DeletionPayload, Step, VerificationMethod, VerificationPayload};
use crate::validation::{mask_mobile, sanitize_mobile, sanitize_otp, validate_mobile, validate_otp};

/// In-memory state of one delete-account page view.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct DeletionRequest {
    mobile: String,
    method: VerificationMethod,
    otp: String,
    password: String,
    step: Step,
    loading: bool,
    error: Option<String>,
    completed: bool,
}

impl DeletionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn mobile(&self) -> &str {
        &self.mobile
    }

    pub fn method(&self) -> VerificationMethod {
        self.method
    }

    pub fn otp(&self) -> &str {
        &self.otp
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// Mobile keystroke. Clears the banner; an edit with too many
    /// digits is ignored entirely.
    pub fn set_mobile(&mut self, raw: &str) {
        if let Some(mobile) = sanitize_mobile(raw) {
            self.mobile = mobile;
            self.error = None;
        }
    }

    /// OTP keystroke. Same rules as [`Self::set_mobile`].
    pub fn set_otp(&mut self, raw: &str) {
        if let Some(otp) = sanitize_otp(raw) {
            self.otp = otp;
            self.error = None;
        }
    }

    pub fn set_password(&mut self, password: &str) {
        self.password = password.to_string();
    }

    pub fn select_method(&mut self, method: VerificationMethod) {
        self.method = method;
    }

    /// "Back" from step 2. Entered values are kept.
    pub fn back(&mut self) {
        if !self.loading && !self.completed && self.step == Step::CollectVerification {
            self.step = Step::CollectMobile;
        }
    }

    // -------------------------------------------------------------------------
    // Verification request (step 1)
    // -------------------------------------------------------------------------

    /// Validate step 1 and enter the loading state.
    ///
    /// Returns the body to send, or `None` when nothing should be sent:
    /// invalid input (the banner is set), a call already in flight, or a
    /// form that is not on step 1.
    pub fn begin_verification(&mut self) -> Option<VerificationPayload> {
        if self.loading || self.completed || self.step != Step::CollectMobile {
            return None;
        }
        if let Err(err) = validate_mobile(&self.mobile) {
            self.fail(AccountError::from(err), Stage::Verification);
            return None;
        }
        self.start_loading();
        Some(VerificationPayload {
            mobile: self.mobile.clone(),
        })
    }

    /// Apply the outcome of the verification request.
    pub fn finish_verification(&mut self, outcome: AccountResult<()>) {
        self.loading = false;
        match outcome {
            Ok(()) => self.step = Step::CollectVerification,
            Err(err) => self.fail(err, Stage::Verification),
        }
    }

    // -------------------------------------------------------------------------
    // Deletion confirmation (step 2)
    // -------------------------------------------------------------------------

    /// Validate step 2, ask for confirmation, and enter the loading state.
    ///
    /// `confirm` receives the warning text and returns the user's answer;
    /// it is only asked once the input is valid. Returns `None` when
    /// nothing should be sent.
    pub fn begin_deletion(&mut self, confirm: impl FnOnce(&str) -> bool) -> Option<DeletionPayload> {
        if self.loading || self.completed || self.step != Step::CollectVerification {
            return None;
        }
        if self.method == VerificationMethod::Otp {
            if let Err(err) = validate_otp(&self.otp) {
                self.fail(AccountError::from(err), Stage::Deletion);
                return None;
            }
        }
        if !confirm(DELETE_CONFIRMATION) {
            log::info!("Account deletion cancelled at confirmation");
            return None;
        }
        self.start_loading();
        Some(DeletionPayload::new(&self.mobile, self.method, &self.otp, &self.password))
    }

    /// Apply the outcome of the deletion call.
    pub fn finish_deletion(&mut self, outcome: AccountResult<()>) {
        self.loading = false;
        match outcome {
            Ok(()) => self.completed = true,
            Err(err) => self.fail(err, Stage::Deletion),
        }
    }

    fn start_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    fn fail(&mut self, err: AccountError, stage: Stage) {
        log::warn!("{:?} stage failed: {}", stage, err);
        self.error = Some(err.banner(stage));
    }
}

// Credentials stay out of logs.
impl std::fmt::Debug for DeletionRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeletionRequest")
            .field("mobile", &mask_mobile(&self.mobile))
            .field("method", &self.method)
            .field("otp", &"<redacted>")
            .field("password", &"<redacted>")
            .field("step", &self.step)
            .field("loading", &self.loading)
            .field("error", &self.error)
            .field("completed", &self.completed)
            .finish()
    }
}

/// Text of the blocking yes/no prompt before deletion.
pub const DELETE_CONFIRMATION: &str = "Are you absolutely sure? This action cannot be undone \
and all your data will be permanently deleted.";
