//! The two wizard calls.
//!
//! Each call validates and marks the form as loading, awaits the
//! endpoint, then writes the outcome back. The form is reached through
//! [`FormCell`] so the same code runs against a Leptos signal in the
//! page and a plain `RefCell` in tests.

use std::cell::RefCell;

use leptos::{RwSignal, SignalUpdate};

use crate::services::account::{submit, AccountClient};
use crate::state::DeletionRequest;
use crate::validation::mask_mobile;

/// Somewhere a [`DeletionRequest`] can be updated in place.
pub trait FormCell {
    /// Run `f` on the form. `None` when the form no longer exists
    /// (the page was left while a call was in flight).
    fn with_form<R>(&self, f: impl FnOnce(&mut DeletionRequest) -> R) -> Option<R>;
}

impl FormCell for RwSignal<DeletionRequest> {
    fn with_form<R>(&self, f: impl FnOnce(&mut DeletionRequest) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl FormCell for RefCell<DeletionRequest> {
    fn with_form<R>(&self, f: impl FnOnce(&mut DeletionRequest) -> R) -> Option<R> {
        Some(f(&mut *self.borrow_mut()))
    }
}

/// Step 1: ask the server to start verification for the entered mobile.
///
/// Invalid input sets the banner and makes no request.
pub async fn request_verification<C, F>(client: &C, form: &F)
where
    C: AccountClient,
    F: FormCell,
{
    let Some(payload) = form.with_form(DeletionRequest::begin_verification).flatten() else {
        return;
    };

    log::info!("Requesting verification for {}", mask_mobile(&payload.mobile));
    let outcome = submit(client, &payload).await;
    if outcome.is_ok() {
        log::info!("Verification accepted");
    }

    if form.with_form(|f| f.finish_verification(outcome)).is_none() {
        log::debug!("Form dropped before verification reply");
    }
}

/// Step 2: delete the account once the user confirms.
///
/// `confirm` shows the warning and returns the user's answer.
pub async fn confirm_deletion<C, F>(client: &C, form: &F, confirm: impl FnOnce(&str) -> bool)
where
    C: AccountClient,
    F: FormCell,
{
    let Some(payload) = form.with_form(|f| f.begin_deletion(confirm)).flatten() else {
        return;
    };

    log::info!("Deleting account {}", mask_mobile(&payload.mobile));
    let outcome = submit(client, &payload).await;
    if outcome.is_ok() {
        log::info!("Account deleted");
    }

    if form.with_form(|f| f.finish_deletion(outcome)).is_none() {
        log::debug!("Form dropped before deletion reply");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AccountError, AccountResult};
    use crate::types::{Step, VerificationMethod};
    use futures::executor::block_on;
    use serde::Serialize;
    use serde_json::{json, Value};

    /// Replies with a fixed outcome and records every body it was sent.
    struct FakeClient {
        reply: AccountResult<Value>,
        sent: RefCell<Vec<Value>>,
    }

    impl FakeClient {
        fn replying(reply: Value) -> Self {
            Self { reply: Ok(reply), sent: RefCell::new(Vec::new()) }
        }

        fn offline() -> Self {
            Self {
                reply: Err(AccountError::Network("connection refused".into())),
                sent: RefCell::new(Vec::new()),
            }
        }

        fn sent(&self) -> Vec<Value> {
            self.sent.borrow().clone()
        }
    }

    impl AccountClient for FakeClient {
        async fn post<B: Serialize>(&self, body: &B) -> AccountResult<Value> {
            self.sent.borrow_mut().push(serde_json::to_value(body).unwrap());
            self.reply.clone()
        }
    }

    fn form_with_mobile(mobile: &str) -> RefCell<DeletionRequest> {
        let mut form = DeletionRequest::new();
        form.set_mobile(mobile);
        RefCell::new(form)
    }

    fn form_on_step_two(method: VerificationMethod) -> RefCell<DeletionRequest> {
        let form = form_with_mobile("9876543210");
        form.borrow_mut().select_method(method);
        block_on(request_verification(&FakeClient::replying(json!(true)), &form));
        assert_eq!(form.borrow().step(), Step::CollectVerification);
        form
    }

    #[test]
    fn test_invalid_mobile_makes_no_request() {
        for mobile in ["", "12345", "5876543210", "987654321"] {
            let client = FakeClient::replying(json!(true));
            let form = form_with_mobile(mobile);

            block_on(request_verification(&client, &form));

            assert!(client.sent().is_empty(), "{mobile}");
            let form = form.borrow();
            assert_eq!(form.error(), Some("Please enter a valid 10-digit Indian mobile number"));
            assert_eq!(form.step(), Step::CollectMobile);
        }
    }

    #[test]
    fn test_verification_true_advances() {
        let client = FakeClient::replying(json!(true));
        let form = form_with_mobile("9876543210");

        block_on(request_verification(&client, &form));

        assert_eq!(client.sent(), vec![json!({"mobile": "9876543210"})]);
        let form = form.borrow();
        assert_eq!(form.step(), Step::CollectVerification);
        assert!(!form.is_loading());
        assert!(form.error().is_none());
    }

    #[test]
    fn test_verification_rejection_shows_message() {
        let client = FakeClient::replying(json!({"success": false, "message": "x"}));
        let form = form_with_mobile("9876543210");

        block_on(request_verification(&client, &form));

        let form = form.borrow();
        assert_eq!(form.step(), Step::CollectMobile);
        assert_eq!(form.error(), Some("x"));
    }

    #[test]
    fn test_verification_rejection_without_message_uses_fallback() {
        let client = FakeClient::replying(json!({"status": false}));
        let form = form_with_mobile("9876543210");

        block_on(request_verification(&client, &form));

        assert_eq!(
            form.borrow().error(),
            Some("Verification failed. Please check your mobile number.")
        );
    }

    #[test]
    fn test_verification_network_failure() {
        let client = FakeClient::offline();
        let form = form_with_mobile("9876543210");
        form.borrow_mut().select_method(VerificationMethod::Password);

        block_on(request_verification(&client, &form));

        let form = form.borrow();
        assert_eq!(form.error(), Some("Connection error. Please try again later."));
        assert!(!form.is_loading());
        assert_eq!(form.step(), Step::CollectMobile);
        assert_eq!(form.mobile(), "9876543210");
        assert_eq!(form.method(), VerificationMethod::Password);
    }

    #[test]
    fn test_password_deletion_sends_empty_otp() {
        let form = form_on_step_two(VerificationMethod::Password);
        form.borrow_mut().set_otp("1234");
        form.borrow_mut().set_password("hunter2");
        let client = FakeClient::replying(json!({"status": true}));

        block_on(confirm_deletion(&client, &form, |_| true));

        assert_eq!(
            client.sent(),
            vec![json!({"mobile": "9876543210", "password": "hunter2", "otp": ""})]
        );
        assert!(form.borrow().is_completed());
    }

    #[test]
    fn test_otp_deletion_sends_empty_password() {
        let form = form_on_step_two(VerificationMethod::Otp);
        form.borrow_mut().set_password("hunter2");
        form.borrow_mut().set_otp("4321");
        let client = FakeClient::replying(json!(true));

        block_on(confirm_deletion(&client, &form, |_| true));

        assert_eq!(
            client.sent(),
            vec![json!({"mobile": "9876543210", "password": "", "otp": "4321"})]
        );
        assert!(form.borrow().is_completed());
    }

    #[test]
    fn test_short_otp_makes_no_request() {
        let form = form_on_step_two(VerificationMethod::Otp);
        form.borrow_mut().set_otp("12a");
        let client = FakeClient::replying(json!(true));

        block_on(confirm_deletion(&client, &form, |_| true));

        assert!(client.sent().is_empty());
        assert_eq!(form.borrow().error(), Some("Please enter a 4-digit OTP"));
    }

    #[test]
    fn test_declined_confirmation_makes_no_request() {
        let form = form_on_step_two(VerificationMethod::Otp);
        form.borrow_mut().set_otp("1234");
        let client = FakeClient::replying(json!(true));

        block_on(confirm_deletion(&client, &form, |_| false));

        assert!(client.sent().is_empty());
        assert!(!form.borrow().is_completed());
    }

    #[test]
    fn test_deletion_rejection_uses_fallback() {
        let form = form_on_step_two(VerificationMethod::Otp);
        form.borrow_mut().set_otp("0000");
        let client = FakeClient::replying(json!({"success": false}));

        block_on(confirm_deletion(&client, &form, |_| true));

        let form = form.borrow();
        assert!(!form.is_completed());
        assert_eq!(form.error(), Some("Deletion failed. Incorrect OTP or Password."));
    }

    #[test]
    fn test_deletion_network_failure_keeps_state() {
        let form = form_on_step_two(VerificationMethod::Otp);
        form.borrow_mut().set_otp("1234");
        let client = FakeClient::offline();

        block_on(confirm_deletion(&client, &form, |_| true));

        let form = form.borrow();
        assert_eq!(form.error(), Some("Connection error. Please try again."));
        assert!(!form.is_loading());
        assert!(!form.is_completed());
        assert_eq!(form.step(), Step::CollectVerification);
        assert_eq!(form.otp(), "1234");
    }
}
