//! Input sanitization and validation.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::{MOBILE_DIGITS, OTP_DIGITS};
use crate::error::ValidationError;

/// Indian mobile numbers: ten ASCII digits, first one 6-9.
/// `\d` would also accept other Unicode digits.
static INDIAN_MOBILE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[6-9][0-9]{9}$").expect("mobile pattern is valid")
});

/// Keep ASCII digits only. `None` when more than `max` digits remain;
/// the edit is then refused rather than cut short.
pub fn sanitize_digits(raw: &str, max: usize) -> Option<String> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    (digits.len() <= max).then_some(digits)
}

/// Sanitize a keystroke in the mobile input.
pub fn sanitize_mobile(raw: &str) -> Option<String> {
    sanitize_digits(raw, MOBILE_DIGITS)
}

/// Sanitize a keystroke in the OTP input.
pub fn sanitize_otp(raw: &str) -> Option<String> {
    sanitize_digits(raw, OTP_DIGITS)
}

pub fn is_valid_indian_mobile(mobile: &str) -> bool {
    INDIAN_MOBILE.is_match(mobile)
}

pub fn validate_mobile(mobile: &str) -> Result<(), ValidationError> {
    if is_valid_indian_mobile(mobile) {
        Ok(())
    } else {
        Err(ValidationError::InvalidMobile)
    }
}

pub fn validate_otp(otp: &str) -> Result<(), ValidationError> {
    if otp.len() == OTP_DIGITS && otp.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidOtp)
    }
}

/// Mobile number safe for logs: `******3210`.
pub fn mask_mobile(mobile: &str) -> String {
    let keep = mobile.len().saturating_sub(4);
    mobile
        .chars()
        .enumerate()
        .map(|(i, c)| if i < keep { '*' } else { c })
        .collect()
}
