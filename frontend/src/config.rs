//! Application configuration.
//!
//! Centralized configuration for the account deletion page.
//! Values are compile-time constants; the endpoint can be pointed
//! elsewhere at build time with `SABJIFAL_API_URL`.

/// Account deletion endpoint.
///
/// Both the verification request and the deletion confirmation are
/// posted here; the payload shape tells them apart.
pub const API_URL: &str = match option_env!("SABJIFAL_API_URL") {
    Some(url) => url,
    None => "https://api.sabjifal.com/user/delete-account-by-number",
};

/// Application name, used for the page title.
pub const APP_NAME: &str = "Sabjifal";

/// Country calling code shown in front of the mobile input.
pub const MOBILE_PREFIX: &str = "+91";

/// Digits in an Indian mobile number.
pub const MOBILE_DIGITS: usize = 10;

/// Digits in a deletion OTP.
pub const OTP_DIGITS: usize = 4;

/// Path of the deletion form.
pub const DELETE_ACCOUNT_PATH: &str = "/delete-account";
