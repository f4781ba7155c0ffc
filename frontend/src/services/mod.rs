//! Backend services.
//!
//! # Services
//!
//! - [`account`] - HTTP client for the account deletion endpoint
//! - [`wizard`] - the two wizard calls, run against a form held in a
//!   reactive signal (or any other [`FormCell`])

pub mod account;
pub mod wizard;

pub use account::*;
pub use wizard::*;
