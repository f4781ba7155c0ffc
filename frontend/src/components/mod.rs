//! UI Components for the account deletion page.
//!
//! # Page Components
//! - [`Welcome`] - Placeholder for the root path
//! - [`DeleteAccount`] - Two-step deletion wizard
//! - [`SuccessPage`] - Shown once the account is gone

mod welcome;
mod delete_account;
mod success;

pub use welcome::*;
pub use delete_account::*;
pub use success::*;
