//! Sabjifal - Account deletion page
//!
//! A WebAssembly frontend that lets a user delete their Sabjifal account
//! after proving ownership of the mobile number with an OTP or password.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App (Router)                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  /                 Welcome                                   │
//! │  /delete-account   DeleteAccount                             │
//! │                    ├── DeletionForm (step 1 / step 2)        │
//! │                    └── SuccessPage (once deleted)            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!        POST https://api.sabjifal.com/user/delete-account-by-number
//! ```
//!
//! # Modules
//!
//! - [`state`] - Wizard state and its transitions
//! - [`validation`] - Input sanitization and mobile/OTP checks
//! - [`types`] - Verification method, wizard step, request bodies
//! - [`error`] - Error taxonomy and banner texts
//! - [`components`] - UI components
//! - [`services`] - Endpoint client and the two wizard calls

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod error;
pub mod validation;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{DeletionPayload, Step, VerificationMethod, VerificationPayload};

// Errors
pub use error::{AccountError, AccountResult, Stage, ValidationError};

// State
pub use state::DeletionRequest;

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Root
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <div class="App">
                <Routes>
                    <Route path="/" view=Welcome/>
                    <Route path=DELETE_ACCOUNT_PATH view=DeleteAccount/>
                </Routes>
            </div>
        </Router>
    }
}
