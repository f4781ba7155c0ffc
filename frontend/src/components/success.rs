//! Confirmation shown after the account is deleted.

use leptos::*;

/// Full page load of `/`, so nothing of the deleted session survives.
fn return_home() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_href("/") {
        log::error!("Failed to navigate home: {:?}", e);
    }
}

#[component]
pub fn SuccessPage() -> impl IntoView {
    view! {
        <div class="success-page">
            <div class="success-content">
                <div class="success-icon-large">"✓"</div>
                <h1 class="success-title">"Account Successfully Deleted"</h1>
                <p class="success-text">
                    "We've processed your request. Your account and all associated data "
                    "have been permanently removed from Sabjifal."
                </p>
                <div class="success-info">
                    <p>
                        "Thank you for being with us. You can always create a new account "
                        "if you change your mind."
                    </p>
                </div>
                <button class="btn-primary success-btn" on:click=move |_| return_home()>
                    "Return to Homepage"
                </button>
            </div>
        </div>
    }
}
