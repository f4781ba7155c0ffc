//! Placeholder view for the root path.

use leptos::*;

use crate::config::APP_NAME;

#[component]
pub fn Welcome() -> impl IntoView {
    view! { <div class="welcome">{format!("Welcome to {}", APP_NAME)}</div> }
}
