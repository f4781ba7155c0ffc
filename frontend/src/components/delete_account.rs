//! Delete-account wizard.
//!
//! Step 1 collects the mobile number and the verification method and
//! asks the server to start verification. Step 2 collects the OTP or
//! password and deletes the account after a confirmation prompt.

use leptos::*;
use leptos_meta::Title;

use crate::components::SuccessPage;
use crate::config::{APP_NAME, MOBILE_PREFIX, OTP_DIGITS};
use crate::services::{confirm_deletion, request_verification, HttpAccountClient};
use crate::state::DeletionRequest;
use crate::types::{Step, VerificationMethod};

/// Blocking browser confirm dialog. Anything but an explicit "OK" is a no.
fn ask_confirmation(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[component]
pub fn DeleteAccount() -> impl IntoView {
    let form = create_rw_signal(DeletionRequest::new());

    view! {
        <Title text=format!("Delete Account | {}", APP_NAME)/>
        <Show
            when=move || form.with(DeletionRequest::is_completed)
            fallback=move || view! { <DeletionForm form=form/> }
        >
            <SuccessPage/>
        </Show>
    }
}

#[component]
fn DeletionForm(form: RwSignal<DeletionRequest>) -> impl IntoView {
    let client = HttpAccountClient::default();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let client = client.clone();
        match form.with_untracked(DeletionRequest::step) {
            Step::CollectMobile => spawn_local(async move {
                request_verification(&client, &form).await;
            }),
            Step::CollectVerification => spawn_local(async move {
                confirm_deletion(&client, &form, ask_confirmation).await;
            }),
        }
    };

    let loading = move || form.with(DeletionRequest::is_loading);
    let on_step = move |step: Step| form.with(|f| f.step() == step);
    let uses_otp = move || form.with(|f| f.method() == VerificationMethod::Otp);

    view! {
        <div class="delete-account-container">
            <div class="delete-account-card">
                <h1 class="delete-account-title">"Delete Account"</h1>
                <p class="delete-account-subtitle">"We're sorry to see you go"</p>

                <div class="delete-account-warning">
                    <span>
                        "We will permanently remove your data, history, and profile. "
                        "This cannot be reversed."
                    </span>
                </div>

                {move || form.with(|f| {
                    f.error().map(|message| {
                        let message = message.to_string();
                        view! { <div class="error-message">{message}</div> }
                    })
                })}

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="mobile">"Indian Mobile Number"</label>
                        <div class="input-with-prefix">
                            <span class="prefix">{MOBILE_PREFIX}</span>
                            <input
                                id="mobile"
                                type="tel"
                                placeholder="10-digit number"
                                prop:value=move || form.with(|f| f.mobile().to_string())
                                on:input=move |ev| form.update(|f| f.set_mobile(&event_target_value(&ev)))
                                disabled=move || on_step(Step::CollectVerification) || loading()
                                required
                            />
                        </div>
                    </div>

                    <Show when=move || on_step(Step::CollectMobile) fallback=|| view! { }>
                        <div class="verification-options">
                            <label class="main-label">"Verify using"</label>
                            <div class="radio-group">
                                <MethodOption form=form method=VerificationMethod::Otp label="OTP"/>
                                <MethodOption form=form method=VerificationMethod::Password label="Password"/>
                            </div>
                            <button type="submit" class="btn-primary" disabled=loading>
                                {move || form.with(|f| {
                                    if f.is_loading() { "Processing..." } else { f.method().request_label() }
                                })}
                            </button>
                        </div>
                    </Show>

                    <Show when=move || on_step(Step::CollectVerification) fallback=|| view! { }>
                        <div class="verification-input-area">
                            <Show when=uses_otp fallback=move || view! { <PasswordField form=form/> }>
                                <div class="form-group">
                                    <label for="otp">"Enter 4-Digit OTP"</label>
                                    <input
                                        id="otp"
                                        type="text"
                                        inputmode="numeric"
                                        placeholder="0 0 0 0"
                                        maxlength=OTP_DIGITS.to_string()
                                        class="otp-input"
                                        prop:value=move || form.with(|f| f.otp().to_string())
                                        on:input=move |ev| form.update(|f| f.set_otp(&event_target_value(&ev)))
                                        disabled=loading
                                        required
                                    />
                                </div>
                            </Show>

                            <div class="button-group">
                                <button
                                    type="button"
                                    class="btn-secondary"
                                    on:click=move |_| form.update(DeletionRequest::back)
                                    disabled=loading
                                >
                                    "Back"
                                </button>
                                <button type="submit" class="btn-danger" disabled=loading>
                                    {move || if loading() { "Deleting..." } else { "Delete My Account" }}
                                </button>
                            </div>
                        </div>
                    </Show>
                </form>
            </div>
        </div>
    }
}

/// One radio choice of verification method.
#[component]
fn MethodOption(
    form: RwSignal<DeletionRequest>,
    method: VerificationMethod,
    label: &'static str,
) -> impl IntoView {
    let selected = move || form.with(|f| f.method() == method);

    view! {
        <label class:active=selected>
            <input
                type="radio"
                name="verification-method"
                value=method.as_str()
                prop:checked=selected
                on:change=move |_| form.update(|f| f.select_method(method))
            />
            {label}
        </label>
    }
}

#[component]
fn PasswordField(form: RwSignal<DeletionRequest>) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for="password">"Enter Your Password"</label>
            <input
                id="password"
                type="password"
                placeholder="••••••••"
                prop:value=move || form.with(|f| f.password().to_string())
                on:input=move |ev| form.update(|f| f.set_password(&event_target_value(&ev)))
                disabled=move || form.with(DeletionRequest::is_loading)
                required
            />
        </div>
    }
}
