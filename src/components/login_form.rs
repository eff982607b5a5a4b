//! Login Form Component
//!
//! Email/password gate in front of the dashboard.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::FormField;
use crate::context::{use_app_context, View};
use crate::operations::{self, LoginOutcome};

#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_app_context();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (submitting, set_submitting) = signal(false);
    let (missing, set_missing) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        if email_value.is_empty() || password_value.is_empty() {
            set_missing.set(true);
            return;
        }
        set_missing.set(false);
        set_submitting.set(true);

        let api = ctx.api();
        spawn_local(async move {
            let outcome = operations::log_in(
                &api,
                &ctx.session,
                &ctx.notifier,
                &email_value,
                &password_value,
            )
            .await;
            set_submitting.set(false);
            if let LoginOutcome::Authenticated(_) = outcome {
                password.set(String::new());
                ctx.navigate(View::Dashboard);
            }
        });
    };

    let required = move |value: RwSignal<String>, label: &'static str| {
        Signal::derive(move || {
            (missing.get() && value.get().is_empty()).then(|| format!("{} is required", label))
        })
    };

    view! {
        <form class="login-form" on:submit=on_submit>
            <h2>"Login"</h2>
            <FormField label="Email" input_type="email" value=email error=required(email, "Email") />
            <FormField label="Password" input_type="password" value=password error=required(password, "Password") />
            <button type="submit" disabled=move || submitting.get()>
                {move || if submitting.get() { "Signing in..." } else { "Login" }}
            </button>
        </form>
    }
}
