//! Toast Container
//!
//! Renders the notifier's queue; clicking a toast dismisses it.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ToastContainer() -> impl IntoView {
    let ctx = use_app_context();
    let notifier = ctx.notifier;

    view! {
        <div class="toast-container">
            <For
                each=move || notifier.notifications()
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    view! {
                        <div class=n.level.css_class() on:click=move |_| notifier.dismiss(id)>
                            {n.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
