//! Modal Component
//!
//! Centered panel over a dimmed backdrop. Callers mount it only while open.

use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="modal-backdrop">
            <div class="modal-panel">
                <button type="button" class="modal-close" on:click=move |_| on_close.run(())>
                    "×"
                </button>
                {children()}
            </div>
        </div>
    }
}
