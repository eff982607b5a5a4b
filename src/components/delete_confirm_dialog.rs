//! Delete Confirm Dialog
//!
//! Asks before deleting an employee, naming the record.

use leptos::prelude::*;

use crate::components::Modal;

#[component]
pub fn DeleteConfirmDialog(
    #[prop(into)] name: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal on_close=on_cancel>
            <div class="delete-confirm">
                <h2>"Confirm Deletion"</h2>
                <p>
                    "Are you sure you want to delete "
                    <span class="delete-confirm-name">{name}</span>
                    " record?"
                </p>
                <div class="delete-confirm-actions">
                    <button type="button" class="cancel-btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button type="button" class="confirm-btn" on:click=move |_| on_confirm.run(())>
                        "Confirm"
                    </button>
                </div>
            </div>
        </Modal>
    }
}
