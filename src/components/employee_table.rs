//! Employee Table Component
//!
//! Dashboard: lists cached employees with add, edit, delete and logout.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{DeleteConfirmDialog, EmployeeForm, Modal};
use crate::context::use_app_context;
use crate::models::Employee;
use crate::operations;
use crate::store::{use_employee_store, EmployeeStateStoreFields};

#[component]
pub fn EmployeeTable() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_employee_store();

    let (form_open, set_form_open) = signal(false);
    let (editing, set_editing) = signal::<Option<Employee>>(None);
    let (pending_delete, set_pending_delete) = signal::<Option<Employee>>(None);

    // Load on mount
    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            operations::fetch_employees(&api, &store, &ctx.notifier).await;
        });
    });

    let open_form = move |employee: Option<Employee>| {
        set_editing.set(employee);
        set_form_open.set(true);
    };
    let close_form = Callback::new(move |_: ()| set_form_open.set(false));

    let confirm_delete = Callback::new(move |_: ()| {
        let Some(employee) = pending_delete.get_untracked() else { return };
        let api = ctx.api();
        spawn_local(async move {
            operations::delete_employee(&api, &store, &ctx.notifier, employee.id).await;
            set_pending_delete.set(None);
        });
    });
    let cancel_delete = Callback::new(move |_: ()| set_pending_delete.set(None));

    view! {
        <div class="employee-dashboard">
            <div class="toolbar">
                <button class="add-btn" on:click=move |_| open_form(None)>
                    "Add New Employee"
                </button>
                <span class="session-user">
                    {move || ctx.session.current_email().unwrap_or_default()}
                </span>
                <button class="logout-btn" on:click=move |_| ctx.log_out()>
                    "Logout"
                </button>
            </div>

            {move || form_open.get().then(|| {
                let employee = editing.get_untracked();
                view! {
                    <Modal on_close=close_form>
                        <EmployeeForm employee=employee on_close=close_form />
                    </Modal>
                }
            })}

            {move || pending_delete.get().map(|employee| view! {
                <DeleteConfirmDialog
                    name=employee.name
                    on_confirm=confirm_delete
                    on_cancel=cancel_delete
                />
            })}

            <Show
                when=move || !store.loading().get()
                fallback=|| view! { <div class="loading">"Loading..."</div> }
            >
                <table class="employee-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Employee ID"</th>
                            <th>"Mobile"</th>
                            <th>"Job Role"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || store.employees().get()
                            key=|employee| employee.clone()
                            children=move |employee| {
                                let for_edit = employee.clone();
                                let for_delete = employee.clone();
                                view! {
                                    <tr>
                                        <td>{employee.name}</td>
                                        <td>{employee.email}</td>
                                        <td>{employee.employee_id}</td>
                                        <td>{employee.mobile}</td>
                                        <td>{employee.job_role.as_str()}</td>
                                        <td class="row-actions">
                                            <button
                                                class="edit-btn"
                                                title="Edit"
                                                on:click=move |_| open_form(Some(for_edit.clone()))
                                            >
                                                "✎"
                                            </button>
                                            <button
                                                class="delete-btn"
                                                title="Delete"
                                                on:click=move |_| set_pending_delete.set(Some(for_delete.clone()))
                                            >
                                                "🗑"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
