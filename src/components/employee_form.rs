//! Employee Form Component
//!
//! Add/edit form. Validates locally before anything is sent.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::FormField;
use crate::context::use_app_context;
use crate::models::{Employee, JobRole};
use crate::operations::{self, SubmitOutcome};
use crate::store::use_employee_store;
use crate::validation::{EmployeeFormInput, Field, FieldError};

/// Form for creating a new employee (`employee == None`) or editing one
#[component]
pub fn EmployeeForm(
    employee: Option<Employee>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_employee_store();

    let editing = employee.as_ref().map(|e| e.id);
    let initial = employee
        .as_ref()
        .map(EmployeeFormInput::from)
        .unwrap_or_default();

    let name = RwSignal::new(initial.name);
    let email = RwSignal::new(initial.email);
    let employee_id = RwSignal::new(initial.employee_id);
    let mobile = RwSignal::new(initial.mobile);
    let job_role = RwSignal::new(initial.job_role);
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let (submitting, set_submitting) = signal(false);

    let reset = move || {
        name.set(String::new());
        email.set(String::new());
        employee_id.set(String::new());
        mobile.set(String::new());
        job_role.set(String::new());
        errors.set(Vec::new());
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let input = EmployeeFormInput {
            name: name.get_untracked(),
            email: email.get_untracked(),
            employee_id: employee_id.get_untracked(),
            mobile: mobile.get_untracked(),
            job_role: job_role.get_untracked(),
        };
        set_submitting.set(true);

        let api = ctx.api();
        spawn_local(async move {
            let outcome = operations::submit_employee(
                &api,
                &store,
                &ctx.notifier,
                editing,
                &input,
                ctx.submit_failure,
            )
            .await;
            set_submitting.set(false);

            match outcome {
                SubmitOutcome::Invalid(field_errors) => errors.set(field_errors),
                SubmitOutcome::Saved(_) | SubmitOutcome::Failed { close_form: true } => {
                    reset();
                    on_close.run(());
                }
                SubmitOutcome::Failed { close_form: false } => errors.set(Vec::new()),
            }
        });
    };

    let error_for = move |field: Field| {
        Signal::derive(move || {
            errors.with(|errs| errs.iter().find(|e| e.field == field).map(|e| e.message.clone()))
        })
    };
    let role_error = error_for(Field::JobRole);

    let is_edit = editing.is_some();

    view! {
        <form class="employee-form" on:submit=on_submit>
            <h2>{if is_edit { "Edit Employee" } else { "Add Employee" }}</h2>
            <FormField label="Name" value=name error=error_for(Field::Name) />
            <FormField label="Email" input_type="email" value=email error=error_for(Field::Email) />
            <FormField label="Employee ID" value=employee_id error=error_for(Field::EmployeeId) />
            <FormField label="Mobile" value=mobile error=error_for(Field::Mobile) />

            <div class="form-field">
                <label>"Job Role"</label>
                <select
                    prop:value=move || job_role.get()
                    on:change=move |ev| job_role.set(event_target_value(&ev))
                >
                    <option value="">"Select Role"</option>
                    {JobRole::ALL
                        .iter()
                        .map(|role| {
                            let value = role.as_str();
                            view! {
                                <option value=value selected={job_role.get_untracked() == value}>
                                    {value}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                {move || role_error.get().map(|msg| view! { <div class="field-error">{msg}</div> })}
            </div>

            <button type="submit" class="submit-btn" disabled=move || submitting.get()>
                {if is_edit { "Update Employee" } else { "Add Employee" }}
            </button>
        </form>
    }
}
