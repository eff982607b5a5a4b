//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_dialog;
mod employee_form;
mod employee_table;
mod form_field;
mod login_form;
mod modal;
mod toast_container;

pub use delete_confirm_dialog::DeleteConfirmDialog;
pub use employee_form::EmployeeForm;
pub use employee_table::EmployeeTable;
pub use form_field::FormField;
pub use login_form::LoginForm;
pub use modal::Modal;
pub use toast_container::ToastContainer;
