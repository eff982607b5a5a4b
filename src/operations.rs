//! Store Operations
//!
//! Async flows that call the API and feed the outcome into the store and the
//! notification queue. The cache is only touched after the server answers.

use crate::api::EmployeeApi;
use crate::config::SubmitFailurePolicy;
use crate::models::{Employee, User};
use crate::notify::{NotificationLevel, Notify};
use crate::session::{Session, SessionBackend};
use crate::store::{Dispatch, EmployeeAction};
use crate::validation::{validate, EmployeeFormInput, FieldError};

pub const MSG_NO_DATA: &str = "No employee data available";
pub const MSG_FETCH_FAILED: &str = "Error fetching employees";
pub const MSG_ADDED: &str = "Employee added successfully!";
pub const MSG_UPDATED: &str = "Employee updated successfully!";
pub const MSG_SAVE_FAILED: &str = "Failed to add/update employee. Please try again.";
pub const MSG_DELETED: &str = "Employee deleted";
pub const MSG_DELETE_FAILED: &str = "Error deleting employee";
pub const MSG_LOGIN_OK: &str = "Login successful";
pub const MSG_BAD_CREDENTIALS: &str = "Invalid email or password";
pub const MSG_LOGIN_FAILED: &str = "Login failed";

/// Load the collection into the store
pub async fn fetch_employees<A, D, N>(api: &A, store: &D, notifier: &N)
where
    A: EmployeeApi + ?Sized,
    D: Dispatch,
    N: Notify,
{
    store.dispatch(EmployeeAction::FetchPending);
    match api.list_employees().await {
        Ok(employees) => {
            let empty = employees.is_empty();
            store.dispatch(EmployeeAction::FetchFulfilled(employees));
            if empty {
                notifier.notify(NotificationLevel::Info, MSG_NO_DATA.to_string());
            }
        }
        Err(err) => {
            log::error!("Fetching employees failed: {}", err);
            store.dispatch(EmployeeAction::FetchRejected(err.to_string()));
            notifier.notify(NotificationLevel::Error, MSG_FETCH_FAILED.to_string());
        }
    }
}

/// Result of submitting the employee form
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent
    Invalid(Vec<FieldError>),
    /// Server accepted the record; the form should reset and close
    Saved(Employee),
    /// Server rejected or was unreachable
    Failed { close_form: bool },
}

/// Validate and create (`editing == None`) or fully replace the record `editing`
pub async fn submit_employee<A, D, N>(
    api: &A,
    store: &D,
    notifier: &N,
    editing: Option<u32>,
    input: &EmployeeFormInput,
    policy: SubmitFailurePolicy,
) -> SubmitOutcome
where
    A: EmployeeApi + ?Sized,
    D: Dispatch,
    N: Notify,
{
    let draft = match validate(input) {
        Ok(draft) => draft,
        Err(errors) => {
            log::debug!("Employee form rejected: {} field error(s)", errors.len());
            return SubmitOutcome::Invalid(errors);
        }
    };

    let result = match editing {
        Some(id) => api
            .update_employee(&draft.with_id(id))
            .await
            .map(|saved| (EmployeeAction::Updated(saved.clone()), saved, MSG_UPDATED)),
        None => api
            .create_employee(&draft)
            .await
            .map(|saved| (EmployeeAction::Created(saved.clone()), saved, MSG_ADDED)),
    };

    match result {
        Ok((action, saved, message)) => {
            store.dispatch(action);
            notifier.notify(NotificationLevel::Success, message.to_string());
            SubmitOutcome::Saved(saved)
        }
        Err(err) => {
            log::error!("Saving employee failed: {}", err);
            match policy {
                SubmitFailurePolicy::DiscardAndClose => {
                    notifier.notify(NotificationLevel::Error, MSG_SAVE_FAILED.to_string());
                    SubmitOutcome::Failed { close_form: true }
                }
                SubmitFailurePolicy::KeepOpen => {
                    notifier.notify(NotificationLevel::Error, format!("{} ({})", MSG_SAVE_FAILED, err));
                    SubmitOutcome::Failed { close_form: false }
                }
            }
        }
    }
}

/// Delete on the server, then drop from the cache. Returns whether it succeeded.
pub async fn delete_employee<A, D, N>(api: &A, store: &D, notifier: &N, id: u32) -> bool
where
    A: EmployeeApi + ?Sized,
    D: Dispatch,
    N: Notify,
{
    match api.delete_employee(id).await {
        Ok(deleted) => {
            store.dispatch(EmployeeAction::Deleted(deleted));
            notifier.notify(NotificationLevel::Success, MSG_DELETED.to_string());
            true
        }
        Err(err) => {
            log::error!("Deleting employee #{} failed: {}", id, err);
            notifier.notify(NotificationLevel::Error, MSG_DELETE_FAILED.to_string());
            false
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    Authenticated(User),
    InvalidCredentials,
    Failed,
}

/// Check credentials and start a session on a match
pub async fn log_in<A, B, N>(
    api: &A,
    session: &Session<B>,
    notifier: &N,
    email: &str,
    password: &str,
) -> LoginOutcome
where
    A: EmployeeApi + ?Sized,
    B: SessionBackend,
    N: Notify,
{
    match api.find_user_by_credentials(email, password).await {
        Ok(Some(user)) => {
            session.log_in(&user);
            notifier.notify(NotificationLevel::Success, MSG_LOGIN_OK.to_string());
            LoginOutcome::Authenticated(user)
        }
        Ok(None) => {
            log::info!("Login rejected for {}", email);
            notifier.notify(NotificationLevel::Error, MSG_BAD_CREDENTIALS.to_string());
            LoginOutcome::InvalidCredentials
        }
        Err(err) => {
            log::error!("Login request failed: {}", err);
            notifier.notify(NotificationLevel::Error, MSG_LOGIN_FAILED.to_string());
            LoginOutcome::Failed
        }
    }
}
