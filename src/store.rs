//! Employee State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All changes go
//! through [`EmployeeState::reduce`], a pure `(state, action) -> state` step.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Employee;

pub const DEFAULT_FETCH_ERROR: &str = "Failed to fetch employees";

/// Cached employee collection plus fetch status
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct EmployeeState {
    /// Server order after a fetch, then patched by create/update/delete
    pub employees: Vec<Employee>,
    /// A fetch is in flight
    pub loading: bool,
    /// Message from the last failed fetch
    pub error: Option<String>,
}

/// Outcomes that change the cache
#[derive(Clone, Debug, PartialEq)]
pub enum EmployeeAction {
    FetchPending,
    FetchFulfilled(Vec<Employee>),
    FetchRejected(String),
    Created(Employee),
    Updated(Employee),
    Deleted(u32),
}

impl EmployeeState {
    pub fn reduce(mut self, action: EmployeeAction) -> Self {
        match action {
            EmployeeAction::FetchPending => {
                self.loading = true;
            }
            EmployeeAction::FetchFulfilled(employees) => {
                self.loading = false;
                self.error = None;
                self.employees = employees;
            }
            EmployeeAction::FetchRejected(message) => {
                self.loading = false;
                self.error = Some(if message.is_empty() {
                    DEFAULT_FETCH_ERROR.to_string()
                } else {
                    message
                });
            }
            EmployeeAction::Created(employee) => {
                self.employees.push(employee);
            }
            EmployeeAction::Updated(updated) => {
                if let Some(slot) = self.employees.iter_mut().find(|e| e.id == updated.id) {
                    *slot = updated;
                }
            }
            EmployeeAction::Deleted(id) => {
                self.employees.retain(|e| e.id != id);
            }
        }
        self
    }
}

/// Type alias for the store
pub type EmployeeStore = Store<EmployeeState>;

/// Get the employee store from context
pub fn use_employee_store() -> EmployeeStore {
    expect_context::<EmployeeStore>()
}

/// Sink for store actions
pub trait Dispatch {
    fn dispatch(&self, action: EmployeeAction);
}

impl Dispatch for EmployeeStore {
    fn dispatch(&self, action: EmployeeAction) {
        log::debug!("dispatch {:?}", ActionName(&action));
        self.update(|state| {
            let current = std::mem::take(state);
            *state = current.reduce(action);
        });
    }
}

/// Logs the action kind without dumping payloads
struct ActionName<'a>(&'a EmployeeAction);

impl std::fmt::Debug for ActionName<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            EmployeeAction::FetchPending => write!(f, "FetchPending"),
            EmployeeAction::FetchFulfilled(list) => write!(f, "FetchFulfilled({} rows)", list.len()),
            EmployeeAction::FetchRejected(_) => write!(f, "FetchRejected"),
            EmployeeAction::Created(e) => write!(f, "Created(#{})", e.id),
            EmployeeAction::Updated(e) => write!(f, "Updated(#{})", e.id),
            EmployeeAction::Deleted(id) => write!(f, "Deleted(#{})", id),
        }
    }
}
