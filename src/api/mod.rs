//! REST API Client
//!
//! HTTP bindings to the employee and user collections, organized by domain.

mod employee;
mod error;
mod user;

#[cfg(test)]
mod tests;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::config::ApiConfig;
use crate::models::{Employee, NewEmployee, User};

pub use error::{ApiError, ApiResult};
pub use user::match_credentials;

/// Remote operations the store flows depend on.
///
/// `?Send` because futures on the wasm target are single-threaded.
#[async_trait(?Send)]
pub trait EmployeeApi {
    /// Fetch the whole employee collection
    async fn list_employees(&self) -> ApiResult<Vec<Employee>>;

    /// Create a record; the server assigns its id
    async fn create_employee(&self, draft: &NewEmployee) -> ApiResult<Employee>;

    /// Full replace of the record with `employee.id`
    async fn update_employee(&self, employee: &Employee) -> ApiResult<Employee>;

    /// Delete by id, returning the id on success
    async fn delete_employee(&self, id: u32) -> ApiResult<u32>;

    /// Look up a user by exact email and password. `Ok(None)` when nothing matches.
    async fn find_user_by_credentials(&self, email: &str, password: &str) -> ApiResult<Option<User>>;
}

/// HTTP implementation of [`EmployeeApi`]
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}

/// Map a response status onto the error taxonomy
fn check_status(response: reqwest::Response, resource: &str) -> ApiResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else if status == StatusCode::NOT_FOUND {
        Err(ApiError::NotFound(resource.to_string()))
    } else {
        Err(ApiError::Status(status.as_u16()))
    }
}

#[async_trait(?Send)]
impl EmployeeApi for ApiClient {
    async fn list_employees(&self) -> ApiResult<Vec<Employee>> {
        self.fetch_employees().await
    }

    async fn create_employee(&self, draft: &NewEmployee) -> ApiResult<Employee> {
        self.post_employee(draft).await
    }

    async fn update_employee(&self, employee: &Employee) -> ApiResult<Employee> {
        self.put_employee(employee).await
    }

    async fn delete_employee(&self, id: u32) -> ApiResult<u32> {
        self.remove_employee(id).await
    }

    async fn find_user_by_credentials(&self, email: &str, password: &str) -> ApiResult<Option<User>> {
        self.lookup_user(email, password).await
    }
}
