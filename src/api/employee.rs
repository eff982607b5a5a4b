//! Employee Endpoints
//!
//! `/employees` collection: list, create, full replace, delete.

use super::{check_status, ApiClient, ApiError, ApiResult};
use crate::models::{Employee, NewEmployee};

impl ApiClient {
    pub(super) async fn fetch_employees(&self) -> ApiResult<Vec<Employee>> {
        let url = self.config.employees_url();
        log::debug!("GET {}", url);
        let response = self.http.get(&url).send().await.map_err(|e| {
            log::warn!("GET {} failed: {}", url, e);
            ApiError::from(e)
        })?;
        let employees: Vec<Employee> = check_status(response, "employees")?.json().await?;
        log::debug!("Loaded {} employees", employees.len());
        Ok(employees)
    }

    pub(super) async fn post_employee(&self, draft: &NewEmployee) -> ApiResult<Employee> {
        let url = self.config.employees_url();
        log::debug!("POST {}", url);
        let response = self.http.post(&url).json(draft).send().await.map_err(|e| {
            log::warn!("POST {} failed: {}", url, e);
            ApiError::from(e)
        })?;
        let created: Employee = check_status(response, "employees")?.json().await?;
        log::info!("Created employee #{}", created.id);
        Ok(created)
    }

    pub(super) async fn put_employee(&self, employee: &Employee) -> ApiResult<Employee> {
        let url = self.config.employee_url(employee.id);
        log::debug!("PUT {}", url);
        let response = self.http.put(&url).json(employee).send().await.map_err(|e| {
            log::warn!("PUT {} failed: {}", url, e);
            ApiError::from(e)
        })?;
        let resource = format!("employee {}", employee.id);
        let updated: Employee = check_status(response, &resource)?.json().await?;
        log::info!("Updated employee #{}", updated.id);
        Ok(updated)
    }

    /// Any 2xx confirms the delete; the body is ignored.
    pub(super) async fn remove_employee(&self, id: u32) -> ApiResult<u32> {
        let url = self.config.employee_url(id);
        log::debug!("DELETE {}", url);
        let response = self.http.delete(&url).send().await.map_err(|e| {
            log::warn!("DELETE {} failed: {}", url, e);
            ApiError::from(e)
        })?;
        check_status(response, &format!("employee {}", id))?;
        log::info!("Deleted employee #{}", id);
        Ok(id)
    }
}
