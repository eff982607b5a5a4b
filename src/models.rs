//! Frontend Models
//!
//! Data structures matching the REST API's JSON.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Job role options, in the order the form lists them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobRole {
    Developer,
    Manager,
    Designer,
}

impl JobRole {
    pub const ALL: [JobRole; 3] = [JobRole::Developer, JobRole::Manager, JobRole::Designer];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobRole::Developer => "Developer",
            JobRole::Manager => "Manager",
            JobRole::Designer => "Designer",
        }
    }

    /// Parse a select value. Exact match only.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == s)
    }
}

impl fmt::Display for JobRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Employee record as stored by the API
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Server-assigned identifier
    pub id: u32,
    pub name: String,
    pub email: String,
    /// Business identifier typed in by the user
    pub employee_id: String,
    pub mobile: String,
    pub job_role: JobRole,
}

/// Employee payload without an id, sent on create
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub employee_id: String,
    pub mobile: String,
    pub job_role: JobRole,
}

impl NewEmployee {
    /// Attach the id of an existing record (for full-replace updates)
    pub fn with_id(self, id: u32) -> Employee {
        Employee {
            id,
            name: self.name,
            email: self.email,
            employee_id: self.employee_id,
            mobile: self.mobile,
            job_role: self.job_role,
        }
    }
}

/// Login record from `/users`. Extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_json_uses_camel_case() {
        let json = r#"{"id":7,"name":"Asha","email":"asha@corp.io","employeeId":"EMP-7","mobile":"9876543210","jobRole":"Manager"}"#;
        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, 7);
        assert_eq!(employee.employee_id, "EMP-7");
        assert_eq!(employee.job_role, JobRole::Manager);

        let back = serde_json::to_value(&employee).unwrap();
        assert_eq!(back["employeeId"], "EMP-7");
        assert_eq!(back["jobRole"], "Manager");
    }

    #[test]
    fn test_new_employee_has_no_id_field() {
        let draft = NewEmployee {
            name: "Asha".to_string(),
            email: "asha@corp.io".to_string(),
            employee_id: "EMP-7".to_string(),
            mobile: "9876543210".to_string(),
            job_role: JobRole::Designer,
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(draft.with_id(3).id, 3);
    }

    #[test]
    fn test_job_role_parse() {
        assert_eq!(JobRole::parse("Developer"), Some(JobRole::Developer));
        assert_eq!(JobRole::parse("developer"), None);
        assert_eq!(JobRole::parse(""), None);
    }

    #[test]
    fn test_user_ignores_extra_fields() {
        let json = r#"{"id":1,"email":"a@x.com","password":"pw","name":"Admin"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.email, "a@x.com");
    }
}
