//! Employee Form Validation
//!
//! Field rules are checked before anything is sent to the API.
//! Each field reports at most one error (its first failing rule).

use regex::Regex;
use std::sync::LazyLock;

use crate::models::{Employee, JobRole, NewEmployee};

const NAME_MIN: usize = 3;
const NAME_MAX: usize = 15;
const EMPLOYEE_ID_MIN: usize = 4;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r##"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$"##,
    )
    .expect("email pattern is valid")
});

static MOBILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("mobile pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    EmployeeId,
    Mobile,
    JobRole,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Raw form contents, one string per input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFormInput {
    pub name: String,
    pub email: String,
    pub employee_id: String,
    pub mobile: String,
    /// Select value; empty when no role is chosen
    pub job_role: String,
}

impl From<&Employee> for EmployeeFormInput {
    fn from(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            email: employee.email.clone(),
            employee_id: employee.employee_id.clone(),
            mobile: employee.mobile.clone(),
            job_role: employee.job_role.as_str().to_string(),
        }
    }
}

/// Validate form input, producing the payload to send on success
pub fn validate(input: &EmployeeFormInput) -> Result<NewEmployee, Vec<FieldError>> {
    let mut errors = Vec::new();

    let name_len = input.name.chars().count();
    if input.name.is_empty() {
        errors.push(FieldError::new(Field::Name, "Name is required"));
    } else if name_len < NAME_MIN {
        errors.push(FieldError::new(
            Field::Name,
            format!("Name must be at least {} characters", NAME_MIN),
        ));
    } else if name_len > NAME_MAX {
        errors.push(FieldError::new(
            Field::Name,
            format!("Name must be at most {} characters", NAME_MAX),
        ));
    }

    if input.email.is_empty() {
        errors.push(FieldError::new(Field::Email, "Email is required"));
    } else if !EMAIL_RE.is_match(&input.email) {
        errors.push(FieldError::new(Field::Email, "Invalid email"));
    }

    if input.employee_id.is_empty() {
        errors.push(FieldError::new(Field::EmployeeId, "Employee ID is required"));
    } else if input.employee_id.chars().count() < EMPLOYEE_ID_MIN {
        errors.push(FieldError::new(
            Field::EmployeeId,
            format!("Employee ID must be at least {} characters", EMPLOYEE_ID_MIN),
        ));
    }

    if input.mobile.is_empty() {
        errors.push(FieldError::new(Field::Mobile, "Mobile is required"));
    } else if !MOBILE_RE.is_match(&input.mobile) {
        errors.push(FieldError::new(Field::Mobile, "Invalid mobile number"));
    }

    let job_role = if input.job_role.is_empty() {
        errors.push(FieldError::new(Field::JobRole, "Job Role is required"));
        None
    } else {
        let parsed = JobRole::parse(&input.job_role);
        if parsed.is_none() {
            errors.push(FieldError::new(Field::JobRole, "Invalid job role"));
        }
        parsed
    };

    match job_role {
        Some(job_role) if errors.is_empty() => Ok(NewEmployee {
            name: input.name.clone(),
            email: input.email.clone(),
            employee_id: input.employee_id.clone(),
            mobile: input.mobile.clone(),
            job_role,
        }),
        _ => Err(errors),
    }
}
