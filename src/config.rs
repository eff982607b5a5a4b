//! App Configuration
//!
//! Values are baked in at build time from environment variables
//! (`EMPLOYEE_API_URL`, `EMPLOYEE_LOG_LEVEL`, `EMPLOYEE_FORM_FAILURE`).

use log::LevelFilter;
use std::str::FromStr;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_TOAST_TIMEOUT_MS: u32 = 3000;

/// Where the REST API lives
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn employees_url(&self) -> String {
        format!("{}/employees", self.base_url)
    }

    pub fn employee_url(&self, id: u32) -> String {
        format!("{}/employees/{}", self.base_url, id)
    }

    pub fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(option_env!("EMPLOYEE_API_URL").unwrap_or(DEFAULT_API_URL))
    }
}

/// What the employee form does when a save fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitFailurePolicy {
    /// Reset and close the form, report a generic failure
    #[default]
    DiscardAndClose,
    /// Keep the form open with the user's input and show the error detail
    KeepOpen,
}

impl SubmitFailurePolicy {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "discard" | "discard-and-close" => Some(Self::DiscardAndClose),
            "keep" | "keep-open" => Some(Self::KeepOpen),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub log_level: LevelFilter,
    pub toast_timeout_ms: u32,
    pub submit_failure: SubmitFailurePolicy,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            api: ApiConfig::default(),
            log_level: parse_log_level(option_env!("EMPLOYEE_LOG_LEVEL")),
            toast_timeout_ms: DEFAULT_TOAST_TIMEOUT_MS,
            submit_failure: option_env!("EMPLOYEE_FORM_FAILURE")
                .and_then(SubmitFailurePolicy::parse)
                .unwrap_or_default(),
        }
    }
}

fn parse_log_level(raw: Option<&str>) -> LevelFilter {
    raw.and_then(|s| LevelFilter::from_str(s.trim()).ok())
        .unwrap_or(LevelFilter::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_urls() {
        let config = ApiConfig::new("http://api.local:5000/");
        assert_eq!(config.employees_url(), "http://api.local:5000/employees");
        assert_eq!(config.employee_url(12), "http://api.local:5000/employees/12");
        assert_eq!(config.users_url(), "http://api.local:5000/users");
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(parse_log_level(Some("WARN")), LevelFilter::Warn);
        assert_eq!(parse_log_level(Some("noise")), LevelFilter::Info);
        assert_eq!(parse_log_level(None), LevelFilter::Info);
    }

    #[test]
    fn test_submit_failure_policy_parse() {
        assert_eq!(SubmitFailurePolicy::parse("keep-open"), Some(SubmitFailurePolicy::KeepOpen));
        assert_eq!(SubmitFailurePolicy::parse("Discard"), Some(SubmitFailurePolicy::DiscardAndClose));
        assert_eq!(SubmitFailurePolicy::parse("maybe"), None);
        assert_eq!(SubmitFailurePolicy::default(), SubmitFailurePolicy::DiscardAndClose);
    }
}
