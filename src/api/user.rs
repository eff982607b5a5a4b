//! User Lookup
//!
//! The backend has no auth endpoint, so login downloads `/users` and matches
//! locally. Only the matched record leaves this module.

use super::{check_status, ApiClient, ApiError, ApiResult};
use crate::models::User;

impl ApiClient {
    pub(super) async fn lookup_user(&self, email: &str, password: &str) -> ApiResult<Option<User>> {
        let url = self.config.users_url();
        log::debug!("GET {}", url);
        let response = self.http.get(&url).send().await.map_err(|e| {
            log::warn!("Login lookup failed: {}", e);
            ApiError::from(e)
        })?;
        let users: Vec<User> = check_status(response, "users")?.json().await?;
        Ok(match_credentials(users, email, password))
    }
}

/// Exact, case-sensitive match on both email and password
pub fn match_credentials(users: Vec<User>, email: &str, password: &str) -> Option<User> {
    users
        .into_iter()
        .find(|user| user.email == email && user.password == password)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str, password: &str) -> User {
        User {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_match_found() {
        let users = vec![user("b@x.com", "pw"), user("a@x.com", "pw")];
        assert_eq!(match_credentials(users, "a@x.com", "pw"), Some(user("a@x.com", "pw")));
    }

    #[test]
    fn test_match_requires_both_fields() {
        let users = vec![user("a@x.com", "pw")];
        assert_eq!(match_credentials(users.clone(), "a@x.com", "PW"), None);
        assert_eq!(match_credentials(users.clone(), "A@x.com", "pw"), None);
        assert_eq!(match_credentials(Vec::new(), "a@x.com", "pw"), None);
    }
}
