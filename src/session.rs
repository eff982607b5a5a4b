//! Login Session
//!
//! A single "user" key in browser storage marks the session as logged in.
//! This is a presence check only: nothing is verified server-side, so it is
//! a convenience gate, not a security boundary.

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

use crate::models::User;

pub const SESSION_KEY: &str = "user";

/// Key/value storage the session lives in
pub trait SessionBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageBackend;

impl LocalStorageBackend {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    log::warn!("localStorage rejected write of '{}'", key);
                }
            }
            None => log::warn!("localStorage unavailable, session not saved"),
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-process storage
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryBackend {
    values: RefCell<HashMap<String, String>>,
}

#[cfg(test)]
impl SessionBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Session<B: SessionBackend> {
    backend: B,
}

impl<B: SessionBackend> Session<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn is_authenticated(&self) -> bool {
        self.backend.get(SESSION_KEY).is_some()
    }

    /// Email of the logged-in user, if any
    pub fn current_email(&self) -> Option<String> {
        self.backend.get(SESSION_KEY)
    }

    /// Mark the session as logged in. The password is not stored.
    pub fn log_in(&self, user: &User) {
        log::info!("Session started for {}", user.email);
        self.backend.set(SESSION_KEY, &user.email);
    }

    pub fn log_out(&self) {
        log::info!("Session ended");
        self.backend.remove(SESSION_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            email: "a@x.com".to_string(),
            password: "pw".to_string(),
        }
    }

    #[test]
    fn test_new_session_is_anonymous() {
        let session = Session::new(MemoryBackend::default());
        assert!(!session.is_authenticated());
        assert_eq!(session.current_email(), None);
    }

    #[test]
    fn test_log_in_and_out() {
        let session = Session::new(MemoryBackend::default());
        session.log_in(&user());
        assert!(session.is_authenticated());
        assert_eq!(session.current_email().as_deref(), Some("a@x.com"));

        session.log_out();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_password_never_stored() {
        let backend = MemoryBackend::default();
        let session = Session::new(backend);
        session.log_in(&user());
        let stored = session.backend.values.borrow();
        assert!(stored.values().all(|v| !v.contains("pw")));
    }

    #[test]
    fn test_presence_alone_authenticates() {
        let backend = MemoryBackend::default();
        backend.set(SESSION_KEY, "anything");
        assert!(Session::new(backend).is_authenticated());
    }
}
