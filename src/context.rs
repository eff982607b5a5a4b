//! Application Context
//!
//! Shared services provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::config::{AppConfig, SubmitFailurePolicy};
use crate::notify::Notifier;
use crate::session::{LocalStorageBackend, Session};

/// Top-level screens
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Login,
    Dashboard,
}

/// App-wide services provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    api: StoredValue<ApiClient>,
    pub session: Session<LocalStorageBackend>,
    pub notifier: Notifier,
    pub submit_failure: SubmitFailurePolicy,
    /// Current screen - read
    pub view: ReadSignal<View>,
    /// Current screen - write
    set_view: WriteSignal<View>,
}

impl AppContext {
    pub fn new(config: &AppConfig) -> Self {
        let session = Session::new(LocalStorageBackend);
        let initial = if session.is_authenticated() {
            View::Dashboard
        } else {
            View::Login
        };
        let (view, set_view) = signal(initial);

        Self {
            api: StoredValue::new(ApiClient::new(config.api.clone())),
            session,
            notifier: Notifier::new(config.toast_timeout_ms),
            submit_failure: config.submit_failure,
            view,
            set_view,
        }
    }

    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    pub fn navigate(&self, view: View) {
        log::debug!("navigate to {:?}", view);
        self.set_view.set(view);
    }

    /// Screen to render; unauthenticated sessions always get the login screen
    pub fn resolved_view(&self) -> View {
        match self.view.get() {
            View::Dashboard if self.session.is_authenticated() => View::Dashboard,
            _ => View::Login,
        }
    }

    pub fn log_out(&self) {
        self.session.log_out();
        self.navigate(View::Login);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
