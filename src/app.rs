//! Employee Directory App
//!
//! Root component: login gate in front of the employee table.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{EmployeeTable, LoginForm, ToastContainer};
use crate::config::AppConfig;
use crate::context::{AppContext, View};
use crate::store::EmployeeState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let ctx = AppContext::new(&config);
    provide_context(ctx);
    provide_context(Store::new(EmployeeState::default()));

    view! {
        <div class="app-layout">
            {move || match ctx.resolved_view() {
                View::Dashboard => view! { <EmployeeTable /> }.into_any(),
                View::Login => view! { <LoginForm /> }.into_any(),
            }}
            <ToastContainer />
        </div>
    }
}
