use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

use components::{empty_state::EmptyState, layout::Layout};
use pages::{AttendancePage, DashboardPage, EmployeesPage};

pub fn init_logging() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(api::ApiClient::new());
    provide_context(state::notifications::Notifications::new());

    view! {
        <Router>
            <Routes>
                <Route path="/" view=DashboardPage/>
                <Route path="/employees" view=EmployeesPage/>
                <Route path="/attendance" view=AttendancePage/>
                <Route path="/*any" view=NotFoundPage/>
            </Routes>
        </Router>
    }
}

#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <Layout>
            <EmptyState
                title="Page not found"
                description="Use the navigation above to get back on track."
                icon="fas fa-compass"
            />
        </Layout>
    }
}
