//! Page paths and full-page redirects.
//!
//! Each page is its own load: the session is read from storage again after
//! every redirect.

pub use api::Page;

pub const HOME_PATH: &str = Page::Home.path();
pub const LOGIN_PATH: &str = Page::Login.path();
pub const SIGNUP_PATH: &str = Page::Signup.path();
pub const DASHBOARD_PATH: &str = Page::Dashboard.path();

pub fn redirect_to(path: &str) {
    tracing::debug!("Redirecting to {}", path);
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(path) {
                tracing::error!("Failed to redirect to {}: {:?}", path, e);
            }
        }
    }
}
