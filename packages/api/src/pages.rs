//! Pages of the site and the redirects between them.
//!
//! Every page is a full load. Access is decided once, from the session
//! present when the page loaded: signing out on the dashboard does not
//! re-run the gate, the log-out flow navigates away on its own.

use crate::models::SessionUser;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Login,
    Signup,
    Dashboard,
}

impl Page {
    /// Where a successful sign-in lands.
    pub const AFTER_SIGN_IN: Page = Page::Dashboard;
    /// Where a successful sign-up lands.
    pub const AFTER_SIGN_UP: Page = Page::Login;
    /// Where logging out lands.
    pub const AFTER_LOG_OUT: Page = Page::Home;

    pub const fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Login => "/login",
            Page::Signup => "/signup",
            Page::Dashboard => "/dashboard",
        }
    }
}

/// Access decision for one page load.
#[derive(Debug, Clone, PartialEq)]
pub struct PageGate {
    page: Page,
    user: Option<SessionUser>,
}

impl PageGate {
    pub fn on_load(page: Page, session: Option<SessionUser>) -> Self {
        Self { page, user: session }
    }

    /// The page to go to instead of rendering this one.
    ///
    /// The dashboard requires a session; the landing page sends signed-in
    /// visitors on to the dashboard.
    pub fn redirect(&self) -> Option<Page> {
        match (self.page, &self.user) {
            (Page::Dashboard, None) => Some(Page::Login),
            (Page::Home, Some(_)) => Some(Page::Dashboard),
            _ => None,
        }
    }

    /// The user signed in when the page loaded.
    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }
}
