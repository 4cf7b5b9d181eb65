//! This crate contains all shared UI for the workspace.

pub mod navigation;
pub use navigation::{redirect_to, Page, DASHBOARD_PATH, HOME_PATH, LOGIN_PATH, SIGNUP_PATH};

mod services;
pub use services::{make_store, use_services, Accounts, AppServices, PageStore};

mod session;
pub use session::{use_page_gate, use_session, LogoutButton, SessionProvider, SessionState};

mod notices;
pub use notices::{use_notifier, NoticeBanner, Notifier};

pub mod timers;
pub use timers::SpawnScheduler;

mod auth_links;
pub use auth_links::AuthLinks;

mod sign_in;
pub use sign_in::SignInView;

mod sign_up;
pub use sign_up::SignUpView;

pub mod views;
