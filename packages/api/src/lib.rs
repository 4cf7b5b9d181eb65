//! # API crate: the in-browser mock backend for Orayze
//!
//! The demo has no server. Everything a backend would normally do (account
//! storage, credential checks, the result of a scan) happens here, against a
//! [`store::KeyValueStore`] that is `localStorage` in the browser and a
//! [`store::MemoryStore`] in tests. This crate has no UI dependency; the `ui`
//! crate attaches its types to Dioxus components.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Sign-up validation and [`AccountService`]: sign up, sign in, log out, session query |
//! | [`clock`] | Injectable wall clock for account ids and timestamps |
//! | [`dashboard`] | Navigation items and placeholder actions with their messages |
//! | [`models`] | [`UserRecord`] and its password-free projection [`SessionUser`] |
//! | [`notice`] | Single-slot transient notices |
//! | [`pages`] | Page paths, the load-time access gate, where each auth flow lands |
//! | [`scan`] | The scan dialog state machine, dashboard stats and score sources |
//! | [`schedule`] | [`Scheduler`] for fixed-delay callbacks, and a virtual-time implementation |

pub mod auth;
pub mod clock;
pub mod dashboard;
pub mod models;
pub mod notice;
pub mod pages;
pub mod scan;
pub mod schedule;

pub use auth::{AccountError, AccountService, SignUpForm, ValidationError};
pub use clock::{Clock, FixedClock, SystemClock};
pub use dashboard::{section_message, DashboardAction, NavMenu, NAV_ITEMS, QUICK_ACTIONS};
pub use models::{SessionUser, UserRecord};
pub use notice::{Notice, NoticeId, NoticeKind, NoticeSlot};
pub use pages::{Page, PageGate};
pub use scan::{CaptureMethod, RngScore, ScanPhase, ScanSession, ScanStats, ScanTicket, ScoreSource};
pub use schedule::{ManualScheduler, Scheduler};
