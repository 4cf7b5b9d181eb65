//! Page-level services shared through the Dioxus context.
//!
//! The account backend is built once per page load on top of the
//! platform-appropriate [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStore`]
//! - **Native**: [`store::MemoryStore`], gone when the process exits

use std::rc::Rc;

use api::AccountService;
use dioxus::prelude::*;
use store::AppConfig;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PageStore = store::LocalStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PageStore = store::MemoryStore;

pub type Accounts = AccountService<PageStore>;

/// Create the platform-appropriate store.
pub fn make_store() -> PageStore {
    PageStore::new()
}

#[derive(Clone)]
pub struct AppServices {
    pub accounts: Rc<Accounts>,
    pub config: Rc<AppConfig>,
}

impl AppServices {
    pub fn new(config: AppConfig) -> Self {
        let accounts = AccountService::new(make_store(), config.storage.clone());
        Self {
            accounts: Rc::new(accounts),
            config: Rc::new(config),
        }
    }
}

/// Get the services installed by [`crate::SessionProvider`].
pub fn use_services() -> AppServices {
    use_context::<AppServices>()
}
