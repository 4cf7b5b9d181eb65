pub mod config;
pub mod kv;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use config::{AppConfig, AuthConfig, ConfigError, NoticeConfig, ScanConfig, StorageKeys};
pub use kv::{load_json, save_json, KeyValueStore, StoreError};
