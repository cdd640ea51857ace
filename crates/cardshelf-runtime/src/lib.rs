pub mod config;
pub mod error;
pub mod loader;
pub mod session;
pub mod watcher;

pub use config::{CONFIG_ENV, CatalogConfig, Config, expand_tilde, resolve_config_path};
pub use error::{Error, Result};
pub use loader::{CatalogSnapshot, STDIN_SOURCE, load_catalog, load_from_bytes, load_from_str};
pub use session::{CatalogSession, Generation};
pub use watcher::{CatalogEvent, CatalogWatcher, DEFAULT_POLL_INTERVAL};
