pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::AppConfig;

pub use adapters::storage::{LocalStorage, MemoryStorage};
pub use app::{build_advisor, open_directory};
pub use crate::core::{catalog::CatalogStore, directory::Directory, persistence::CatalogPersistence};
pub use domain::taxonomy::{CategoryFilter, WorkerCategory, CATEGORIES};
pub use utils::error::{CatalogError, Result};
