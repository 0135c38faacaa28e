pub mod catalog;
pub mod directory;
pub mod filter;
pub mod ingest;
pub mod persistence;
pub mod seed;

pub use crate::domain::model::{CatalogSnapshot, Product, WorkerProfile};
pub use crate::domain::ports::{CategoryAdvisor, KeyValueStore};
pub use crate::utils::error::Result;
