use crate::core::persistence::{check_product, check_worker, CatalogPersistence};
use crate::core::seed::seed_snapshot;
use crate::domain::model::{CatalogSnapshot, Product, WorkerProfile};
use crate::domain::ports::KeyValueStore;
use crate::utils::error::{CatalogError, Result};
use std::sync::Arc;

/// Outcome of the write that follows every mutation. The in-memory change
/// stands either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveStatus {
    Saved,
    Unsaved { reason: String },
}

impl SaveStatus {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveStatus::Saved)
    }
}

/// Sole owner of the worker and product collections. Readers get shared,
/// immutable snapshots; every add swaps in a new collection and saves.
pub struct CatalogStore<S: KeyValueStore> {
    workers: Arc<[WorkerProfile]>,
    products: Arc<[Product]>,
    persistence: CatalogPersistence<S>,
}

impl<S: KeyValueStore> CatalogStore<S> {
    pub fn open(persistence: CatalogPersistence<S>) -> Self {
        let CatalogSnapshot { workers, products } = persistence.load();
        tracing::info!(
            "📂 Catalog opened with {} workers and {} products",
            workers.len(),
            products.len()
        );
        Self {
            workers: workers.into(),
            products: products.into(),
            persistence,
        }
    }

    pub fn list_workers(&self) -> Arc<[WorkerProfile]> {
        Arc::clone(&self.workers)
    }

    pub fn list_products(&self) -> Arc<[Product]> {
        Arc::clone(&self.products)
    }

    /// Rejects malformed profiles and duplicate ids before touching anything.
    pub fn add_worker(&mut self, profile: WorkerProfile) -> Result<SaveStatus> {
        check_worker(&profile)?;
        if self.workers.iter().any(|w| w.id == profile.id) {
            return Err(CatalogError::DuplicateIdError { id: profile.id });
        }

        tracing::info!("➕ Adding worker {} ({})", profile.name, profile.category);
        self.workers = prepend(profile, &self.workers);
        Ok(self.persist())
    }

    pub fn add_product(&mut self, product: Product) -> Result<SaveStatus> {
        check_product(&product)?;
        if self.products.iter().any(|p| p.id == product.id) {
            return Err(CatalogError::DuplicateIdError { id: product.id });
        }

        tracing::info!("➕ Adding product {} ({})", product.name, product.category);
        self.products = prepend(product, &self.products);
        Ok(self.persist())
    }

    /// Replaces both collections with the built-in seed.
    pub fn reset_to_seed(&mut self) -> SaveStatus {
        let CatalogSnapshot { workers, products } = seed_snapshot();
        self.workers = workers.into();
        self.products = products.into();
        tracing::info!("♻️ Catalog reset to seed data");
        self.persist()
    }

    fn persist(&self) -> SaveStatus {
        match self.persistence.save(&self.workers, &self.products) {
            Ok(()) => SaveStatus::Saved,
            Err(e) => {
                tracing::warn!(
                    "⚠️ Catalog change kept in memory only: {} ({})",
                    e,
                    e.recovery_suggestion()
                );
                SaveStatus::Unsaved {
                    reason: e.to_string(),
                }
            }
        }
    }
}

fn prepend<T: Clone>(item: T, rest: &[T]) -> Arc<[T]> {
    let mut items = Vec::with_capacity(rest.len() + 1);
    items.push(item);
    items.extend_from_slice(rest);
    items.into()
}
