use crate::core::seed::{seed_products, seed_workers};
use crate::domain::model::{CatalogSnapshot, Product, WorkerProfile, MAX_RATING};
use crate::domain::ports::KeyValueStore;
use crate::utils::error::{CatalogError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashSet;

pub const DEFAULT_NAMESPACE: &str = "skilledHelpers";
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Key naming for the two collections. The schema version is part of the key,
/// so bumping it makes older saves invisible and clients start from the seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    namespace: String,
    schema_version: u32,
}

impl StorageKeys {
    pub fn new(namespace: impl Into<String>, schema_version: u32) -> Self {
        Self {
            namespace: namespace.into(),
            schema_version,
        }
    }

    pub fn workers(&self) -> String {
        self.versioned("workers", self.schema_version)
    }

    pub fn products(&self) -> String {
        self.versioned("products", self.schema_version)
    }

    /// Keys written by earlier schema versions, including the unversioned ones.
    pub fn legacy(&self) -> Vec<String> {
        let mut keys = Vec::new();
        for collection in ["workers", "products"] {
            keys.push(format!("{}_{}", self.namespace, collection));
            for version in 0..self.schema_version {
                keys.push(self.versioned(collection, version));
            }
        }
        keys
    }

    fn versioned(&self, collection: &str, version: u32) -> String {
        format!("{}_{}_v{}", self.namespace, collection, version)
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE, CURRENT_SCHEMA_VERSION)
    }
}

pub struct CatalogPersistence<S: KeyValueStore> {
    storage: S,
    keys: StorageKeys,
}

impl<S: KeyValueStore> CatalogPersistence<S> {
    pub fn new(storage: S, keys: StorageKeys) -> Self {
        Self { storage, keys }
    }

    /// Last saved collections. Each one independently falls back to the seed
    /// when its key is missing, unreadable or fails the shape checks.
    pub fn load(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            workers: self.load_collection(&self.keys.workers(), seed_workers, workers_are_sound),
            products: self.load_collection(
                &self.keys.products(),
                seed_products,
                products_are_sound,
            ),
        }
    }

    /// Writes both collections. Both writes are attempted; the first failure
    /// is returned.
    pub fn save(&self, workers: &[WorkerProfile], products: &[Product]) -> Result<()> {
        let workers_result = self.save_collection(&self.keys.workers(), workers);
        let products_result = self.save_collection(&self.keys.products(), products);
        workers_result.and(products_result)
    }

    /// Deletes keys left behind by older schema versions and returns how many
    /// were present.
    pub fn purge_legacy(&self) -> Result<usize> {
        let mut removed = 0;
        for key in self.keys.legacy() {
            if self.storage.get(&key)?.is_some() {
                self.storage.remove(&key)?;
                tracing::info!("🧹 Removed legacy key {}", key);
                removed += 1;
            }
        }
        Ok(removed)
    }

    /// Drops both current keys so the next load starts from the seed.
    pub fn clear(&self) -> Result<()> {
        self.storage.remove(&self.keys.workers())?;
        self.storage.remove(&self.keys.products())?;
        Ok(())
    }

    fn load_collection<T: DeserializeOwned>(
        &self,
        key: &str,
        seed: fn() -> Vec<T>,
        sound: fn(&[T]) -> bool,
    ) -> Vec<T> {
        let raw = match self.storage.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!("No saved data under {}, using seed", key);
                return seed();
            }
            Err(e) => {
                tracing::warn!("⚠️ Could not read {}: {}; using seed", key, e);
                return seed();
            }
        };

        match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(items) if sound(&items) => {
                tracing::debug!("Loaded {} entries from {}", items.len(), key);
                items
            }
            Ok(_) => {
                tracing::warn!("⚠️ Saved data under {} failed integrity checks; using seed", key);
                seed()
            }
            Err(e) => {
                tracing::warn!("⚠️ Saved data under {} is malformed ({}); using seed", key, e);
                seed()
            }
        }
    }

    fn save_collection<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let payload = serde_json::to_string(items)?;
        self.storage.set(key, &payload)?;
        tracing::debug!("Saved {} entries to {} ({} bytes)", items.len(), key, payload.len());
        Ok(())
    }
}

fn unique_ids<'a>(ids: impl Iterator<Item = &'a str>) -> bool {
    let mut seen = HashSet::new();
    ids.into_iter().all(|id| seen.insert(id))
}

fn check_amount(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CatalogError::validation(field, format!("{} must be a non-negative number", value)))
    }
}

fn check_rating(rating: f64) -> Result<()> {
    if (0.0..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(CatalogError::validation(
            "rating",
            format!("{} is outside 0..={}", rating, MAX_RATING),
        ))
    }
}

fn check_identity(id: &str, name: &str) -> Result<()> {
    if id.trim().is_empty() {
        return Err(CatalogError::MissingFieldError {
            field: "id".to_string(),
        });
    }
    if name.trim().is_empty() {
        return Err(CatalogError::MissingFieldError {
            field: "name".to_string(),
        });
    }
    Ok(())
}

/// Shape checks a stored worker must pass. Shared by `load` and the store so
/// nothing that would fail on reload can be written in the first place.
pub(crate) fn check_worker(worker: &WorkerProfile) -> Result<()> {
    check_identity(&worker.id, &worker.name)?;
    check_amount("hourlyRate", worker.hourly_rate)?;
    check_rating(worker.rating)
}

pub(crate) fn check_product(product: &Product) -> Result<()> {
    check_identity(&product.id, &product.name)?;
    check_amount("price", product.price)?;
    check_rating(product.rating)
}

fn workers_are_sound(workers: &[WorkerProfile]) -> bool {
    unique_ids(workers.iter().map(|w| w.id.as_str()))
        && workers.iter().all(|w| check_worker(w).is_ok())
}

fn products_are_sound(products: &[Product]) -> bool {
    unique_ids(products.iter().map(|p| p.id.as_str()))
        && products.iter().all(|p| check_product(p).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::MemoryStorage;
    use crate::core::seed::seed_snapshot;

    fn persistence(storage: &MemoryStorage) -> CatalogPersistence<&MemoryStorage> {
        CatalogPersistence::new(storage, StorageKeys::default())
    }

    #[test]
    fn test_keys_carry_schema_version() {
        let keys = StorageKeys::default();
        assert_eq!(keys.workers(), "skilledHelpers_workers_v1");
        assert_eq!(keys.products(), "skilledHelpers_products_v1");

        let legacy = StorageKeys::new("skilledHelpers", 2).legacy();
        assert!(legacy.contains(&"skilledHelpers_workers".to_string()));
        assert!(legacy.contains(&"skilledHelpers_workers_v1".to_string()));
        assert!(!legacy.contains(&"skilledHelpers_workers_v2".to_string()));
    }

    #[test]
    fn test_empty_storage_loads_seed() {
        let storage = MemoryStorage::new();
        assert_eq!(persistence(&storage).load(), seed_snapshot());
    }

    #[test]
    fn test_round_trip() {
        let storage = MemoryStorage::new();
        let adapter = persistence(&storage);

        let mut snapshot = seed_snapshot();
        snapshot.workers.truncate(1);
        snapshot.products.reverse();
        adapter.save(&snapshot.workers, &snapshot.products).unwrap();

        assert_eq!(adapter.load(), snapshot);
    }

    #[test]
    fn test_corrupt_collection_does_not_affect_the_other() {
        let storage = MemoryStorage::new();
        let adapter = persistence(&storage);

        let products = vec![seed_products().remove(0)];
        adapter.save(&[], &products).unwrap();
        storage.set("skilledHelpers_workers_v1", "{not json").unwrap();

        let loaded = adapter.load();
        assert_eq!(loaded.workers, seed_workers());
        assert_eq!(loaded.products, products);
    }

    #[test]
    fn test_duplicate_ids_fall_back_to_seed() {
        let storage = MemoryStorage::new();
        let adapter = persistence(&storage);

        let mut workers = seed_workers();
        workers[1].id = workers[0].id.clone();
        adapter.save(&workers, &seed_products()).unwrap();

        assert_eq!(adapter.load().workers, seed_workers());
    }

    #[test]
    fn test_out_of_range_values_fall_back_to_seed() {
        let storage = MemoryStorage::new();
        let adapter = persistence(&storage);

        let mut workers = seed_workers();
        workers[0].rating = 9.0;
        let mut products = seed_products();
        products[0].price = -1.0;
        adapter.save(&workers, &products).unwrap();

        assert_eq!(adapter.load(), seed_snapshot());
    }

    #[test]
    fn test_entity_checks() {
        let mut worker = seed_workers().remove(0);
        assert!(check_worker(&worker).is_ok());
        worker.rating = MAX_RATING + 0.1;
        assert!(matches!(
            check_worker(&worker),
            Err(CatalogError::ValidationError { ref field, .. }) if field == "rating"
        ));

        let mut product = seed_products().remove(0);
        product.price = f64::INFINITY;
        assert!(check_product(&product).is_err());
        product.price = 0.0;
        product.name = " ".to_string();
        assert!(matches!(
            check_product(&product),
            Err(CatalogError::MissingFieldError { .. })
        ));
    }

    #[test]
    fn test_newer_schema_ignores_old_keys() {
        let storage = MemoryStorage::new();
        persistence(&storage).save(&[], &[]).unwrap();

        let v2 = CatalogPersistence::new(&storage, StorageKeys::new(DEFAULT_NAMESPACE, 2));
        assert_eq!(v2.load(), seed_snapshot());
        assert_eq!(v2.purge_legacy().unwrap(), 2);
        assert!(storage.get("skilledHelpers_workers_v1").unwrap().is_none());
    }

    #[test]
    fn test_clear_returns_to_seed() {
        let storage = MemoryStorage::new();
        let adapter = persistence(&storage);
        adapter.save(&[], &[]).unwrap();
        assert!(adapter.load().workers.is_empty());

        adapter.clear().unwrap();
        assert!(storage.is_empty());
        assert_eq!(adapter.load(), seed_snapshot());
    }

    #[test]
    fn test_save_is_idempotent() {
        let storage = MemoryStorage::new();
        let adapter = persistence(&storage);
        let snapshot = seed_snapshot();

        adapter.save(&snapshot.workers, &snapshot.products).unwrap();
        let first = storage.get("skilledHelpers_workers_v1").unwrap();
        adapter.save(&snapshot.workers, &snapshot.products).unwrap();
        assert_eq!(storage.get("skilledHelpers_workers_v1").unwrap(), first);
    }
}
