use crate::utils::error::Result;
use async_trait::async_trait;

/// A durable key/value slot holding text blobs.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// The external helper that maps a free-text problem description to a
/// category label. The label is not trusted; callers check it against the
/// taxonomy.
#[async_trait]
pub trait CategoryAdvisor: Send + Sync {
    async fn suggest(&self, symptoms: &str) -> Result<String>;
}
