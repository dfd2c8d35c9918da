use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::KvStore;
use crate::errors::ServiceError;

/// Process-local store. Used by tests and by the `memory` backend.
#[derive(Default)]
pub struct InMemoryKvStore {
    inner: RwLock<HashMap<String, String>>,
}

impl InMemoryKvStore {
    pub fn new() -> Self { Self::default() }

    /// Start with the given `key -> blob` pairs already present.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { inner: RwLock::new(map) }
    }

    pub async fn keys(&self) -> Vec<String> {
        let map = self.inner.read().await;
        map.keys().cloned().collect()
    }
}

#[async_trait]
impl KvStore for InMemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, ServiceError> {
        let map = self.inner.read().await;
        Ok(map.get(key).cloned())
    }

    async fn put(&self, key: &str, value: String) -> Result<(), ServiceError> {
        let mut map = self.inner.write().await;
        map.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_put_overwrite() -> Result<(), anyhow::Error> {
        let store = InMemoryKvStore::new();
        assert_eq!(store.get("posts").await?, None);

        store.put("posts", "[]".into()).await?;
        store.put("posts", "[1]".into()).await?;
        assert_eq!(store.get("posts").await?.as_deref(), Some("[1]"));
        assert_eq!(store.keys().await, vec!["posts".to_string()]);
        Ok(())
    }

    #[tokio::test]
    async fn seeded_entries_visible() -> Result<(), anyhow::Error> {
        let store = InMemoryKvStore::with_entries([("users", "[]")]);
        assert_eq!(store.get("users").await?.as_deref(), Some("[]"));
        Ok(())
    }
}
