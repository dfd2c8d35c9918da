//! Read-modify-write access to a whole collection stored under one key.
//!
//! Every call goes back to the store: there is no cache between requests and
//! no version check on save, so two writers that load before either saves
//! race and the later save wins for the whole collection.

use std::{marker::PhantomData, sync::Arc};

use models::Identified;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, instrument};

use crate::errors::ServiceError;
use crate::storage::KvStore;

pub const POSTS_KEY: &str = "posts";
pub const USERS_KEY: &str = "users";

pub struct CollectionRepository<T> {
    store: Arc<dyn KvStore>,
    key: &'static str,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for CollectionRepository<T> {
    fn clone(&self) -> Self {
        Self { store: Arc::clone(&self.store), key: self.key, _entity: PhantomData }
    }
}

impl<T> CollectionRepository<T>
where
    T: Serialize + DeserializeOwned + Identified,
{
    pub fn new(store: Arc<dyn KvStore>, key: &'static str) -> Self {
        Self { store, key, _entity: PhantomData }
    }

    pub fn key(&self) -> &'static str { self.key }

    /// Read the collection. An absent key is written back as `default` before
    /// returning it, so the key exists after the first read.
    #[instrument(level = "debug", skip(self, default), fields(key = %self.key))]
    pub async fn load_or_init(&self, default: Vec<T>) -> Result<Vec<T>, ServiceError> {
        match self.store.get(self.key).await? {
            Some(blob) => {
                let items: Vec<T> = serde_json::from_str(&blob)?;
                debug!(len = items.len(), "collection loaded");
                Ok(items)
            }
            None => {
                self.save(&default).await?;
                debug!(len = default.len(), "collection initialized");
                Ok(default)
            }
        }
    }

    /// Overwrite the stored collection unconditionally.
    #[instrument(level = "debug", skip(self, items), fields(key = %self.key, len = items.len()))]
    pub async fn save(&self, items: &[T]) -> Result<(), ServiceError> {
        let blob = serde_json::to_string(items)?;
        self.store.put(self.key, blob).await
    }
}

/// Outcome of [`upsert_by_id`], carrying the index the entity ended up at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Replaced(usize),
    Appended(usize),
}

/// Replace the first element whose id matches `item`, otherwise append it.
pub fn upsert_by_id<T: Identified>(items: &mut Vec<T>, item: T) -> Upsert {
    match items.iter().position(|existing| existing.id() == item.id()) {
        Some(idx) => {
            items[idx] = item;
            Upsert::Replaced(idx)
        }
        None => {
            items.push(item);
            Upsert::Appended(items.len() - 1)
        }
    }
}
