use std::{collections::HashMap, path::{Path, PathBuf}, sync::Arc};

use async_trait::async_trait;
use tokio::{fs, sync::RwLock};
use tracing::debug;

use super::KvStore;
use crate::errors::ServiceError;

/// JSON file-backed key-value store.
///
/// Keeps a `key -> blob` map in memory and rewrites the whole file on every put.
/// Intended for single-node deployments where a database is overkill.
pub struct JsonFileKvStore {
    inner: RwLock<HashMap<String, String>>,
    file_path: PathBuf,
}

impl JsonFileKvStore {
    /// Initialize the store from a path. Creates the file with an empty map if missing.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(|e| ServiceError::Store(e.to_string()))?;
            }
        }

        let map: HashMap<String, String> = match fs::read(&file_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let empty: HashMap<String, String> = HashMap::new();
                write_map(&file_path, &empty).await?;
                empty
            }
            Err(e) => return Err(ServiceError::Store(e.to_string())),
        };
        debug!(path = %file_path.display(), keys = map.len(), "json file store opened");

        Ok(Arc::new(Self { inner: RwLock::new(map), file_path }))
    }
}

async fn write_map(path: &Path, map: &HashMap<String, String>) -> Result<(), ServiceError> {
    let data = serde_json::to_vec(map)?;
    fs::write(path, data).await.map_err(|e| ServiceError::Store(e.to_string()))
}

#[async_trait]
impl KvStore for JsonFileKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, ServiceError> {
        let map = self.inner.read().await;
        Ok(map.get(key).cloned())
    }

    async fn put(&self, key: &str, value: String) -> Result<(), ServiceError> {
        // guard held across the write so file contents follow put order
        let mut map = self.inner.write().await;
        map.insert(key.to_string(), value);
        write_map(&self.file_path, &map).await
    }
}
