use std::sync::Arc;

use axum::Router;
use configs::{AppConfig, StoreBackend, StoreConfig};
use service::storage::{InMemoryKvStore, JsonFileKvStore, KvStore};
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

/// Open the configured key-value backend.
pub async fn open_store(cfg: &StoreConfig) -> Result<Arc<dyn KvStore>, StartupError> {
    match cfg.backend {
        StoreBackend::Memory => {
            warn!("using in-memory store; data is lost on exit");
            let store: Arc<dyn KvStore> = Arc::new(InMemoryKvStore::new());
            Ok(store)
        }
        StoreBackend::File => {
            let data_dir = cfg.path.parent().ok_or_else(|| {
                StartupError::InvalidConfig(format!("store.path {} has no parent", cfg.path.display()))
            })?;
            common::env::ensure_env(data_dir).await?;
            let store: Arc<dyn KvStore> = JsonFileKvStore::new(cfg.path.clone()).await?;
            info!(path = %cfg.path.display(), "file store opened");
            Ok(store)
        }
    }
}

/// Public entry: build the app and run the HTTP server
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let store = open_store(&cfg.store).await?;
    let app: Router = routes::build_router(ServerState::new(store));

    // Bind and serve
    let addr = cfg.server.bind_addr()?;
    info!(%addr, "starting blog server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn memory_backend_opens() -> anyhow::Result<()> {
        let cfg = StoreConfig { backend: StoreBackend::Memory, path: PathBuf::new() };
        let store = open_store(&cfg).await?;
        assert_eq!(store.get("posts").await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn file_backend_creates_data_dir() -> anyhow::Result<()> {
        let dir = std::env::temp_dir().join(format!("kvblog_startup_{}", uuid::Uuid::new_v4()));
        let cfg = StoreConfig { backend: StoreBackend::File, path: dir.join("nested").join("kv.json") };
        let store = open_store(&cfg).await?;
        store.put("users", "[]".into()).await?;
        assert!(tokio::fs::metadata(&cfg.path).await?.is_file());
        let _ = tokio::fs::remove_dir_all(&dir).await;
        Ok(())
    }
}
