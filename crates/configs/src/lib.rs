use std::path::{Path, PathBuf};

use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8080, worker_threads: Some(4) }
    }
}

/// Which key-value backend holds the `posts` and `users` blobs.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Memory,
    #[default]
    File,
}

impl std::str::FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StoreBackend::Memory),
            "file" => Ok(StoreBackend::File),
            other => Err(anyhow!("unknown store backend `{other}` (expected memory or file)")),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { backend: StoreBackend::default(), path: default_store_path() }
    }
}

fn default_store_path() -> PathBuf { PathBuf::from("data/kv.json") }

/// `CONFIG_PATH`, or `config.toml` when unset.
pub fn config_path() -> PathBuf {
    PathBuf::from(std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string()))
}

pub fn load_default() -> Result<AppConfig> {
    load_from_file(config_path())
}

pub fn load_from_file(path: impl AsRef<Path>) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Build a config from `SERVER_HOST`, `SERVER_PORT`, `STORE_BACKEND`, `STORE_PATH`
    /// and `TOKIO_WORKER_THREADS`, used when no config file is present.
    pub fn from_env() -> Result<Self> {
        let mut cfg = AppConfig::default();
        if let Ok(host) = std::env::var("SERVER_HOST") {
            cfg.server.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            cfg.server.port = port;
        }
        if let Some(w) = std::env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok()) {
            cfg.server.worker_threads = Some(w);
        }
        if let Ok(backend) = std::env::var("STORE_BACKEND") {
            cfg.store.backend = backend.parse()?;
        }
        if let Ok(path) = std::env::var("STORE_PATH") {
            cfg.store.path = PathBuf::from(path);
        }
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Config file first, environment second.
    pub fn load() -> Result<(Self, ConfigSource)> {
        Self::load_with_fallback(config_path())
    }

    /// A missing file falls back to the environment quietly. A file that fails to parse or
    /// validate also falls back, but the error is handed back for the caller to report.
    pub fn load_with_fallback(path: impl AsRef<Path>) -> Result<(Self, ConfigSource)> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok((Self::from_env()?, ConfigSource::Env));
        }
        let from_file = load_from_file(path).and_then(|mut cfg| {
            cfg.normalize_and_validate()?;
            Ok(cfg)
        });
        match from_file {
            Ok(cfg) => Ok((cfg, ConfigSource::File(path.to_path_buf()))),
            Err(e) => {
                let err = e.context(format!("ignoring {}", path.display()));
                Ok((Self::from_env()?, ConfigSource::EnvAfterInvalidFile(err)))
            }
        }
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.store.validate()?;
        Ok(())
    }
}

/// Where [`AppConfig::load`] found its values.
#[derive(Debug)]
pub enum ConfigSource {
    File(PathBuf),
    Env,
    EnvAfterInvalidFile(anyhow::Error),
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        match self.worker_threads {
            Some(w) if w > 0 => {}
            _ => self.worker_threads = Some(4),
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> Result<std::net::SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

impl StoreConfig {
    pub fn validate(&self) -> Result<()> {
        if self.backend == StoreBackend::File && self.path.as_os_str().is_empty() {
            return Err(anyhow!("store.path is required for the file backend"));
        }
        Ok(())
    }
}
