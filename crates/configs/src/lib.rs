use anyhow::anyhow;
use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_FILE_PATH: &str = "data/file.json";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: DEFAULT_HOST.into(), port: DEFAULT_PORT, worker_threads: Some(4) }
    }
}

/// Which storage engine backs the API.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    #[default]
    File,
    Memory,
}

impl std::str::FromStr for StorageKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(Self::File),
            "memory" => Ok(Self::Memory),
            other => Err(anyhow!("unknown storage engine `{other}` (expected file or memory)")),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub engine: StorageKind,
    #[serde(default = "default_file_path")]
    pub path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { engine: StorageKind::default(), path: default_file_path() }
    }
}

fn default_file_path() -> String { DEFAULT_FILE_PATH.to_string() }
fn default_host() -> String { DEFAULT_HOST.to_string() }
fn default_port() -> u16 { DEFAULT_PORT }

/// `CONFIG_PATH`, or `config.toml` in the working directory.
pub fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_default() -> Result<AppConfig> {
    load_from_file(&config_path())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load `config.toml` and validate it.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Build the config from `HBNB_*` environment variables alone.
    pub fn from_env() -> Result<Self> {
        let mut cfg = AppConfig::default();
        if let Ok(host) = std::env::var("HBNB_API_HOST") {
            cfg.server.host = host;
        }
        if let Ok(port) = std::env::var("HBNB_API_PORT") {
            cfg.server.port = port
                .parse()
                .map_err(|_| anyhow!("HBNB_API_PORT must be a port number, got `{port}`"))?;
        }
        cfg.server.worker_threads = std::env::var("TOKIO_WORKER_THREADS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok());
        if let Ok(kind) = std::env::var("HBNB_TYPE_STORAGE") {
            cfg.storage.engine = kind.parse()?;
        }
        if let Ok(path) = std::env::var("HBNB_FILE_PATH") {
            cfg.storage.path = path;
        }
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Config file first, environment as fallback.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path())
    }

    /// Use the environment only when `path` does not exist. A file that is
    /// present but unreadable or invalid is an error.
    pub fn load_from(path: &str) -> Result<Self> {
        match std::fs::metadata(path) {
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::from_env(),
            _ => {}
        }
        let mut cfg = load_from_file(path).with_context(|| format!("invalid config file {path}"))?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.storage.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = DEFAULT_HOST.to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }
}

impl StorageConfig {
    pub fn validate(&self) -> Result<()> {
        if self.engine == StorageKind::File && self.path.trim().is_empty() {
            return Err(anyhow!("storage.path must be set for the file engine"));
        }
        Ok(())
    }
}
