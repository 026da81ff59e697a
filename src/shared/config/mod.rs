//! Server configuration module
//!
//! `ServerConfig` holds everything the server needs to start: listen port,
//! the host name handed out by the service locator, the URL devices upload to,
//! and where the blob slot and page fixture live on disk.
//!
//! Values are assembled with `ServerConfigBuilder`. A TOML file can be layered
//! on top of the defaults with [`ServerConfigBuilder::merge_file`]; the backend
//! applies environment overrides after that (see `backend::server::config`).

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "local.appspot.com";
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_BLOB_FILE: &str = "temp.zip";
pub const DEFAULT_PAGE_FILE: &str = "blah.json";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 100 * 1024 * 1024;
pub const DEFAULT_BROADCAST_CAPACITY: usize = 1000;

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// TCP port to listen on (all interfaces)
    pub port: u16,
    /// Host returned by the service locator and used in download URLs
    pub host: String,
    /// Base URL devices PUT archives to
    pub storage_url: String,
    /// Directory holding the blob slot and the page fixture
    pub data_dir: PathBuf,
    /// File name of the blob slot inside `data_dir`
    pub blob_file: String,
    /// File name of the page fixture inside `data_dir`
    pub page_file: String,
    /// Default tracing filter when `RUST_LOG` is not set
    pub log_level: String,
    /// Request body limit
    pub max_upload_bytes: usize,
    /// Notifications buffered per client before it starts skipping
    pub broadcast_capacity: usize,
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Full path of the blob slot
    pub fn blob_path(&self) -> PathBuf {
        self.data_dir.join(&self.blob_file)
    }

    /// Full path of the page fixture
    pub fn page_path(&self) -> PathBuf {
        self.data_dir.join(&self.page_file)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "port",
                message: "must be non-zero".to_string(),
            });
        }
        if !(self.storage_url.starts_with("http://") || self.storage_url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl(self.storage_url.clone()));
        }
        if self.host.is_empty() {
            return Err(ConfigError::MissingValue("host"));
        }
        if self.blob_file.is_empty() {
            return Err(ConfigError::MissingValue("blob_file"));
        }
        if self.broadcast_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                field: "broadcast_capacity",
                message: "must be non-zero".to_string(),
            });
        }
        Ok(())
    }
}

/// Configuration as read from a TOML file. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub port: Option<u16>,
    pub host: Option<String>,
    pub storage_url: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub blob_file: Option<String>,
    pub page_file: Option<String>,
    pub log_level: Option<String>,
    pub max_upload_bytes: Option<usize>,
    pub broadcast_capacity: Option<usize>,
}

impl FileConfig {
    /// Parse a TOML document
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Read and parse a TOML file
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml(&source)
    }
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    port: Option<u16>,
    host: Option<String>,
    storage_url: Option<String>,
    data_dir: Option<PathBuf>,
    blob_file: Option<String>,
    page_file: Option<String>,
    log_level: Option<String>,
    max_upload_bytes: Option<usize>,
    broadcast_capacity: Option<usize>,
}

impl ServerConfigBuilder {
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the upload base URL. Defaults to `http://localhost:<port>`.
    pub fn storage_url(mut self, url: impl Into<String>) -> Self {
        self.storage_url = Some(url.into());
        self
    }

    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    pub fn blob_file(mut self, name: impl Into<String>) -> Self {
        self.blob_file = Some(name.into());
        self
    }

    pub fn page_file(mut self, name: impl Into<String>) -> Self {
        self.page_file = Some(name.into());
        self
    }

    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    pub fn max_upload_bytes(mut self, bytes: usize) -> Self {
        self.max_upload_bytes = Some(bytes);
        self
    }

    pub fn broadcast_capacity(mut self, capacity: usize) -> Self {
        self.broadcast_capacity = Some(capacity);
        self
    }

    /// Apply every key present in a TOML file, overriding earlier values
    pub fn merge_file(mut self, file: FileConfig) -> Self {
        self.port = file.port.or(self.port);
        self.host = file.host.or(self.host);
        self.storage_url = file.storage_url.or(self.storage_url);
        self.data_dir = file.data_dir.or(self.data_dir);
        self.blob_file = file.blob_file.or(self.blob_file);
        self.page_file = file.page_file.or(self.page_file);
        self.log_level = file.log_level.or(self.log_level);
        self.max_upload_bytes = file.max_upload_bytes.or(self.max_upload_bytes);
        self.broadcast_capacity = file.broadcast_capacity.or(self.broadcast_capacity);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let port = self.port.unwrap_or(DEFAULT_PORT);
        let config = ServerConfig {
            port,
            host: self.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            storage_url: self
                .storage_url
                .unwrap_or_else(|| format!("http://localhost:{}", port)),
            data_dir: self.data_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
            blob_file: self.blob_file.unwrap_or_else(|| DEFAULT_BLOB_FILE.to_string()),
            page_file: self.page_file.unwrap_or_else(|| DEFAULT_PAGE_FILE.to_string()),
            log_level: self.log_level.unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            max_upload_bytes: self.max_upload_bytes.unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
            broadcast_capacity: self.broadcast_capacity.unwrap_or(DEFAULT_BROADCAST_CAPACITY),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {field}: {message}")]
    InvalidValue {
        field: &'static str,
        message: String,
    },
    #[error("failed to read {path}: {message}")]
    Read { path: PathBuf, message: String },
    #[error("invalid config file: {0}")]
    Parse(String),
}
