/**
 * Server Configuration Loading
 *
 * Assembles a `ServerConfig` from, in increasing priority:
 * 1. Built-in defaults
 * 2. A TOML file: `$FAKECLOUD_CONFIG`, or `fakecloud.toml` in the working
 *    directory if it exists
 * 3. Environment variables: `PORT`, `DATADIR`, `STORAGE_URL`, `CLOUD_HOST`
 *
 * `.env` is loaded by the binary before this runs, so its values count as
 * environment variables.
 */

use std::path::Path;

use crate::shared::config::FileConfig;
use crate::shared::{ConfigError, ServerConfig, ServerConfigBuilder};

/// Environment variable naming the config file
pub const CONFIG_PATH_ENV: &str = "FAKECLOUD_CONFIG";

/// Config file picked up from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "fakecloud.toml";

/// Load the server configuration from file and environment
///
/// # Errors
///
/// - The file named by `FAKECLOUD_CONFIG` cannot be read or parsed
/// - `PORT` is not a valid port number
/// - The resulting configuration fails validation
pub fn load_config() -> Result<ServerConfig, ConfigError> {
    let mut builder = ServerConfig::builder();

    match std::env::var(CONFIG_PATH_ENV) {
        Ok(path) => {
            tracing::info!("Loading configuration from {}", path);
            builder = builder.merge_file(FileConfig::read(Path::new(&path))?);
        }
        Err(_) if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            tracing::info!("Loading configuration from {}", DEFAULT_CONFIG_FILE);
            builder = builder.merge_file(FileConfig::read(Path::new(DEFAULT_CONFIG_FILE))?);
        }
        Err(_) => {
            tracing::debug!("No configuration file, using defaults");
        }
    }

    apply_env(builder, |key| std::env::var(key).ok())?.build()
}

/// Apply environment overrides using `lookup` to read variables
pub fn apply_env(
    mut builder: ServerConfigBuilder,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<ServerConfigBuilder, ConfigError> {
    if let Some(port) = lookup("PORT") {
        let port = port.parse::<u16>().map_err(|e| ConfigError::InvalidValue {
            field: "port",
            message: format!("{:?}: {}", port, e),
        })?;
        builder = builder.port(port);
    }
    if let Some(dir) = lookup("DATADIR") {
        builder = builder.data_dir(dir);
    }
    if let Some(url) = lookup("STORAGE_URL") {
        builder = builder.storage_url(url);
    }
    if let Some(host) = lookup("CLOUD_HOST") {
        builder = builder.host(host);
    }
    Ok(builder)
}
