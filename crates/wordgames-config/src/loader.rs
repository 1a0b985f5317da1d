//! Configuration loader with layered sources.

use crate::{AppConfig, Persistence};
use config::{Config, ConfigError, Environment, File};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use wordgames_core::WordgamesError;

/// Prefix for environment variable overrides, e.g. `WORDGAMES__SERVER__PORT`.
pub const ENV_PREFIX: &str = "WORDGAMES";

/// Configuration loader with layered sources.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order, later sources
    /// overriding earlier ones:
    /// 1. `{config_dir}/default.toml`
    /// 2. `{config_dir}/{environment}.toml`
    /// 3. `{config_dir}/local.toml` (not committed to version control)
    /// 4. every `*.toml` in `override_dir`, in lexically sorted order
    /// 5. environment variables with the `WORDGAMES__` prefix
    pub fn new(
        config_dir: impl Into<PathBuf>,
        override_dir: Option<PathBuf>,
    ) -> Result<Self, WordgamesError> {
        let config = Self::load_config(&config_dir.into(), override_dir.as_deref())?;
        Ok(Self { config })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location(override_dir: Option<PathBuf>) -> Result<Self, WordgamesError> {
        Self::new("./config", override_dir)
    }

    /// Returns the loaded configuration.
    #[must_use]
    pub fn get(&self) -> AppConfig {
        self.config.clone()
    }

    fn load_config(config_dir: &Path, override_dir: Option<&Path>) -> Result<AppConfig, WordgamesError> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("WORDGAMES_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for name in ["default", environment.as_str(), "local"] {
            let path = config_dir.join(format!("{name}.toml"));
            if path.exists() {
                debug!("Loading config from: {}", path.display());
                builder = builder.add_source(File::from(path).required(false));
            }
        }

        if let Some(dir) = override_dir {
            for path in toml_files_sorted(dir)? {
                debug!("Loading override config from: {}", path.display());
                builder = builder.add_source(File::from(path).required(true));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_error)?;
        let mut app_config: AppConfig = config.try_deserialize().map_err(config_error)?;
        app_config.app.environment = environment;

        validate_config(&app_config)?;

        Ok(app_config)
    }
}

/// Lists `*.toml` files in `dir`, sorted so that `02-b.toml` overrides `01-a.toml`.
fn toml_files_sorted(dir: &Path) -> Result<Vec<PathBuf>, WordgamesError> {
    let entries = std::fs::read_dir(dir).map_err(|e| {
        WordgamesError::Configuration(format!("Cannot read config directory {}: {}", dir.display(), e))
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| WordgamesError::Configuration(e.to_string()))?
            .path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "toml") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Validates the configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), WordgamesError> {
    if config.server.port == 0 {
        return Err(WordgamesError::Configuration("Server port must be non-zero".to_string()));
    }

    if config.database.persistence == Persistence::Postgres {
        if config.database.url.is_empty() {
            return Err(WordgamesError::Configuration("Database URL is required".to_string()));
        }
        if config.database.max_connections == 0 {
            return Err(WordgamesError::Configuration(
                "database.max_connections must be at least 1".to_string(),
            ));
        }
        if config.database.min_connections > config.database.max_connections {
            return Err(WordgamesError::Configuration(format!(
                "database.min_connections ({}) exceeds database.max_connections ({})",
                config.database.min_connections, config.database.max_connections
            )));
        }
    }

    Ok(())
}

fn config_error(err: ConfigError) -> WordgamesError {
    WordgamesError::Configuration(err.to_string())
}
