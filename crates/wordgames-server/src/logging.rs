//! Tracing subscriber setup.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use wordgames_config::{LogFormat, ObservabilityConfig};
use wordgames_core::{WordgamesError, WordgamesResult};

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over `observability.log_filter` when set. Fails if a
/// subscriber is already installed.
pub fn init_logging(config: &ObservabilityConfig) -> WordgamesResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .map_err(|e| {
            WordgamesError::Configuration(format!(
                "Invalid log filter '{}': {}",
                config.log_filter, e
            ))
        })?;

    let (pretty, json) = match config.log_format {
        LogFormat::Pretty => (Some(fmt::layer().with_target(true)), None),
        LogFormat::Json => (None, Some(fmt::layer().json().with_current_span(false))),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(pretty)
        .with(json)
        .try_init()
        .map_err(|e| WordgamesError::internal(format!("Failed to install logger: {e}")))
}
