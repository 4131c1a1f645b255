use anyhow::Result;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, ObservabilityConfig};

/// Initialize tracing and logging
///
/// `RUST_LOG` wins over the configured level. JSON output is used when the
/// config asks for it or `ENVIRONMENT=production`. Everything goes to stderr
/// so command output on stdout stays clean.
pub fn init_observability(config: &ObservabilityConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;

    let format = if is_production() {
        LogFormat::Json
    } else {
        config.format
    };

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_filter(env_filter),
            )
            .try_init()?,
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr)
                    .with_filter(env_filter),
            )
            .try_init()?,
    }

    tracing::debug!(
        service.name = env!("CARGO_PKG_NAME"),
        service.version = env!("CARGO_PKG_VERSION"),
        log.format = ?format,
        "Observability initialized"
    );

    Ok(())
}

fn is_production() -> bool {
    std::env::var("ENVIRONMENT")
        .map(|env| env == "production")
        .unwrap_or(false)
}
