use tracing_subscriber::{fmt, EnvFilter};

use crate::core::config::{Settings, StorageBackend};

/// Installs the global subscriber and logs where the slots live.
pub fn init_tracing(settings: &Settings) -> anyhow::Result<()> {
    let builder = fmt().with_env_filter(log_filter(settings)).with_target(false);

    if settings.telemetry().json {
        builder.json().try_init().map_err(|err| anyhow::anyhow!(err.to_string()))?;
    } else {
        builder.try_init().map_err(|err| anyhow::anyhow!(err.to_string()))?;
    }

    let storage = settings.storage();
    tracing::info!(
        environment = settings.runtime().environment.as_str(),
        backend = backend_name(storage.backend),
        data_dir = %storage.data_dir.display(),
        data_key = %storage.data_key,
        session_key = %storage.session_key,
        "Telemetry initialised"
    );

    Ok(())
}

/// `RUST_LOG` wins; otherwise the configured level, falling back to `info`
/// when that level does not parse.
fn log_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.telemetry().log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

fn backend_name(backend: StorageBackend) -> &'static str {
    match backend {
        StorageBackend::File => "file",
        StorageBackend::Memory => "memory",
    }
}
