use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{fmt, EnvFilter};
use uoacal_domain::{LoggingConfig, UoaCalError};

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `config.filter` when it is set.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TryInitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));
    let registry = tracing_subscriber::registry().with(filter);

    if config.json {
        registry.with(fmt::layer().json()).try_init()
    } else {
        registry.with(fmt::layer()).try_init()
    }
}

/// Log the outcome of a command execution with structured fields.
///
/// `command` is a stable identifier such as `"rpc::createCalendar"`; never
/// pass request values through it.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, error: Option<&UoaCalError>) {
    let duration_ms = elapsed.as_millis() as u64;

    match error {
        None => info!(command, duration_ms, "command_execution_success"),
        Some(err) => {
            warn!(command, duration_ms, error_type = error_label(err), "command_execution_failure");
        }
    }
}

/// Convert a `UoaCalError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &UoaCalError) -> &'static str {
    match error {
        UoaCalError::Validation(_) => "validation",
        UoaCalError::Auth(_) => "auth",
        UoaCalError::TokenExchange(_) => "token_exchange",
        UoaCalError::Fetch(_) => "fetch",
        UoaCalError::Persistence(_) => "persistence",
        UoaCalError::NotFound(_) => "not_found",
        UoaCalError::CorruptData(_) => "corrupt_data",
        UoaCalError::Config(_) => "config",
        UoaCalError::Network(_) => "network",
        UoaCalError::InvalidInput(_) => "invalid_input",
        UoaCalError::Internal(_) => "internal",
    }
}
