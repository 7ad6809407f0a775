//! Process-wide diagnostic logging setup.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static LOGGING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber.
///
/// The filter comes from `RUST_LOG`, defaulting to `info`. Repeated calls
/// are no-ops once initialization has run.
///
/// # Errors
///
/// Returns an error string if a global subscriber was already installed
/// by other means.
pub fn init() -> Result<(), String> {
    let mut init_result = Ok(());

    LOGGING_INIT.call_once(|| {
        init_result = tracing_subscriber::fmt()
            .with_env_filter(default_env_filter())
            .try_init()
            .map_err(|err| format!("failed to initialize logging: {err}"));
    });

    init_result
}

fn default_env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}
