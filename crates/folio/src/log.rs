pub use tracing::{debug, error, info, trace, warn};

use crate::errors::LogError;

/// Default filter when `RUST_LOG` is not set.
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_FILTER: &str = "info,folio=debug,folio_frontend=debug";

#[cfg(all(target_arch = "wasm32", feature = "dev-logging"))]
/// Setup logging for the browser.
/// Panics are forwarded to the console and [`tracing`] events are written
/// through [`tracing-web`], with span timings reported to the Performance API.
pub fn setup() -> Result<(), LogError> {
    use tracing_subscriber::fmt::format::{FmtSpan, Pretty};
    use tracing_subscriber::fmt::time::UtcTime;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    console_error_panic_hook::set_once();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_timer(UtcTime::rfc_3339())
        .with_writer(tracing_web::MakeConsoleWriter)
        .with_span_events(FmtSpan::ACTIVE);
    let perf_layer = tracing_web::performance_layer().with_details_from_fields(Pretty::default());

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(perf_layer)
        .try_init()
        .map_err(|e| LogError::TracingSubscriber(Box::new(e)))?;

    Ok(())
}

#[cfg(all(target_arch = "wasm32", not(feature = "dev-logging")))]
/// Release builds only install the panic hook; `tracing` events are dropped.
pub fn setup() -> Result<(), LogError> {
    console_error_panic_hook::set_once();
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
/// Setup logging for native builds (tools and tests).
/// Installs [`color_eyre`] and a [`tracing_subscriber`] formatter filtered by
/// `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn setup() -> Result<(), LogError> {
    use tracing_subscriber::EnvFilter;

    color_eyre::install()?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(LogError::TracingSubscriber)?;

    Ok(())
}
