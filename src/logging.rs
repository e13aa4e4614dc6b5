use std::error::Error;

use dotenv::dotenv;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing and environment
pub fn init_tracing_and_env() -> Result<(), Box<dyn Error>> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_span_events(fmt::format::FmtSpan::CLOSE),
        )
        .try_init()?;

    Ok(())
}
