//! Structured logging setup for graphkit
//!
//! Solvers emit `tracing` spans and events; the binary installs a subscriber
//! writing to stderr so stdout stays reserved for results.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable consulted after `RUST_LOG`
pub const LOG_ENV_VAR: &str = "GRAPHKIT_LOG";

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "carve");
/// // Or with additional fields:
/// trace_time!(start, "carve", rooms = grid.room_count());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Directive used when no explicit level or environment override is given
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "graphkit=debug,graphkit_core=debug"
    } else {
        "graphkit=warn,graphkit_core=warn"
    }
}

/// Expand a bare level (`debug`) into directives for both crates
pub fn level_directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("graphkit={level},graphkit_core={level}")
    }
}

/// Initialize structured logging based on CLI arguments
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let directive = match log_level {
        Some(level) => level_directive(level),
        None => default_directive(verbose).to_string(),
    };

    init_with_directive(&directive, log_json)
}

fn init_with_directive(directive: &str, log_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    // Support GRAPHKIT_LOG environment variable override
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV_VAR))
        .unwrap_or_else(|_| EnvFilter::new(directive));

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(
                        tracing_subscriber::fmt::format::FmtSpan::NEW
                            | tracing_subscriber::fmt::format::FmtSpan::CLOSE,
                    ),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}
