//! Tracing subscriber setup for applications embedding the client.

use std::env;

use tracing_subscriber::{EnvFilter, fmt};

/// Install a global subscriber filtered by `RUST_LOG` (default `info`).
///
/// Set `LOG_FORMAT=json` for one JSON object per event. Calling it twice keeps the first
/// subscriber.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true);

    let installed = if json_output(env::var("LOG_FORMAT").ok().as_deref()) {
        builder.json().try_init()
    } else {
        builder.with_ansi(true).try_init()
    };

    match installed {
        Ok(()) => tracing::info!("logger initialized"),
        Err(e) => tracing::debug!("logger already initialized: {}", e),
    }
}

fn json_output(format: Option<&str>) -> bool {
    format.is_some_and(|f| f.eq_ignore_ascii_case("json"))
}
