//! Logging setup shared by the `mandel` and `mandelmovie` binaries.
//!
//! Diagnostics go to stderr so stdout stays free for the renderer's callers.
//! Verbosity follows `RUST_LOG` and falls back to the level passed in.

use std::io;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

pub const DEFAULT_LOG_LEVEL: &str = "info";

pub fn init_logging(default_level: &str) -> Result<(), TryInitError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_names(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init()
}
