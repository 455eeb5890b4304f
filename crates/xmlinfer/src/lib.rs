//! xmlinfer command-line front end.
//!
//! Inference and code generation live in `xmlinfer-typegen`; this crate adds
//! layered configuration, logging setup and the `xmlinfer` binary.

pub mod commands;
pub mod config;

pub use config::XmlinferConfig;

use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// `RUST_LOG` controls the filter (default `warn`); `verbose` forces `debug`.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
