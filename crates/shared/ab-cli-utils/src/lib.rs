//! Utilities used in various CLI applications

use std::io;
use std::panic;
use std::process::exit;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Install a panic handler which exits on panics, rather than unwinding
pub fn set_exit_on_panic() {
    let default_panic_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        default_panic_hook(panic_info);
        exit(1);
    }));
}

/// Initialize logger writing to stderr.
///
/// Filtering is controlled with `RUST_LOG` environment variable, `info` level is used by default.
pub fn init_logger() {
    tracing_subscriber::registry()
        .with(
            fmt::layer().with_writer(io::stderr).with_filter(
                EnvFilter::builder()
                    .with_default_directive(LevelFilter::INFO.into())
                    .from_env_lossy(),
            ),
        )
        .init();
}
