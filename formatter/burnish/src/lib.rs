//! Batch front end for the burnish formatter.
//!
//! Everything the binary does lives here so it can be tested without
//! spawning a process: [`cli`] turns arguments into a [`cli::RunConfig`],
//! [`files`] runs the format pipeline over stdin and files.

pub mod cli;
pub mod files;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for diagnostic output on stderr.
///
/// One `-d` maps to the `debug` level, two to `trace`, which adds
/// per-file timing. A `BURNISH_LOG` environment filter overrides the
/// flag-derived level. Safe to call more than once.
pub fn init_tracing(debug: u8) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let fallback = match debug {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        };
        let filter = EnvFilter::try_from_env("BURNISH_LOG")
            .unwrap_or_else(|_| EnvFilter::new(fallback));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .init();
    });
}
