//! Library half of the Lisq shell.
//!
//! The binary stays a thin argument dispatcher; command implementations
//! and the REPL live here where tests can reach them.

pub mod commands;
pub mod repl;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call more than once; does nothing unless `RUST_LOG` is set,
/// so normal shell output stays clean. Enable with e.g.
/// `RUST_LOG=lisq_parse=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
