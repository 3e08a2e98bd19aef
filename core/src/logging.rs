//! Tracing setup shared by the audit binaries.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

pub const LOG_ENV: &str = "PAGE_AUDIT_LOG";

/// Installs the global subscriber once.
///
/// Reads `PAGE_AUDIT_LOG` for filter directives, e.g.
/// `PAGE_AUDIT_LOG=page_audit_core=debug`. Falls back to `warn` when unset or invalid.
///
/// Events go to stderr; stdout carries only the report.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .try_init();
    });
}
