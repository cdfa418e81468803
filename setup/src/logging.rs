//! Diagnostics for the bootstrapper itself.
//!
//! stdout belongs to the build tools (and to `setup plan`); the tools' own
//! stderr is passed through as-is. Anything this module emits goes to stderr
//! next to the final `Error: ...` line, and stays quiet unless a build
//! directory could not be created or `RUST_LOG` raises the level.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber: `RUST_LOG` filter (default `warn`), compact
/// lines on stderr.
///
/// `RUST_LOG=setup=info` shows each step as it starts; `setup=debug` adds
/// directory handling and exit statuses.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
