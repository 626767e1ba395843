use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

const DEFAULT_LEVEL: &str = "warn";

/// Installs a stderr subscriber filtered by `RUST_LOG`.
///
/// Stdout is left alone: it carries the usage text and the delegated
/// command's own output.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        // Fall back to the default level if `RUST_LOG` is unset or invalid
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL)),
        )
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
