//! Tracing subscriber setup. Both initialisers honour `RUST_LOG` and default
//! to `info`; a second call is a no-op rather than a panic.

use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Log to stderr, for headless evaluation runs.
pub fn init_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}

/// Log to a file, for the terminal UI where stderr would corrupt the screen.
pub fn init_file(path: &Path) -> std::io::Result<()> {
    let log_file = std::fs::File::create(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
