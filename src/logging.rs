use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "SHIFTGRID_LOG";

fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default))
}

/// Log to a file. The grid owns the terminal, so this is the only sink while it runs.
pub fn init_file_logging(path: &Path) -> Result<(), std::io::Error> {
    let file = File::create(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter("shiftgrid=info"))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Log warnings and errors to stderr (non-interactive commands).
pub fn init_stderr_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter("shiftgrid=warn"))
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}
