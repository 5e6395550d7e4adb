use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Sets up the diagnostics subscriber once, before any resolution runs:
/// timestamped, leveled lines on stderr and in the log file. An unwritable
/// log file or a second init degrades silently; diagnostics must never
/// affect resolution results.
pub fn init(log_path: &Path) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let console_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    match File::create(log_path) {
        Ok(file) => {
            let file_layer = fmt::layer()
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .with_target(false);
            tracing_subscriber::registry()
                .with(filter)
                .with(console_layer)
                .with(file_layer)
                .try_init()
                .ok();
        }
        Err(_) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(console_layer)
                .try_init()
                .ok();
        }
    }
}
