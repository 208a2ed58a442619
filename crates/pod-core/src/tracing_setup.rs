use std::fs::OpenOptions;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing for the TUI process.
///
/// The terminal is owned by the UI, so log lines go to the file named by
/// `POD_LOG_FILE` when set. Without it a subscriber is still installed so
/// spans resolve, but nothing is written.
pub fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Ok(log_path) = std::env::var("POD_LOG_FILE") {
        let file = OpenOptions::new().create(true).append(true).open(&log_path)?;
        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true);
        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}
