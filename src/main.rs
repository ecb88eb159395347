//! Text Field Playground - Main Entry Point

use text_field::app::application::run_app;
use text_field::constants::LOG_FILE_NAME;
use text_field::helpers::get_or_create_log_dir;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log to stderr and, when the log directory is available, to a daily rolling file.
///
/// The returned guard flushes the file writer when dropped.
fn init_tracing() -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stderr_layer = fmt::layer().with_writer(std::io::stderr);

    match get_or_create_log_dir() {
        Ok(dir) => {
            let file_appender = tracing_appender::rolling::daily(&dir, LOG_FILE_NAME);
            let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .with(fmt::layer().with_ansi(false).with_writer(file_writer))
                .init();
            tracing::info!(dir = ?dir, "Writing logs to file");
            Some(guard)
        }
        Err(e) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .init();
            tracing::warn!(error = %e, "Log directory unavailable, logging to stderr only");
            None
        }
    }
}

fn main() {
    let _guard = init_tracing();

    tracing::info!("Starting Text Field Playground...");

    // Run the GPUI application
    run_app();
}
