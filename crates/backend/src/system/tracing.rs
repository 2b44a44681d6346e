use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initializes the tracing stack for the dashboard session.
///
/// Logs go to:
/// - stdout (with colors)
/// - target/logs/dashboard.log (without colors)
///
/// Intended to be called once by the embedding view shell; repeated calls
/// are ignored rather than panicking, so test harnesses stay quiet.
pub fn initialize() -> anyhow::Result<()> {
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("dashboard.log"))?;

    let result = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .try_init();

    if result.is_err() {
        tracing::debug!("Tracing already initialized, keeping the existing subscriber");
    }

    Ok(())
}
