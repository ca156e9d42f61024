use anyhow::Result;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Installs the global tracing subscriber. Call once, before anything logs.
pub fn init_logging() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
