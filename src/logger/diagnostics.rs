use anyhow::{Result, anyhow};
use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

pub struct DiagnosticsConfig {
    pub filter: String,
}

/// Handle to the process-wide `tracing` subscriber that receives the
/// crate's own notices. Kept apart from any [`FileLogger`](super::FileLogger)
/// so a broken log file never hides its own failure.
pub struct Diagnostics {
    reload_handle: reload::Handle<EnvFilter, Registry>,
}

impl Diagnostics {
    pub fn new_bootstrap() -> Self {
        let filter = EnvFilter::new("info");
        let (filter, reload_handle) = reload::Layer::new(filter);

        // A host may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init();

        Self { reload_handle }
    }

    pub fn reload_from_config(&self, config: &DiagnosticsConfig) -> Result<()> {
        let filter = EnvFilter::try_new(&config.filter).map_err(|e| anyhow!(e))?;
        self.reload_handle.reload(filter).map_err(|e| anyhow!(e))?;
        Ok(())
    }
}
