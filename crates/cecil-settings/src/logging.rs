use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize a tracing subscriber for settings diagnostics.
///
/// Corrupt-file warnings and save errors from the store go through
/// `tracing`; this installs a compact stdout formatter for them. The
/// `RUST_LOG` environment variable selects the level, defaulting to
/// "info".
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_init_then_open() {
        // Only one subscriber per process
        let _ = init();

        let dir = tempfile::tempdir().unwrap();
        let store = crate::SettingsStore::open(crate::SettingsLayout::new(dir.path()));
        assert_eq!(store.origin(), crate::Origin::Created);
    }
}
