/// Log setup.  The game owns the terminal, so events only go to a file, and
/// only when `ALIEN_INVASION_LOG` names one.

use std::env;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use tracing_subscriber::filter::EnvFilter;

pub const LOG_PATH_VAR: &str = "ALIEN_INVASION_LOG";

pub fn log_path() -> Option<PathBuf> {
    env::var_os(LOG_PATH_VAR)
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
}

/// Install the global subscriber if a log file was requested.
/// `RUST_LOG` filters as usual, defaulting to `info`.
pub fn init() -> anyhow::Result<()> {
    let Some(path) = log_path() else {
        return Ok(());
    };
    let file = File::create(&path)
        .with_context(|| format!("creating log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("installing tracing subscriber")?;
    tracing::info!(path = %path.display(), "logging enabled");
    Ok(())
}
