//! Logger setup for the binaries.
//!
//! The engine logs through the `log` facade. `RUST_LOG` always overrides the
//! default filter.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

/// Send log records to `path`, truncating it.
///
/// The interactive runner owns the terminal, so it never logs to stderr.
pub fn init_file(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    Builder::from_env(Env::default().default_filter_or("debug"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("logger already initialised")?;
    Ok(())
}

/// Send log records to stderr, `warn` and above unless `RUST_LOG` says otherwise.
pub fn init_stderr() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or("warn"))
        .target(Target::Stderr)
        .try_init()
        .context("logger already initialised")?;
    Ok(())
}
