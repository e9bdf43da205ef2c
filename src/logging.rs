//! Logging setup.
//!
//! The game owns the terminal while it runs, so log output goes to a file
//! when one is configured. Without one, records go to stderr and the default
//! filter is `warn`, which keeps play quiet after load-time diagnostics.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

pub fn init(log_path: Option<&Path>) -> Result<()> {
    let mut builder = match log_path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("create log file {}", path.display()))?;
            let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
            builder.target(Target::Pipe(Box::new(file)));
            builder
        }
        None => Builder::from_env(Env::default().default_filter_or("warn")),
    };
    builder.try_init().context("install logger")?;
    Ok(())
}
