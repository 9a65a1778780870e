/// Tracing setup.  The game owns the terminal, so logs go to a file.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::GameError;

/// Install a global subscriber writing to `path`.  `RUST_LOG` filters,
/// defaulting to `info`.
pub fn init(path: &Path) -> Result<(), GameError> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| GameError::Logging(e.to_string()))
}
