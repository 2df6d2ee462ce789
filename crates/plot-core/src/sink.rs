// File: crates/plot-core/src/sink.rs
// Summary: Persist encoded images to a named output path.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{PlotError, Result};

/// Write `bytes` to `path`, creating missing parent directories.
pub fn write_png(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| PlotError::sink(parent, e))?;
    }
    fs::write(path, bytes).map_err(|e| PlotError::sink(path, e))?;
    info!(path = %path.display(), bytes = bytes.len(), "wrote image");
    Ok(())
}
