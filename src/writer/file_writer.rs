//! All-or-nothing file output.
//!
//! Bytes go to a temporary file next to the destination, which is synced and
//! then renamed over the destination. The temporary file is deleted on every
//! error path, so a failed write leaves the directory as it was.

use crate::error::{Error, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Prefix for temporary files created beside the destination.
const TEMP_PREFIX: &str = ".pdf_formgen-";

/// Write `bytes` to `dest` atomically.
pub fn write_atomic(bytes: &[u8], dest: impl AsRef<Path>) -> Result<()> {
    let dest = dest.as_ref();
    let io_err = |source: std::io::Error| Error::Io {
        path: dest.to_path_buf(),
        source,
    };

    let dir = parent_dir(dest);
    let mut temp = tempfile::Builder::new()
        .prefix(TEMP_PREFIX)
        .suffix(".tmp")
        .tempfile_in(&dir)
        .map_err(io_err)?;
    log::debug!("Writing {} bytes via {}", bytes.len(), temp.path().display());

    temp.write_all(bytes).map_err(io_err)?;
    temp.flush().map_err(io_err)?;
    temp.as_file().sync_all().map_err(io_err)?;

    // On failure `persist` hands the temp file back; dropping it removes it.
    temp.persist(dest).map_err(|e| io_err(e.error))?;
    log::info!("Wrote {}", dest.display());
    Ok(())
}

fn parent_dir(dest: &Path) -> PathBuf {
    match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
