//! Output document persistence.

use std::fs;
use std::path::Path;

use crate::error::Result;

/// Write the serialized document to `path`, creating parent directories as
/// needed. The caller decides how to report a failure; the pipeline logs it
/// and continues.
///
/// # Errors
///
/// Returns error if directory creation or the write fails.
pub fn write_document(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, contents)?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote output document");
    Ok(())
}
