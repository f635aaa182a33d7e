//! Changelog file operations

use std::path::Path;

use tracing::{debug, info};

use crate::error::{ChangelogError, Result};

/// Read the changelog document.
///
/// The document must already exist; a missing file is a configuration error
/// and nothing is created in its place.
pub fn read_changelog(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(ChangelogError::FileNotFound(path.to_path_buf()).into());
    }

    debug!(path = %path.display(), "reading changelog");
    let content = std::fs::read_to_string(path).map_err(ChangelogError::Io)?;
    Ok(content)
}

/// Write the updated changelog document
pub fn write_changelog(path: &Path, content: &str) -> Result<()> {
    info!(path = %path.display(), bytes = content.len(), "writing changelog");
    std::fs::write(path, content)
        .map_err(|e| ChangelogError::WriteFailed(format!("{}: {}", path.display(), e)))?;
    Ok(())
}
