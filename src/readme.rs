use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Suffix appended to the README path for the pre-update copy.
pub const BACKUP_SUFFIX: &str = ".backup";

const STAGING_SUFFIX: &str = ".tmp";

/// Read the README, or return an empty string when the file does not exist yet.
pub fn read_or_empty(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(String::new()),
        Err(err) => {
            Err(err).with_context(|| format!("failed to read {}", path.display()))
        }
    }
}

/// The sibling path holding the pre-update copy: `<path>.backup`.
pub fn backup_path(path: &Path) -> PathBuf {
    path_with_suffix(path, BACKUP_SUFFIX)
}

/// Replace the README with `content`, backing up any existing copy first.
///
/// The new content lands in a sibling staging file and is renamed over the
/// README, so the README itself is never observable half-written. Returns
/// the backup path when a backup was made.
pub fn write_with_backup(path: &Path, content: &str) -> Result<Option<PathBuf>> {
    let backup = if path.exists() {
        let backup = backup_path(path);
        fs::copy(path, &backup).with_context(|| {
            format!(
                "failed to back up {} to {}",
                path.display(),
                backup.display()
            )
        })?;
        Some(backup)
    } else {
        None
    };

    let staging = path_with_suffix(path, STAGING_SUFFIX);
    fs::write(&staging, content)
        .with_context(|| format!("failed to write {}", staging.display()))?;
    fs::rename(&staging, path).with_context(|| {
        format!(
            "failed to move {} into place at {}",
            staging.display(),
            path.display()
        )
    })?;

    Ok(backup)
}

fn path_with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut full = path.as_os_str().to_os_string();
    full.push(suffix);
    PathBuf::from(full)
}
