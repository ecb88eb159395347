//! File System Utilities
//!
//! Config and log directory management.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("dev", "text-field", "text-field").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

/// Create `dir` (and parents) if missing and return it
pub fn ensure_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(dir.to_path_buf())
}

/// Get or create the configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/text-field/` or `$XDG_CONFIG_HOME/text-field/`
/// - **macOS**: `~/Library/Application Support/dev.text-field.text-field/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\text-field\text-field\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let dirs = project_dirs()?;
    ensure_dir(dirs.config_dir())
}

/// Get or create the directory holding rolling log files (`<config>/logs`)
pub fn get_or_create_log_dir() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    ensure_dir(&config_dir.join("logs"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_dir_creates_nested_dirs() {
        let root = tempfile::tempdir().expect("tempdir");
        let nested = root.path().join("a").join("b");

        let created = ensure_dir(&nested).expect("create");
        assert_eq!(created, nested);
        assert!(nested.is_dir());

        // Second call is a no-op
        assert!(ensure_dir(&nested).is_ok());
    }
}
