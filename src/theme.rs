//! Theme directory discovery and classification.

use anyhow::{Context, Result};
use std::path::Path;

/// Subdirectories whose presence marks a directory as an installable theme.
const MARKER_DIRS: &[&str] = &["gtk-4.0", "assets"];

/// Does `path` look like a theme directory?
///
/// Hidden entries (version-control metadata, backup dirs) never qualify,
/// regardless of their contents. Everything else qualifies when at least
/// one marker subdirectory sits directly inside it.
pub fn is_theme_dir(path: &Path) -> bool {
    let hidden = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_none_or(|n| n.starts_with('.'));
    if hidden {
        return false;
    }

    MARKER_DIRS.iter().any(|m| path.join(m).is_dir())
}

/// Names of qualifying theme directories under `themes_dir`, sorted.
pub fn list_themes(themes_dir: &Path) -> Result<Vec<String>> {
    let rd = std::fs::read_dir(themes_dir)
        .with_context(|| format!("read {}", themes_dir.display()))?;

    let mut names: Vec<String> = rd
        .flatten()
        .filter(|e| {
            let p = e.path();
            p.is_dir() && is_theme_dir(&p)
        })
        .filter_map(|e| e.file_name().into_string().ok())
        .collect();

    names.sort();
    Ok(names)
}
