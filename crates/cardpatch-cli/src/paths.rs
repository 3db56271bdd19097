use std::path::{Path, PathBuf};

use anyhow::Context;

/// Expand `~`, require an existing regular file, and canonicalize.
///
/// The existence gate runs before any read so a bad path never touches the
/// filesystem beyond the metadata check.
pub fn resolve_stylesheet(raw: &Path) -> anyhow::Result<PathBuf> {
    let expanded = expand_tilde(raw);

    if !expanded.is_file() {
        anyhow::bail!("file not found: {}", expanded.display());
    }

    std::fs::canonicalize(&expanded)
        .with_context(|| format!("failed to canonicalize '{}'", expanded.display()))
}

fn expand_tilde(path: &Path) -> PathBuf {
    let Some(text) = path.to_str() else {
        return path.to_path_buf();
    };

    if text == "~" {
        return dirs::home_dir().unwrap_or_else(|| path.to_path_buf());
    }

    if let Some(rest) = text.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }

    path.to_path_buf()
}
