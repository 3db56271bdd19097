//! Read / compare / backup-then-overwrite protocol for a stylesheet file.
//!
//! The patched text is computed as a pure function of the original. Nothing
//! is written unless the two differ; when they do, the backup write must
//! land before the overwrite so the original stays recoverable if the
//! second write fails. Two sequential writes, no rollback.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::PatchError;
use crate::transform::patch_stylesheet;

const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Result of one patch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// Transforms produced text identical to the input; no file was touched.
    Unchanged,
    /// The file was overwritten; the pre-patch content lives at `backup_path`.
    Patched { backup_path: PathBuf },
}

/// Patch the stylesheet at `path` in place, writing a timestamped backup of
/// the original first. A no-op run performs no writes at all.
///
/// # Errors
///
/// [`PatchError::BackupExists`] if the computed backup path is already
/// occupied (two runs within the same second); [`PatchError::Io`] for any
/// read or write failure, including non-UTF-8 content.
pub fn patch_file(path: &Path) -> Result<PatchOutcome, PatchError> {
    let original = fs::read_to_string(path)?;
    let patched = patch_stylesheet(&original);

    if patched == original {
        tracing::debug!(path = %path.display(), "stylesheet already patched");
        return Ok(PatchOutcome::Unchanged);
    }

    let timestamp = Local::now().format(BACKUP_TIMESTAMP_FORMAT).to_string();
    let backup_path = backup_path_for(path, &timestamp);

    write_backup(&backup_path, &original)?;
    tracing::debug!(backup = %backup_path.display(), "wrote pre-patch backup");

    fs::write(path, &patched)?;
    tracing::debug!(path = %path.display(), "overwrote stylesheet with patched content");

    Ok(PatchOutcome::Patched { backup_path })
}

/// `style.css` patched at `20260829-153000` backs up to
/// `style.css.bak.20260829-153000`, alongside the original.
fn backup_path_for(path: &Path, timestamp: &str) -> PathBuf {
    let name = path
        .file_name()
        .map_or_else(|| String::from("stylesheet"), |n| n.to_string_lossy().into_owned());
    path.with_file_name(format!("{name}.bak.{timestamp}"))
}

fn write_backup(backup_path: &Path, content: &str) -> Result<(), PatchError> {
    // create_new: a same-second rerun must fail loudly, never clobber an
    // earlier backup.
    let mut file = OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(backup_path)
        .map_err(|err| {
            if err.kind() == std::io::ErrorKind::AlreadyExists {
                PatchError::BackupExists(backup_path.to_path_buf())
            } else {
                PatchError::Io(err)
            }
        })?;
    file.write_all(content.as_bytes())?;
    Ok(())
}
