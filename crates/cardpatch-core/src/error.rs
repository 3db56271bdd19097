use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatchError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("backup already exists at '{0}' (rerun after at least one second)")]
    BackupExists(PathBuf),
}
