use std::path::PathBuf;

use crate::os::OsError;

/// Errors that may occur while resolving a cgroup id.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to query filesystem statistics of `{path}`: {source}")]
    Statfs {
        path: PathBuf,
        #[source]
        source: OsError,
    },
    #[error("path `{path}` is not a cgroup mount (filesystem magic {magic:#x})")]
    NotACgroupMount { path: PathBuf, magic: u64 },
    #[error("failed to get file handle of `{path}`: {source}")]
    NameToHandle {
        path: PathBuf,
        #[source]
        source: OsError,
    },
    #[error("file handle of `{path}` does not fit in {capacity} bytes after resizing")]
    HandleTooSmallAfterResize { path: PathBuf, capacity: u32 },
}

impl Error {
    /// Returns the syscall failure behind this error, if any.
    pub fn os_error(&self) -> Option<OsError> {
        match self {
            Error::Statfs { source, .. } | Error::NameToHandle { source, .. } => Some(*source),
            Error::NotACgroupMount { .. } | Error::HandleTooSmallAfterResize { .. } => None,
        }
    }

    /// Process exit code for this error. `2` is left to command-line usage errors.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Statfs { .. } | Error::NameToHandle { .. } => 1,
            Error::NotACgroupMount { .. } => 3,
            Error::HandleTooSmallAfterResize { .. } => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
