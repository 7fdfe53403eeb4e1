use std::path::{Path, PathBuf};

use super::{CgroupVersion, Error, Result, validate_with};
use crate::handle::{FileHandle, INITIAL_CAPACITY};
use crate::os::{LinuxSys, OsError, Sys};

/// A resolved cgroup.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CgroupInfo {
    pub path: PathBuf,
    pub version: CgroupVersion,
    pub id: u64,
}

/// Returns the kernel cgroup id of the cgroup directory at `path`.
///
/// Relative paths are resolved against the current working directory and
/// symlinks are followed.
///
/// # Errors
///
/// - [`Error::Statfs`] / [`Error::NotACgroupMount`] from [`validate`](super::validate).
/// - [`Error::NameToHandle`] if `name_to_handle_at(2)` fails.
/// - [`Error::HandleTooSmallAfterResize`] if the handle overflows the resized buffer.
///
/// # Example
///
/// ```no_run
/// use cgroup_id::cgroup::cgroup_id;
///
/// let id = cgroup_id("/sys/fs/cgroup/user.slice").unwrap();
/// println!("user.slice: {id}");
/// ```
pub fn cgroup_id(path: impl AsRef<Path>) -> Result<u64> {
    cgroup_id_with(&LinuxSys, path)
}

/// Same as [`cgroup_id`], running against the given [`Sys`].
pub fn cgroup_id_with<S: Sys + ?Sized>(sys: &S, path: impl AsRef<Path>) -> Result<u64> {
    inspect_with(sys, path).map(|info| info.id)
}

/// Like [`cgroup_id`], additionally reporting the cgroup version.
pub fn inspect(path: impl AsRef<Path>) -> Result<CgroupInfo> {
    inspect_with(&LinuxSys, path)
}

/// Same as [`inspect`], running against the given [`Sys`].
pub fn inspect_with<S: Sys + ?Sized>(sys: &S, path: impl AsRef<Path>) -> Result<CgroupInfo> {
    let path = path.as_ref();
    let version = validate_with(sys, path)?;
    let id = resolve_handle(sys, path)?;

    Ok(CgroupInfo {
        path: path.to_path_buf(),
        version,
        id,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attempt {
    Initial,
    Resized,
}

/// Fetches the file handle of an already validated path and reads the id from it.
///
/// The first attempt offers [`INITIAL_CAPACITY`] payload bytes. If the kernel answers
/// `EOVERFLOW` it has stored the size it needs in `handle_bytes`, and exactly one more
/// attempt is made with a buffer of that size.
fn resolve_handle<S: Sys + ?Sized>(sys: &S, path: &Path) -> Result<u64> {
    let mut attempt = Attempt::Initial;
    let mut handle = FileHandle::with_capacity(INITIAL_CAPACITY);

    loop {
        log::trace!(
            "name_to_handle_at(`{}`) with {} payload bytes ({:?})",
            path.display(),
            handle.handle_bytes(),
            attempt
        );
        match sys.name_to_handle_at(path, &mut handle) {
            Ok(mount_id) => {
                let id = handle.cgroup_id();
                log::debug!(
                    "`{}` has cgroup id {} (mount id {}, handle type {}, {} payload bytes)",
                    path.display(),
                    id,
                    mount_id,
                    handle.handle_type(),
                    handle.payload().len()
                );
                return Ok(id);
            }
            Err(OsError::Other(libc::EOVERFLOW)) => match attempt {
                Attempt::Initial => {
                    let required = handle.handle_bytes();
                    log::debug!(
                        "file handle of `{}` needs {} payload bytes, retrying",
                        path.display(),
                        required
                    );
                    handle = FileHandle::with_capacity(required);
                    attempt = Attempt::Resized;
                }
                Attempt::Resized => {
                    return Err(Error::HandleTooSmallAfterResize {
                        path: path.to_path_buf(),
                        capacity: handle.capacity() as u32,
                    });
                }
            },
            Err(source) => {
                return Err(Error::NameToHandle {
                    path: path.to_path_buf(),
                    source,
                });
            }
        }
    }
}
