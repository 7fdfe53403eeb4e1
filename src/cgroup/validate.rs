use std::path::Path;

use super::{CgroupVersion, Error, Result};
use crate::os::{LinuxSys, Sys};

/// Checks that `path` lives on a cgroup v1 or cgroup v2 filesystem.
///
/// # Errors
///
/// - [`Error::Statfs`] if `statfs(2)` fails, carrying the unchanged error code.
/// - [`Error::NotACgroupMount`] if the filesystem is anything but cgroupfs.
///
/// # Example
///
/// ```no_run
/// use cgroup_id::cgroup::validate;
///
/// let version = validate("/sys/fs/cgroup").unwrap();
/// println!("cgroup {version}");
/// ```
pub fn validate(path: impl AsRef<Path>) -> Result<CgroupVersion> {
    validate_with(&LinuxSys, path)
}

/// Same as [`validate`], running against the given [`Sys`].
pub fn validate_with<S: Sys + ?Sized>(sys: &S, path: impl AsRef<Path>) -> Result<CgroupVersion> {
    let path = path.as_ref();
    let magic = sys
        .filesystem_magic(path)
        .map_err(|source| Error::Statfs {
            path: path.to_path_buf(),
            source,
        })?;

    match CgroupVersion::from_magic(magic) {
        Some(version) => {
            log::debug!("`{}` is on a cgroup {} filesystem", path.display(), version);
            Ok(version)
        }
        None => Err(Error::NotACgroupMount {
            path: path.to_path_buf(),
            magic,
        }),
    }
}
