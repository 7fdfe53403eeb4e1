use std::ffi::CString;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use nix::errno::Errno;
use nix::sys::statfs::statfs;

use super::{OsError, Sys};
use crate::handle::FileHandle;

/// [`Sys`] implementation issuing the real syscalls.
#[derive(Debug, Default, Clone, Copy)]
pub struct LinuxSys;

impl Sys for LinuxSys {
    fn filesystem_magic(&self, path: &Path) -> Result<u64, OsError> {
        // nix collapses codes it has no name for, errno still holds the original.
        let stat = statfs(path).map_err(|errno| match errno {
            Errno::UnknownErrno => OsError::last(),
            known => known.into(),
        })?;
        Ok(stat.filesystem_type().0 as u64)
    }

    fn name_to_handle_at(&self, path: &Path, handle: &mut FileHandle) -> Result<i32, OsError> {
        let path =
            CString::new(path.as_os_str().as_bytes()).map_err(|_| OsError::InvalidArgument)?;
        let mut mount_id: libc::c_int = 0;

        // SAFETY: `path` is NUL-terminated and `handle` points to a buffer of at
        // least 8 + handle_bytes bytes, which bounds what the kernel writes.
        let ret = unsafe {
            libc::syscall(
                libc::SYS_name_to_handle_at,
                libc::AT_FDCWD,
                path.as_ptr(),
                handle.as_mut_ptr(),
                &mut mount_id as *mut libc::c_int,
                0 as libc::c_int,
            )
        };
        if ret == -1 {
            return Err(OsError::last());
        }

        Ok(mount_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handle::INITIAL_CAPACITY;

    #[test]
    fn test_filesystem_magic_missing_path() {
        let err = LinuxSys
            .filesystem_magic(Path::new("/definitely/does/not/exist"))
            .unwrap_err();
        assert_eq!(err, OsError::NotFound);
    }

    #[test]
    fn test_filesystem_magic_tempdir() {
        let tempdir = tempfile::tempdir().unwrap();
        let magic = LinuxSys.filesystem_magic(tempdir.path()).unwrap();
        assert_ne!(magic, 0);
    }

    #[test]
    fn test_name_to_handle_at_missing_path() {
        let mut handle = FileHandle::with_capacity(INITIAL_CAPACITY);
        let err = LinuxSys
            .name_to_handle_at(Path::new("/definitely/does/not/exist"), &mut handle)
            .unwrap_err();
        assert_eq!(err, OsError::NotFound);
    }

    #[test]
    fn test_name_to_handle_at_interior_nul() {
        use std::ffi::OsStr;

        let mut handle = FileHandle::with_capacity(INITIAL_CAPACITY);
        let path = Path::new(OsStr::from_bytes(b"/sys/fs\0/cgroup"));
        let err = LinuxSys.name_to_handle_at(path, &mut handle).unwrap_err();
        assert_eq!(err, OsError::InvalidArgument);
    }
}
