use nix::errno::Errno;

/// Failure reported by a syscall.
///
/// The three codes callers usually want to branch on get their own variant, every
/// other code is carried unchanged in [`OsError::Other`], including codes `nix`
/// has no name for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OsError {
    #[error("resource temporarily unavailable")]
    TryAgain,
    #[error("invalid argument")]
    InvalidArgument,
    #[error("no such file or directory")]
    NotFound,
    #[error("{}", describe(.0))]
    Other(i32),
}

impl OsError {
    /// Maps a raw error code. `0` means success and yields `None`.
    pub fn from_raw(code: i32) -> Option<Self> {
        if code == 0 {
            return None;
        }
        Some(Self::from_code(code))
    }

    /// Reads the calling thread's `errno` after a failed syscall.
    pub(crate) fn last() -> Self {
        Self::from_code(nix::errno::errno())
    }

    fn from_code(code: i32) -> Self {
        match code {
            libc::EAGAIN => OsError::TryAgain,
            libc::EINVAL => OsError::InvalidArgument,
            libc::ENOENT => OsError::NotFound,
            other => OsError::Other(other),
        }
    }

    /// Returns the underlying error code.
    pub fn errno(&self) -> i32 {
        match self {
            OsError::TryAgain => libc::EAGAIN,
            OsError::InvalidArgument => libc::EINVAL,
            OsError::NotFound => libc::ENOENT,
            OsError::Other(code) => *code,
        }
    }
}

fn describe(code: &i32) -> std::io::Error {
    std::io::Error::from_raw_os_error(*code)
}

impl From<Errno> for OsError {
    fn from(errno: Errno) -> Self {
        Self::from_code(errno as i32)
    }
}

impl From<OsError> for std::io::Error {
    fn from(err: OsError) -> Self {
        std::io::Error::from_raw_os_error(err.errno())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_zero_is_success() {
        assert_eq!(OsError::from_raw(0), None);
    }

    #[test]
    fn test_from_raw_named_codes() {
        assert_eq!(OsError::from_raw(libc::EAGAIN), Some(OsError::TryAgain));
        assert_eq!(
            OsError::from_raw(libc::EINVAL),
            Some(OsError::InvalidArgument)
        );
        assert_eq!(OsError::from_raw(libc::ENOENT), Some(OsError::NotFound));
    }

    #[test]
    fn test_from_raw_passes_other_codes_through() {
        let err = OsError::from_raw(libc::EOVERFLOW).unwrap();
        assert_eq!(err, OsError::Other(libc::EOVERFLOW));
        assert_eq!(err.errno(), libc::EOVERFLOW);

        let err = OsError::from_raw(libc::EACCES).unwrap();
        assert_eq!(err, OsError::Other(libc::EACCES));
    }

    #[test]
    fn test_unknown_codes_keep_their_value() {
        for code in [4000, 200, -5] {
            let err = OsError::from_raw(code).unwrap();
            assert_eq!(err, OsError::Other(code));
            assert_eq!(err.errno(), code);

            let io: std::io::Error = err.into();
            assert_eq!(io.raw_os_error(), Some(code));
            assert!(err.to_string().contains(&code.to_string()));
        }
    }

    #[test]
    fn test_errno_round_trips_named_codes() {
        for code in [libc::EAGAIN, libc::EINVAL, libc::ENOENT, libc::EPERM] {
            assert_eq!(OsError::from_raw(code).unwrap().errno(), code);
        }
    }

    #[test]
    fn test_from_errno() {
        assert_eq!(OsError::from(Errno::ENOENT), OsError::NotFound);
        assert_eq!(OsError::from(Errno::EPERM), OsError::Other(libc::EPERM));
    }

    fn set_errno(code: i32) {
        // SAFETY: `__errno_location` points to the calling thread's errno.
        unsafe { *libc::__errno_location() = code };
    }

    #[test]
    fn test_last_reads_thread_errno() {
        set_errno(4000);
        assert_eq!(OsError::last(), OsError::Other(4000));
        set_errno(libc::EAGAIN);
        assert_eq!(OsError::last(), OsError::TryAgain);
    }

    #[test]
    fn test_into_io_error_keeps_code() {
        let err: std::io::Error = OsError::NotFound.into();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
        assert_eq!(err.raw_os_error(), Some(libc::ENOENT));
    }
}
