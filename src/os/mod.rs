//! Boundary to the kernel.
//!
//! Everything that touches the operating system goes through the [`Sys`] trait so
//! the resolution logic can be driven by a scripted implementation in tests.
//! [`LinuxSys`] is the implementation backed by the real syscalls.
mod error;
#[cfg(test)]
pub(crate) mod fake;
mod linux;

use std::path::Path;

use crate::handle::FileHandle;

pub use error::OsError;
pub use linux::LinuxSys;

/// The two kernel queries needed to map a cgroup path to its ID.
pub trait Sys {
    /// Returns the filesystem type magic (`f_type` of `statfs(2)`) of the filesystem
    /// containing `path`.
    fn filesystem_magic(&self, path: &Path) -> Result<u64, OsError>;

    /// Calls `name_to_handle_at(2)` relative to the current working directory,
    /// following symlinks, and returns the mount id reported by the kernel.
    ///
    /// On `EOVERFLOW` the kernel has stored the required payload size in the
    /// handle's `handle_bytes` field.
    fn name_to_handle_at(&self, path: &Path, handle: &mut FileHandle) -> Result<i32, OsError>;
}
