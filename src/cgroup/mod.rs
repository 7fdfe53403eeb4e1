//! Resolution of cgroup directories to their kernel cgroup id.
//!
//! Kernel-reported events (tracepoints, BPF programs, perf samples) name cgroups by
//! their 64-bit id instead of their path. This module maps a path back to that id:
//!
//! 1. [`validate`] checks via `statfs(2)` that the path lives on a cgroup v1 or v2
//!    filesystem. Any other filesystem would happily hand out a file handle whose
//!    first payload bytes are not a cgroup id.
//! 2. [`cgroup_id`] asks `name_to_handle_at(2)` for the file handle of the path and
//!    reads the id from its payload, growing the buffer once if the kernel reports
//!    that the handle does not fit.
//!
//! Every function has a `_with` variant taking the [`Sys`](crate::os::Sys)
//! implementation to run against.
//!
//! # Platform Requirements
//!
//! - Linux with cgroup v1 or cgroup v2 mounted.
//! - A kernel built with `CONFIG_FHANDLE`.
mod error;
mod resolve;
mod validate;
mod version;

pub use error::{Error, Result};
pub use resolve::{CgroupInfo, cgroup_id, cgroup_id_with, inspect, inspect_with};
pub use validate::{validate, validate_with};
pub use version::{CGROUP_SUPER_MAGIC, CGROUP2_SUPER_MAGIC, CgroupVersion};
