//! cgroup-id: maps Linux cgroup directories to the 64-bit cgroup id the kernel uses
//! to name them in tracepoints, BPF events and perf samples.
//!
//! The crate validates that a path lives on a cgroup v1 or v2 filesystem and then
//! reads the id from the file handle returned by `name_to_handle_at(2)`.
//!
//! ```no_run
//! let id = cgroup_id::cgroup_id("/sys/fs/cgroup/user.slice")?;
//! println!("{id}");
//! # Ok::<(), cgroup_id::cgroup::Error>(())
//! ```
pub mod cgroup;
pub mod cli;
pub mod handle;
pub mod os;

pub use cgroup::{CgroupInfo, CgroupVersion, cgroup_id, inspect, validate};
