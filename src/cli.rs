//! Command-line front end.
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cgroup;
use crate::os::Sys;

/// Print the kernel cgroup id of a cgroup directory.
#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Args {
    /// Path of the cgroup directory, e.g. `/sys/fs/cgroup/user.slice`.
    pub path: PathBuf,

    /// Host root filesystem mount under which absolute paths are looked up.
    #[arg(long, env = "CGROUP_ID_ROOTFS")]
    pub rootfs: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// The decimal id only.
    Text,
    /// A JSON object with path, cgroup version and id.
    Json,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Cgroup(#[from] cgroup::Error),
    #[error("failed to encode result: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to write result: {0}")]
    Write(#[from] std::io::Error),
}

impl Error {
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Cgroup(err) => err.exit_code(),
            Error::Encode(_) | Error::Write(_) => 1,
        }
    }
}

/// Maps `path` below `rootfs` when the tool runs in a container with the host
/// root mounted somewhere else. Relative paths are returned unchanged.
pub fn target_path(rootfs: Option<&Path>, path: &Path) -> PathBuf {
    match (rootfs, path.strip_prefix("/")) {
        (Some(rootfs), Ok(relative)) => rootfs.join(relative),
        _ => path.to_path_buf(),
    }
}

/// Resolves the path named by `args` and writes the result to `out`.
///
/// # Errors
///
/// Returns [`Error::Cgroup`] if resolution fails, or an encoding/write error if the
/// result cannot be printed.
pub fn run<S: Sys + ?Sized>(sys: &S, args: &Args, out: &mut impl Write) -> Result<(), Error> {
    let path = target_path(args.rootfs.as_deref(), &args.path);
    log::debug!("Resolving cgroup id of `{}`", path.display());

    let info = cgroup::inspect_with(sys, &path)?;
    match args.output {
        OutputFormat::Text => writeln!(out, "{}", info.id)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &info)?;
            writeln!(out)?;
        }
    }

    Ok(())
}
