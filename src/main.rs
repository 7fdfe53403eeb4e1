use std::process::ExitCode;

use clap::Parser;

/// Entry point of the `cgroup-id` tool.
///
/// Prints the cgroup id of the given directory on stdout. Failures are logged and
/// reported through the exit code: `1` for syscall failures, `2` for usage errors,
/// `3` if the path is not on a cgroup filesystem and `4` if the file handle did not
/// fit after resizing.
///
/// # Examples
///
/// ```bash
/// RUST_LOG=debug cargo run -- /sys/fs/cgroup/user.slice
/// ```
fn main() -> ExitCode {
    env_logger::init();
    let args = cgroup_id::cli::Args::parse();

    match cgroup_id::cli::run(&cgroup_id::os::LinuxSys, &args, &mut std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
