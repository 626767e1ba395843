use std::ffi::OsString;
use std::process::{Command, ExitStatus, Stdio};

use tracing::{debug, warn};

use crate::cli::Invocation;
use crate::config::LauncherConfig;
use crate::error::{EXIT_FAILURE, LaunchError};

/// Builds `<interpreter> <entrypoint> <subcommand> [account_id] [--new] [--clean]`.
///
/// The order of the trailing tokens is fixed regardless of how they were given.
pub fn build_command(
    interpreter: &str,
    config: &LauncherConfig,
    invocation: &Invocation,
) -> Vec<OsString> {
    let mut command = vec![
        OsString::from(interpreter),
        config.entrypoint.clone().into_os_string(),
        OsString::from(&config.subcommand),
    ];
    if let Some(account_id) = &invocation.account_id {
        command.push(account_id.clone());
    }
    if invocation.force_new {
        command.push(OsString::from("--new"));
    }
    if invocation.clean_sessions {
        command.push(OsString::from("--clean"));
    }
    command
}

/// The process boundary: runs a command line and reports its exit code.
pub trait CommandRunner {
    fn run(&self, command: &[OsString]) -> Result<i32, LaunchError>;
}

/// Spawns the command with inherited stdio and waits for it.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, command: &[OsString]) -> Result<i32, LaunchError> {
        let Some((program, args)) = command.split_first() else {
            return Err(LaunchError::InvalidConfig("empty command line".to_string()));
        };

        debug!(program = ?program, args = ?args, "spawning delegated command");
        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| {
                warn!(program = ?program, error = %source, "failed to spawn delegated command");
                LaunchError::Spawn {
                    program: program.to_string_lossy().into_owned(),
                    source,
                }
            })?;

        let code = exit_code(status);
        debug!(code, "delegated command finished");
        Ok(code)
    }
}

/// Maps a child status to the code a shell would report.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;

        if let Some(signal) = status.signal() {
            warn!(signal, "delegated command terminated by signal");
            return 128 + signal;
        }
    }

    EXIT_FAILURE
}
