mod cli;
mod config;
mod dispatch;
mod error;
pub mod logging;
mod runtime;

use std::ffi::OsString;
use std::io::Write;

use anyhow::Result;
use tracing::debug;

pub use cli::{DEFAULT_PROGRAM_NAME, Invocation, Parsed, parse, usage};
pub use config::{CONFIG_ENV, LauncherConfig};
pub use dispatch::{CommandRunner, SystemRunner, build_command};
pub use error::LaunchError;
pub use runtime::{resolve_runtime_binary, runtime_binary};

/// Parses `args`, then either prints usage or runs the delegated command.
///
/// Returns the process exit code. Usage text and argument errors go to `out`.
/// The configuration is only loaded once the arguments are known to be valid,
/// so `--help` works even with a broken config file.
pub fn run<I, S>(
    program: &str,
    args: I,
    load_config: impl FnOnce() -> Result<LauncherConfig>,
    runner: &dyn CommandRunner,
    out: &mut dyn Write,
) -> Result<i32>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let invocation = match parse(args) {
        Ok(Parsed::Help) => {
            write!(out, "{}", usage(program))?;
            return Ok(0);
        }
        Ok(Parsed::Run(invocation)) => invocation,
        Err(err) => {
            writeln!(out, "Error: {err}")?;
            write!(out, "{}", usage(program))?;
            return Ok(err.exit_code());
        }
    };
    debug!(?invocation, "parsed arguments");

    let config = load_config()?;
    let interpreter = runtime_binary(&config.interpreters);
    let command = build_command(interpreter, &config, &invocation);
    debug!(?command, "dispatching");

    Ok(runner.run(&command)?)
}

/// Exit code for an error that escaped [`run`].
pub fn failure_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<LaunchError>()
        .map(LaunchError::exit_code)
        .unwrap_or(error::EXIT_FAILURE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingRunner {
        calls: RefCell<Vec<Vec<OsString>>>,
        code: i32,
    }

    impl CommandRunner for RecordingRunner {
        fn run(&self, command: &[OsString]) -> Result<i32, LaunchError> {
            self.calls.borrow_mut().push(command.to_vec());
            Ok(self.code)
        }
    }

    fn launch(args: &[&str], runner: &RecordingRunner) -> (i32, String) {
        let mut out = Vec::new();
        let code = run(
            "vidgen",
            args.iter().copied(),
            || Ok(LauncherConfig::default()),
            runner,
            &mut out,
        )
        .unwrap();
        (code, String::from_utf8(out).unwrap())
    }

    /// Everything after the interpreter, which depends on the host.
    fn tail(runner: &RecordingRunner) -> Vec<OsString> {
        let calls = runner.calls.borrow();
        assert_eq!(calls.len(), 1);
        calls[0][1..].to_vec()
    }

    #[test]
    fn help_prints_usage_and_launches_nothing() {
        let runner = RecordingRunner::default();
        let (code, out) = launch(&["-c", "-h"], &runner);
        assert_eq!(code, 0);
        assert_eq!(out, usage("vidgen"));
        assert!(runner.calls.borrow().is_empty());
    }

    #[test]
    fn extra_positional_reports_error_then_usage() {
        let runner = RecordingRunner::default();
        let (code, out) = launch(&["acct1", "acct2"], &runner);
        assert_eq!(code, 1);
        assert_eq!(
            out,
            format!("Error: Unexpected argument: acct2\n{}", usage("vidgen"))
        );
        assert!(runner.calls.borrow().is_empty());
    }

    #[test]
    fn new_with_account() {
        let runner = RecordingRunner {
            code: 4,
            ..RecordingRunner::default()
        };
        let (code, out) = launch(&["-n", "acct123"], &runner);
        assert_eq!(code, 4);
        assert!(out.is_empty());
        assert_eq!(
            tail(&runner),
            vec!["src/cron.py", "video_generate", "acct123", "--new"]
        );
    }

    #[test]
    fn flags_are_reordered() {
        let runner = RecordingRunner::default();
        launch(&["--clean", "-n"], &runner);
        assert_eq!(
            tail(&runner),
            vec!["src/cron.py", "video_generate", "--new", "--clean"]
        );
    }

    #[test]
    fn no_arguments_runs_base_command() {
        let runner = RecordingRunner::default();
        launch(&[], &runner);
        assert_eq!(tail(&runner), vec!["src/cron.py", "video_generate"]);
    }

    #[test]
    fn config_is_not_loaded_for_help() {
        let runner = RecordingRunner::default();
        let mut out = Vec::new();
        let code = run(
            "vidgen",
            ["--help"],
            || Err(anyhow::anyhow!("config should not be read")),
            &runner,
            &mut out,
        )
        .unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn config_errors_propagate() {
        let runner = RecordingRunner::default();
        let mut out = Vec::new();
        let err = run(
            "vidgen",
            ["acct"],
            || Err(LaunchError::InvalidConfig("bad".to_string()).into()),
            &runner,
            &mut out,
        )
        .unwrap_err();
        assert_eq!(failure_code(&err), 1);
        assert!(runner.calls.borrow().is_empty());
    }
}
