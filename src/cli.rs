use std::ffi::OsString;

use crate::error::LaunchError;

/// Name shown in the usage line when `argv[0]` is unavailable.
pub const DEFAULT_PROGRAM_NAME: &str = "vidgen";

/// Flags and account forwarded to the delegated command.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub force_new: bool,
    pub clean_sessions: bool,
    pub account_id: Option<OsString>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    Help,
    Run(Invocation),
}

/// Scans arguments left to right in a single pass.
///
/// `-h`/`--help` wins as soon as it is seen. Any token that is not one of the
/// known flags is a positional; only one positional is accepted and the
/// second one is reported as unexpected. Positionals are kept as raw
/// `OsString`s so non-UTF-8 account ids reach the child untouched.
pub fn parse<I, S>(args: I) -> Result<Parsed, LaunchError>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut invocation = Invocation::default();

    for arg in args {
        let arg = arg.into();
        match arg.to_str() {
            Some("-n" | "--new") => invocation.force_new = true,
            Some("-c" | "--clean") => invocation.clean_sessions = true,
            Some("-h" | "--help") => return Ok(Parsed::Help),
            _ if invocation.account_id.is_none() => invocation.account_id = Some(arg),
            _ => {
                return Err(LaunchError::UnexpectedArgument(
                    arg.to_string_lossy().into_owned(),
                ));
            }
        }
    }

    Ok(Parsed::Run(invocation))
}

pub fn usage(program: &str) -> String {
    format!(
        "Usage: {program} [options] [account_id]\n\
         Options:\n  \
         -n, --new    Force create a new video session\n  \
         -c, --clean  Clean up all incomplete sessions\n  \
         -h, --help   Show this help message\n\
         \n\
         If no options are provided, the script will attempt to resume\n\
         the most recent incomplete session if one exists.\n"
    )
}
