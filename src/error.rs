use std::io;

use thiserror::Error;

/// Exit code for argument and configuration failures.
pub const EXIT_USAGE: i32 = 1;
/// Exit code for launch failures with no more specific shell convention.
pub const EXIT_FAILURE: i32 = 1;
/// Shell convention for "command not found".
pub const EXIT_NOT_FOUND: i32 = 127;
/// Shell convention for "found but not executable".
pub const EXIT_NOT_EXECUTABLE: i32 = 126;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Unexpected argument: {0}")]
    UnexpectedArgument(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to launch '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::UnexpectedArgument(_) | LaunchError::InvalidConfig(_) => EXIT_USAGE,
            LaunchError::Spawn { source, .. } => match source.kind() {
                io::ErrorKind::NotFound => EXIT_NOT_FOUND,
                io::ErrorKind::PermissionDenied => EXIT_NOT_EXECUTABLE,
                _ => EXIT_FAILURE,
            },
        }
    }
}
