use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): every translation file was updated as requested
/// - `Failure` (1): the command ran but some or all files were not updated,
///   or the selection could not be used
/// - `Error` (2): internal error (config error, I/O failure, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    pub fn from_success(success: bool) -> Self {
        if success {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
