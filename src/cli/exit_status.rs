use std::process::ExitCode;

/// Exit status of the generator.
///
/// - `Success` (0): every directory was processed
/// - `Error` (2): the run stopped on a parse, I/O or config error
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every directory was processed.
    Success,
    /// The run stopped on an error (parse error, I/O error, config error).
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
