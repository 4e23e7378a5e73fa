use std::process::ExitCode;

/// Exit status for CLI commands, following common conventions for scanner tools.
///
/// - `Success` (0): Command completed successfully
/// - `Failure` (1): Command could not do its work (e.g., config already exists)
/// - `Error` (2): Command failed due to internal error (config parse error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command completed but could not do its work.
    Failure,
    /// Command failed due to internal error.
    Error,
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

#[cfg(test)]
mod tests {
    use super::*;

    // ExitCode exposes no equality, so compare through Debug.
    fn code_repr(status: ExitStatus) -> String {
        format!("{:?}", ExitCode::from(status))
    }

    #[test]
    fn exit_code_values() {
        assert_eq!(code_repr(ExitStatus::Success), format!("{:?}", ExitCode::from(0u8)));
        assert_eq!(code_repr(ExitStatus::Failure), format!("{:?}", ExitCode::from(1u8)));
        assert_eq!(code_repr(ExitStatus::Error), format!("{:?}", ExitCode::from(2u8)));
    }
}
