use std::io;

use crate::config::ConfigError;

#[derive(thiserror::Error, Debug)]
pub enum DeployError {
    #[error("Unknown action \"{0}\"")]
    UnknownAction(String),
    #[error("Cannot run an empty command")]
    EmptyCommand,
    #[error("Failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("Command `{command}` failed with {}", describe_code(.code))]
    CommandFailed { command: String, code: Option<i32> },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {code}"),
        None => "no exit status (terminated by signal)".to_string(),
    }
}

impl DeployError {
    /// Exit code the process should terminate with for this error.
    ///
    /// A failed external command hands its own status through when it fits in a
    /// process exit code; everything else maps to `1`.
    pub fn exit_code(&self) -> u8 {
        match self {
            DeployError::CommandFailed {
                code: Some(code), ..
            } => u8::try_from(*code).ok().filter(|c| *c != 0).unwrap_or(1),
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed(code: Option<i32>) -> DeployError {
        DeployError::CommandFailed {
            command: "gcloud ai-platform".to_string(),
            code,
        }
    }

    #[test]
    fn command_failure_forwards_child_exit_code() {
        assert_eq!(failed(Some(3)).exit_code(), 3);
        assert_eq!(failed(Some(255)).exit_code(), 255);
    }

    #[test]
    fn out_of_range_or_missing_codes_fall_back_to_one() {
        assert_eq!(failed(None).exit_code(), 1);
        assert_eq!(failed(Some(-1)).exit_code(), 1);
        assert_eq!(failed(Some(256)).exit_code(), 1);
        assert_eq!(DeployError::EmptyCommand.exit_code(), 1);
    }

    #[test]
    fn messages_name_the_failing_command() {
        assert_eq!(
            failed(Some(2)).to_string(),
            "Command `gcloud ai-platform` failed with exit status 2"
        );
        assert_eq!(
            DeployError::UnknownAction("deploy_all".to_string()).to_string(),
            "Unknown action \"deploy_all\""
        );
    }
}
