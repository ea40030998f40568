//! Error types for a scaffolding run.

use thiserror::Error;

/// A candidate project name was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("project name is required")]
    Empty,

    #[error("directory \"{name}\" already exists")]
    AlreadyExists { name: String },
}

/// The template could not be cloned.
#[derive(Error, Debug)]
pub enum CloneError {
    /// The clone program could not be started at all (usually: git is not installed).
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The clone program ran but exited unsuccessfully.
    #[error("clone exited with {}", describe_code(.code))]
    Failed { code: Option<i32>, stderr: String },
}

impl CloneError {
    /// Output the clone tool wrote to stderr, when it was captured.
    pub fn captured_stderr(&self) -> Option<&str> {
        match self {
            CloneError::Failed { stderr, .. } if !stderr.trim().is_empty() => Some(stderr.trim()),
            _ => None,
        }
    }
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("status {c}"),
        None => "no status (terminated by signal)".into(),
    }
}

/// Every way a run can end in the `Failed` state.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Clone(#[from] CloneError),

    #[error("prompt cancelled by user")]
    Cancelled,

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_match_user_wording() {
        assert_eq!(ValidationError::Empty.to_string(), "project name is required");
        assert_eq!(
            ValidationError::AlreadyExists {
                name: "my-app".into()
            }
            .to_string(),
            "directory \"my-app\" already exists"
        );
    }

    #[test]
    fn captured_stderr_ignores_blank_output() {
        let blank = CloneError::Failed {
            code: Some(128),
            stderr: "  \n".into(),
        };
        assert!(blank.captured_stderr().is_none());

        let real = CloneError::Failed {
            code: Some(128),
            stderr: "fatal: repository not found\n".into(),
        };
        assert_eq!(real.captured_stderr(), Some("fatal: repository not found"));
        assert_eq!(real.to_string(), "clone exited with status 128");
    }
}
