#![cfg(feature = "interactive")]

use std::path::PathBuf;

use inquire::{CustomUserError, InquireError, Text, validator::Validation};

use crate::engine::error::{Result, ScaffoldError, ValidationError};
use crate::engine::name::{NameSource, ProjectName};
use crate::ui::output;

/// Asks for the project name on the terminal.
pub struct InquireNameSource {
    base_dir: PathBuf,
}

impl InquireNameSource {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }
}

impl NameSource for InquireNameSource {
    fn ask(&mut self, default: &str) -> Result<String> {
        let base_dir = self.base_dir.clone();
        let answer = Text::new("Project name:")
            .with_default(default)
            .with_help_message("A new directory with this name will be created here.")
            .with_validator(move |input: &str| -> std::result::Result<Validation, CustomUserError> {
                Ok(match ProjectName::parse(input, &base_dir) {
                    Ok(_) => Validation::Valid,
                    Err(e) => Validation::Invalid(e.to_string().into()),
                })
            })
            .prompt();

        match answer {
            Ok(name) => Ok(name),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                Err(ScaffoldError::Cancelled)
            }
            Err(e) => Err(anyhow::Error::new(e)
                .context("Failed to read project name")
                .into()),
        }
    }

    fn rejected(&mut self, err: &ValidationError) {
        output::report_failure(&ScaffoldError::Validation(err.clone()));
    }
}
