//! Cloning the template repository.

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

use log::{debug, info};

use crate::engine::error::CloneError;

/// The one capability the scaffolder needs from version control.
pub trait TemplateCloner {
    /// Shallow-clones `url` into `destination`, blocking until done.
    fn clone_template(&self, url: &str, destination: &Path) -> Result<(), CloneError>;
}

/// Runs `git clone --depth=1` as a child process.
#[derive(Debug, Clone)]
pub struct GitCommandCloner {
    program: OsString,
    capture_output: bool,
}

impl Default for GitCommandCloner {
    fn default() -> Self {
        Self {
            program: "git".into(),
            capture_output: false,
        }
    }
}

impl GitCommandCloner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different executable instead of `git` from PATH.
    pub fn program(mut self, program: impl Into<OsString>) -> Self {
        self.program = program.into();
        self
    }

    /// Capture git's output instead of passing it through to the terminal.
    pub fn capture_output(mut self, capture: bool) -> Self {
        self.capture_output = capture;
        self
    }

    fn command(&self, url: &str, destination: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        // `--` keeps a destination starting with '-' from being read as a flag.
        cmd.args(["clone", "--depth=1", "--"]).arg(url).arg(destination);
        cmd.stdin(Stdio::null());
        cmd
    }
}

impl TemplateCloner for GitCommandCloner {
    fn clone_template(&self, url: &str, destination: &Path) -> Result<(), CloneError> {
        info!("Cloning {url} into {}", destination.display());
        let mut cmd = self.command(url, destination);
        debug!("Running: {cmd:?}");

        let spawn_err = |source| CloneError::Spawn {
            program: self.program.to_string_lossy().into_owned(),
            source,
        };

        let (status, stderr) = if self.capture_output {
            let output = cmd.output().map_err(spawn_err)?;
            (
                output.status,
                String::from_utf8_lossy(&output.stderr).into_owned(),
            )
        } else {
            let status = cmd
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .status()
                .map_err(spawn_err)?;
            (status, String::new())
        };

        if !status.success() {
            return Err(CloneError::Failed {
                code: status.code(),
                stderr,
            });
        }

        info!("Template cloned successfully");
        Ok(())
    }
}
