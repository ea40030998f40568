//! Project name resolution: validation plus the interactive re-prompt loop.

use std::fmt;
use std::path::{Path, PathBuf};

use log::debug;

use crate::engine::error::{Result, ScaffoldError, ValidationError};

/// A validated project name: trimmed, non-empty, and not yet present on disk
/// at the time it was checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    /// Validates `candidate` against the entries of `base_dir`.
    ///
    /// Only reads the filesystem. Anything already at the path counts as a
    /// collision, including plain files and dangling symlinks.
    pub fn parse(candidate: &str, base_dir: &Path) -> std::result::Result<Self, ValidationError> {
        let name = candidate.trim();
        if name.is_empty() {
            return Err(ValidationError::Empty);
        }
        if base_dir.join(name).symlink_metadata().is_ok() {
            return Err(ValidationError::AlreadyExists {
                name: name.to_string(),
            });
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Destination directory for this project under `base_dir`.
    pub fn destination(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.0)
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Something that can be asked for a project name, one blocking read at a time.
pub trait NameSource {
    /// Returns the next candidate, or `ScaffoldError::Cancelled` if the user gave up.
    fn ask(&mut self, default: &str) -> Result<String>;

    /// Called with each rejected candidate before asking again.
    fn rejected(&mut self, _err: &ValidationError) {}
}

/// Keeps asking `source` until it yields a valid name.
pub fn resolve_interactive<S: NameSource + ?Sized>(
    source: &mut S,
    base_dir: &Path,
    default: &str,
) -> Result<ProjectName> {
    loop {
        let candidate = source.ask(default)?;
        match ProjectName::parse(&candidate, base_dir) {
            Ok(name) => {
                debug!("resolved project name interactively: {name}");
                return Ok(name);
            }
            Err(err) => {
                debug!("rejected project name {candidate:?}: {err}");
                source.rejected(&err);
            }
        }
    }
}

/// Validates a name that came from the command line; no second chance.
pub fn resolve_argument(candidate: &str, base_dir: &Path) -> Result<ProjectName> {
    ProjectName::parse(candidate, base_dir).map_err(ScaffoldError::from)
}
