//! The scaffolding run itself: clone the template, then strip its history.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{debug, info};

use crate::engine::{
    clone::TemplateCloner,
    config::VCS_METADATA_DIR,
    error::{Result, ScaffoldError, ValidationError},
    name::ProjectName,
};

/// Where a run currently is. Only used for tracing progress in the logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    NameResolved,
    ExistenceVerified,
    Cloned,
    MetadataStripped,
    Reported,
    Failed,
}

/// Turns a validated project name into a ready-to-use directory.
pub struct Scaffolder<C> {
    cloner: C,
    template_url: String,
    base_dir: PathBuf,
}

impl<C: TemplateCloner> Scaffolder<C> {
    pub fn new(cloner: C, template_url: impl Into<String>, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            cloner,
            template_url: template_url.into(),
            base_dir: base_dir.into(),
        }
    }

    /// Clones the template into `name` and strips its metadata.
    ///
    /// The destination is checked again right before cloning; nothing is
    /// cloned if it appeared since the name was validated. A failed clone
    /// leaves whatever git wrote in place.
    pub fn scaffold(&self, name: &ProjectName) -> Result<PathBuf> {
        let destination = name.destination(&self.base_dir);
        if destination.symlink_metadata().is_ok() {
            transition(Stage::NameResolved, Stage::Failed);
            return Err(ValidationError::AlreadyExists {
                name: name.to_string(),
            }
            .into());
        }
        transition(Stage::NameResolved, Stage::ExistenceVerified);

        if let Err(err) = self.cloner.clone_template(&self.template_url, &destination) {
            transition(Stage::ExistenceVerified, Stage::Failed);
            return Err(err.into());
        }
        transition(Stage::ExistenceVerified, Stage::Cloned);

        strip_vcs_metadata(&destination)?;
        transition(Stage::Cloned, Stage::MetadataStripped);

        info!("Project ready at {}", destination.display());
        Ok(destination)
    }
}

pub(crate) fn transition(from: Stage, to: Stage) {
    debug!("stage: {from:?} -> {to:?}");
}

/// Removes the clone's `.git` entry from `destination`.
///
/// Missing metadata is not an error, so this can run any number of times.
/// A `.git` *file* (as left by worktrees or submodules) is removed as well.
pub fn strip_vcs_metadata(destination: &Path) -> Result<()> {
    let meta_path = destination.join(VCS_METADATA_DIR);
    let meta = match meta_path.symlink_metadata() {
        Ok(m) => m,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No {VCS_METADATA_DIR} under {}", destination.display());
            return Ok(());
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to inspect {}", meta_path.display()))
                .map_err(ScaffoldError::from);
        }
    };

    let removed = if meta.is_dir() {
        fs::remove_dir_all(&meta_path)
    } else {
        fs::remove_file(&meta_path)
    };
    match removed {
        Err(e) if e.kind() != ErrorKind::NotFound => Err(e)
            .with_context(|| format!("Failed to remove {}", meta_path.display()))
            .map_err(ScaffoldError::from),
        _ => {
            info!("Removed {}", meta_path.display());
            Ok(())
        }
    }
}
