use std::path::PathBuf;

use anyhow::Context;
use log::info;

use crate::{
    engine::{
        clone::{GitCommandCloner, TemplateCloner},
        config::ScaffoldConfig,
        error::Result,
        name::{NameSource, ProjectName, resolve_argument, resolve_interactive},
        scaffold::{Scaffolder, Stage, transition},
    },
    ui::{cli::Cli, config::build_config_builder, output},
};

#[cfg(feature = "interactive")]
use crate::ui::prompt::InquireNameSource;

/// The primary orchestration function for the application.
pub fn run(args: Cli) -> Result<()> {
    let config = build_config_builder(&args, PathBuf::from("."), |_| {})
        .build()
        .context("Failed to build configuration")?;
    let cloner = GitCommandCloner::new().capture_output(config.quiet);

    #[cfg(feature = "interactive")]
    let mut inquire_source = InquireNameSource::new(config.base_dir.clone());
    #[cfg(feature = "interactive")]
    let prompt: Option<&mut dyn NameSource> = Some(&mut inquire_source);
    #[cfg(not(feature = "interactive"))]
    let prompt: Option<&mut dyn NameSource> = None;

    run_with(&config, prompt, cloner)
}

/// Runs one scaffolding pass: resolve → clone → strip → report.
///
/// `prompt` is only consulted when `config.interactive` is set and no name
/// was given on the command line.
pub fn run_with<C: TemplateCloner>(
    config: &ScaffoldConfig,
    prompt: Option<&mut dyn NameSource>,
    cloner: C,
) -> Result<()> {
    output::print_banner();

    let name = resolve_name(config, prompt)?;
    transition(Stage::Start, Stage::NameResolved);
    info!("Scaffolding project {name:?} from {}", config.template_url);

    output::print_cloning(name.as_str());
    let scaffolder = Scaffolder::new(cloner, config.template_url.as_str(), config.base_dir.as_path());
    let progress = config
        .quiet
        .then(|| output::spinner("Cloning template (this may take a moment)…"));
    let scaffolded = scaffolder.scaffold(&name);
    if let Some(progress) = progress {
        progress.finish();
    }
    scaffolded?;

    output::print_success(name.as_str());
    transition(Stage::MetadataStripped, Stage::Reported);
    Ok(())
}

fn resolve_name(config: &ScaffoldConfig, prompt: Option<&mut dyn NameSource>) -> Result<ProjectName> {
    if let Some(arg) = &config.project_name {
        return resolve_argument(arg, &config.base_dir);
    }

    match prompt {
        Some(source) if config.interactive => {
            resolve_interactive(source, &config.base_dir, &config.default_name)
        }
        _ => resolve_argument(&config.default_name, &config.base_dir),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::ScaffoldConfigBuilder;
    use crate::engine::error::{CloneError, ScaffoldError, ValidationError};
    use std::cell::Cell;
    use std::path::Path;
    use tempfile::tempdir;

    struct CountingCloner<'a>(&'a Cell<usize>);

    impl TemplateCloner for CountingCloner<'_> {
        fn clone_template(&self, _url: &str, destination: &Path) -> std::result::Result<(), CloneError> {
            self.0.set(self.0.get() + 1);
            std::fs::create_dir_all(destination.join(".git")).unwrap();
            Ok(())
        }
    }

    #[test]
    fn default_name_is_used_without_argument_or_prompt() {
        let dir = tempdir().unwrap();
        let calls = Cell::new(0);
        let config = ScaffoldConfigBuilder::default()
            .base_dir(dir.path())
            .build()
            .unwrap();

        run_with(&config, None, CountingCloner(&calls)).unwrap();

        assert_eq!(calls.get(), 1);
        assert!(dir.path().join("zen-starter-app").is_dir());
        assert!(!dir.path().join("zen-starter-app/.git").exists());
    }

    #[test]
    fn whitespace_argument_never_reaches_the_cloner() {
        let dir = tempdir().unwrap();
        let calls = Cell::new(0);
        let config = ScaffoldConfigBuilder::default()
            .base_dir(dir.path())
            .project_name(Some("   ".to_string()))
            .build()
            .unwrap();

        let err = run_with(&config, None, CountingCloner(&calls)).unwrap_err();

        assert!(matches!(err, ScaffoldError::Validation(ValidationError::Empty)));
        assert_eq!(calls.get(), 0);
    }

    struct Scripted(Vec<Option<&'static str>>);

    impl NameSource for Scripted {
        fn ask(&mut self, _default: &str) -> Result<String> {
            match self.0.pop() {
                Some(Some(answer)) => Ok(answer.to_string()),
                _ => Err(ScaffoldError::Cancelled),
            }
        }
    }

    #[test]
    fn cancelled_prompt_never_reaches_the_cloner() {
        let dir = tempdir().unwrap();
        let calls = Cell::new(0);
        let config = ScaffoldConfigBuilder::default()
            .base_dir(dir.path())
            .interactive(true)
            .build()
            .unwrap();
        let mut source = Scripted(vec![None]);

        let err = run_with(&config, Some(&mut source), CountingCloner(&calls)).unwrap_err();

        assert!(matches!(err, ScaffoldError::Cancelled));
        assert_eq!(calls.get(), 0);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn prompted_name_is_scaffolded() {
        let dir = tempdir().unwrap();
        let calls = Cell::new(0);
        let config = ScaffoldConfigBuilder::default()
            .base_dir(dir.path())
            .interactive(true)
            .build()
            .unwrap();
        // Answers are popped from the back: blank first, then a real name.
        let mut source = Scripted(vec![Some("from-prompt"), Some("  ")]);

        run_with(&config, Some(&mut source), CountingCloner(&calls)).unwrap();

        assert_eq!(calls.get(), 1);
        assert!(dir.path().join("from-prompt").is_dir());
        assert!(!dir.path().join("zen-starter-app").exists());
    }

    #[test]
    fn prompt_is_ignored_when_a_name_was_given() {
        let dir = tempdir().unwrap();
        let calls = Cell::new(0);
        let config = ScaffoldConfigBuilder::default()
            .base_dir(dir.path())
            .project_name(Some("my-app".to_string()))
            .interactive(true)
            .build()
            .unwrap();
        let mut source = Scripted(vec![None]);

        run_with(&config, Some(&mut source), CountingCloner(&calls)).unwrap();

        assert!(dir.path().join("my-app").is_dir());
    }
}
