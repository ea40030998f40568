// src/engine/config.rs

use derive_builder::Builder;
use std::path::PathBuf;

/// Where every project is cloned from.
pub const TEMPLATE_URL: &str = "https://github.com/dmitry-conquer/zen-starter.git";

/// Name suggested (or used outright) when none is given.
pub const DEFAULT_PROJECT_NAME: &str = "zen-starter-app";

/// Directory the clone leaves behind and the scaffolder removes.
pub const VCS_METADATA_DIR: &str = ".git";

#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(name = "build_internal"))]
pub struct ScaffoldConfig {
    /// Name given on the command line, if any.
    #[builder(default)]
    pub project_name: Option<String>,

    /// Directory the project is created in.
    #[builder(default = "PathBuf::from(\".\")")]
    pub base_dir: PathBuf,

    #[builder(default = "TEMPLATE_URL.to_string()")]
    pub template_url: String,

    #[builder(default = "DEFAULT_PROJECT_NAME.to_string()")]
    pub default_name: String,

    /// Prompt for the name when none was given.
    #[builder(default)]
    pub interactive: bool,

    /// Hide the clone tool's output behind a spinner.
    #[builder(default)]
    pub quiet: bool,
}

impl ScaffoldConfigBuilder {
    pub fn build(&self) -> Result<ScaffoldConfig, ScaffoldConfigBuilderError> {
        self.build_internal()
    }
}
