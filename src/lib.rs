// src/lib.rs

//! Internal library for create-zen – not published on crates.io

pub mod app_controller;
pub mod engine;
pub mod ui;

// Re-export a narrow, testable API surface
pub use engine::{
    clone::{GitCommandCloner, TemplateCloner},
    config::{ScaffoldConfig, ScaffoldConfigBuilder},
    error::{CloneError, ScaffoldError, ValidationError},
    name::{NameSource, ProjectName},
    scaffold::{Scaffolder, strip_vcs_metadata},
};
