pub mod cli;
pub mod config;
pub mod output;

#[cfg(feature = "interactive")]
pub mod prompt;
