// src/ui/cli.rs

use clap::Parser;

// ~~~ CLI Arguments ~~~
#[derive(Parser, Debug, Clone)]
#[clap(
    name = env!("CARGO_PKG_NAME"),
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = env!("CARGO_PKG_DESCRIPTION")
)]
pub struct Cli {
    /// Name of the directory to create. Prompted for when omitted.
    pub project_name: Option<String>,

    /// Never prompt; fall back to the default name when none is given
    #[clap(long)]
    pub no_interactive: bool,

    /// Hide git's output and show a spinner instead
    #[clap(short, long)]
    pub quiet: bool,
}
