//! Everything the user sees on the console.

#[cfg(feature = "colors")]
use colored::Colorize;

use crate::engine::error::{CloneError, ScaffoldError, ValidationError};

#[derive(Clone, Copy)]
enum Tint {
    Green,
    Yellow,
    Red,
    Cyan,
}

#[cfg(feature = "colors")]
fn paint<S: AsRef<str>>(s: S, tint: Tint) -> String {
    let s = s.as_ref();
    match tint {
        Tint::Green => s.green(),
        Tint::Yellow => s.yellow(),
        Tint::Red => s.red(),
        Tint::Cyan => s.cyan(),
    }
    .to_string()
}
#[cfg(not(feature = "colors"))]
fn paint<S: AsRef<str>>(s: S, _tint: Tint) -> String {
    s.as_ref().into()
}

pub fn print_banner() {
    println!();
    println!(
        "✨ {} {} ✨",
        paint("Welcome to", Tint::Cyan),
        paint("ZEN!", Tint::Green)
    );
    println!();
}

pub fn print_cloning(name: &str) {
    println!(
        "🚀 {}",
        paint(format!("Cloning ZEN template into \"{name}\"..."), Tint::Yellow)
    );
}

/// Lines of the "next steps" block for a freshly created project.
pub fn next_steps(name: &str) -> Vec<String> {
    vec![
        format!("   📁 {}", paint(format!("cd {name}"), Tint::Yellow)),
        format!("   📦 {}", paint("npm install", Tint::Yellow)),
        format!("   🧑‍💻 {}", paint("npm run dev", Tint::Yellow)),
    ]
}

pub fn print_success(name: &str) {
    println!();
    println!("{}", paint("✅ All done! Your project is ready.", Tint::Green));
    println!();
    println!("👉 {}", paint("Next steps:", Tint::Cyan));
    println!();
    for line in next_steps(name) {
        println!("{line}");
    }
    println!();
    println!("🌿 Happy coding!");
    println!();
}

/// The user-facing message for a failed run, one line per entry.
pub fn failure_message(err: &ScaffoldError) -> Vec<String> {
    match err {
        ScaffoldError::Validation(ValidationError::AlreadyExists { name }) => {
            vec![format!("⛔ Directory \"{name}\" already exists!")]
        }
        ScaffoldError::Validation(ValidationError::Empty) => {
            vec!["⛔ Project name is required!".to_string()]
        }
        ScaffoldError::Clone(clone_err) => {
            let mut lines =
                vec!["❌ Clone failed. Check your internet connection or permissions.".to_string()];
            match clone_err {
                CloneError::Failed { .. } => {
                    if let Some(stderr) = clone_err.captured_stderr() {
                        lines.extend(stderr.lines().map(|l| format!("   {l}")));
                    }
                }
                other => lines.push(format!("   {other}")),
            }
            lines
        }
        ScaffoldError::Cancelled => vec!["❌ Aborted.".to_string()],
        ScaffoldError::Unexpected(e) => vec![format!("❌ {e:#}")],
    }
}

pub fn report_failure(err: &ScaffoldError) {
    for line in failure_message(err) {
        eprintln!("{}", paint(line, Tint::Red));
    }
}

/// A spinner shown while the clone runs with its output hidden.
pub struct Progress {
    #[cfg(feature = "interactive")]
    bar: indicatif::ProgressBar,
}

impl Progress {
    pub fn finish(self) {
        #[cfg(feature = "interactive")]
        self.bar.finish_and_clear();
    }
}

#[cfg(feature = "interactive")]
pub fn spinner(msg: &str) -> Progress {
    use indicatif::{ProgressBar, ProgressStyle};

    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        bar.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    bar.set_message(msg.to_string());
    bar.enable_steady_tick(std::time::Duration::from_millis(100));
    Progress { bar }
}

#[cfg(not(feature = "interactive"))]
pub fn spinner(_msg: &str) -> Progress {
    Progress {}
}
