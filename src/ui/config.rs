use std::path::PathBuf;

use crate::engine::config::ScaffoldConfigBuilder;
use crate::ui::cli::Cli;

pub fn build_config_builder(
    args: &Cli,
    base_dir: PathBuf,
    extra: impl FnOnce(&mut ScaffoldConfigBuilder),
) -> ScaffoldConfigBuilder {
    let mut b = ScaffoldConfigBuilder::default();
    b.project_name(args.project_name.clone())
        .base_dir(base_dir)
        .interactive(needs_interactive_prompt(args))
        .quiet(args.quiet);

    extra(&mut b);
    b
}

/// Prompting only makes sense when no name was given and someone is at the keyboard.
pub fn needs_interactive_prompt(args: &Cli) -> bool {
    #[cfg(feature = "interactive")]
    {
        use std::io::IsTerminal;
        args.project_name.is_none() && !args.no_interactive && std::io::stdin().is_terminal()
    }
    #[cfg(not(feature = "interactive"))]
    {
        let _ = args;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::TEMPLATE_URL;
    use clap::Parser;

    #[test]
    fn argument_disables_prompt_and_flows_into_config() {
        let args = Cli::parse_from(["create-zen", "my-app", "--quiet"]);
        let cfg = build_config_builder(&args, PathBuf::from("/tmp"), |_| {})
            .build()
            .unwrap();
        assert_eq!(cfg.project_name.as_deref(), Some("my-app"));
        assert!(!cfg.interactive);
        assert!(cfg.quiet);
        assert_eq!(cfg.template_url, TEMPLATE_URL);
    }

    #[test]
    fn no_interactive_flag_disables_prompt() {
        let args = Cli::parse_from(["create-zen", "--no-interactive"]);
        assert!(!needs_interactive_prompt(&args));
    }

    #[test]
    fn extra_closure_can_override_template() {
        let args = Cli::parse_from(["create-zen", "x"]);
        let cfg = build_config_builder(&args, PathBuf::from("."), |b| {
            b.template_url("file:///srv/template.git");
        })
        .build()
        .unwrap();
        assert_eq!(cfg.template_url, "file:///srv/template.git");
    }
}
