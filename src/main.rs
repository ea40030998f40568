use std::process::ExitCode;

use clap::Parser;

// ──────────────────────────────────────────────────────────────
//  Entry point
// ──────────────────────────────────────────────────────────────
fn main() -> ExitCode {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match create_zen::ui::cli::Cli::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            // --help and --version are not failures
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    match create_zen::app_controller::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("run failed: {err:?}");
            create_zen::ui::output::report_failure(&err);
            ExitCode::FAILURE
        }
    }
}
