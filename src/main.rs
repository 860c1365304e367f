use colortrack::app;
use colortrack::cli::Args;
use colortrack::config;
use colortrack::logging;
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    let args: Args = argh::from_env();
    logging::init();

    // Bad colors and paths are user mistakes: report them plainly and stop
    let config = match config::build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
