use std::env;
use std::process::ExitCode;

use clap::Parser;

use passform::cli::{self, CliError, CliFlags, prompts, quiet};
use passform::settings::Settings;
use passform::{exits, logging, tui};

fn main() -> ExitCode {
    exits::reset_terminal();
    exits::install_handlers();
    logging::init();
    exits::harden_process();

    if env::args_os().len() == 1 {
        return interactive(&cli::load_settings(false));
    }

    let flags = CliFlags::parse();
    if flags.interactive {
        return interactive(&cli::load_settings(flags.defaults));
    }

    match cli::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ CliError::Form(_)) => {
            prompts::error(&e.to_string());
            ExitCode::from(2)
        }
        Err(e @ CliError::Output(_)) => {
            prompts::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn interactive(settings: &Settings) -> ExitCode {
    if !quiet::is_interactive() {
        prompts::not_interactive();
        return ExitCode::from(2);
    }
    tui::run(settings);
    ExitCode::SUCCESS
}
