mod cli;
mod logger;

use crate::cli::Cli;
use crate::logger::LOGGER;
use clap::Parser;
use coi_patcher::patch_file;
use log::{LevelFilter, error};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(log_level);
    }

    match patch_file(&cli.path) {
        Ok(_) => {
            println!("Service worker injected into {}", cli.path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(target: "coi", "{e}");
            ExitCode::FAILURE
        }
    }
}
