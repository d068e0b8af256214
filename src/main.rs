use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;

use compresspdf::cli::Args;
use compresspdf::config::Settings;
use compresspdf::compress_files;

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Info
        } else {
            log::LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let settings = Settings::from_args(&args);
    let count =
        compress_files(settings, args.files).context("Failed to compress PDF files")?;
    log::debug!("{} file(s) compressed", count);
    Ok(())
}
