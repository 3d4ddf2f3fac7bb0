use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use env_logger::init;
use opsz_glyphs_cli::Cli;

fn main() -> Result<ExitCode> {
    init();
    Cli::parse().run()
}
