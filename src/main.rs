mod ago;
mod cli;
mod config;
mod convert;
mod convert_cmd;
mod grid;
mod logging;
mod number;
mod output;
mod today;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    match cli.command {
        Command::Today(args) => today::run(args, &config),
        Command::Convert(args) => convert_cmd::run(args, &config),
        Command::Grid(args) => grid::run(args, &config),
        Command::Ago(args) => ago::run(args, &config),
        Command::Number(args) => number::run(args, &config),
    }
}
