// src/bin/cli.rs
use color_eyre::eyre::{eyre, Result};

use kbl_decode::cli::{self, Command};

fn main() -> Result<()> {
    color_eyre::install()?;

    let params = match cli::parse_args(std::env::args().skip(1)).map_err(|e| eyre!("{e}"))? {
        Command::Help => {
            eprintln!("{}", cli::HELP);
            return Ok(());
        }
        Command::Run(params) => params,
    };

    cli::run(&params).map_err(|e| eyre!("{e}"))?;
    Ok(())
}
