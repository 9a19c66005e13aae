use std::process;

use clap::Parser;
use goexpose::cli::args::Cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    if let Err(err) = goexpose::cli::run(cli) {
        eprintln!("Error: {err}");
        process::exit(err.exit_code());
    }
    Ok(())
}
