use clap::Parser;
use colored::Colorize;
use std::error::Error;
use std::process::ExitCode;
use subnet_calc::cli::{execute, Cli};
use subnet_calc::config::{init_logging, Config};

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "Error:".on_red());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let config = Config::from_env()?;
    init_logging(&config.log_config)?;
    log::info!("#Start main() {:?}", cli.command);

    let output = execute(cli, &config)?;
    print!("{output}");

    log::info!("#End main()");
    Ok(())
}
