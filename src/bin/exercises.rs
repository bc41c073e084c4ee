use anyhow::{Context, Result};
use exercises::cli::Cli;
use exercises::commands;
use std::io::{self, Write};

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(io::stderr)
        .init();

    if let Some(command) = &cli.command {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        commands::run(command, &mut out).with_context(|| format!("Failed to run {:?}", command))?;
        out.flush()?;
    } else {
        use clap::CommandFactory;
        Cli::command().print_help()?;
        println!();
    }

    Ok(())
}
