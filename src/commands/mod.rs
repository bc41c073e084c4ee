use crate::cli::Command;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use tracing::debug;

pub mod growth;
pub mod point;
pub mod vector;

pub const APP_NAME: &str = "exercises";
pub const RULE: &str = "=================================";

/// Runs a subcommand, writing everything it prints to `out`.
pub fn run(command: &Command, out: &mut impl Write) -> Result<()> {
    debug!(?command, "dispatching");
    writeln!(out, "Hello, {}!", APP_NAME)?;
    writeln!(out, "{}", RULE)?;

    match command {
        Command::Vector => vector::run(out).context("Vector exercise failed"),
        Command::Growth { appends } => {
            let appends = usize::try_from(*appends).context("Append count does not fit in usize")?;
            growth::run(appends, out)
        }
        Command::Distance { x1, y1, x2, y2 } => point::distance(*x1, *y1, *x2, *y2, out),
        Command::Move { x, y, dx, dy } => point::move_point(*x, *y, *dx, *dy, out),
        Command::Arithmetic {
            ax,
            ay,
            bx,
            by,
            scalar,
        } => point::arithmetic(*ax, *ay, *bx, *by, *scalar, out),
        Command::Demo => point::demo(out),
    }
}

pub(crate) fn write_title(out: &mut impl Write, title: &str) -> Result<()> {
    writeln!(out, "{}", title)?;
    writeln!(out, "{}\n", RULE)?;
    Ok(())
}

pub(crate) fn write_json(out: &mut impl Write, value: &impl Serialize) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to render JSON output")?;
    writeln!(out, "JSON output:\n{}", text)?;
    Ok(())
}
