// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Railnet CLI - question and answer console for a railway network

use anyhow::{Context, Result};
use clap::Parser;
use railnet::session::{Console, Session, Style};
use std::io::IsTerminal;

#[derive(Parser)]
#[command(name = "railnet")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Station-to-station CSV extract
    #[arg(long)]
    data: Option<std::path::PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (suppress non-error logging)
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = railnet::config::load(cli.config.as_deref())?;

    // Initialize logging
    let log_level = match cli.verbose {
        0 if cli.quiet => tracing::Level::ERROR,
        0 => config.tracing_level(),
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let data_path = cli.data.unwrap_or(config.data_path);
    let network = railnet::loader::load_network(&data_path)?;

    let stdout = std::io::stdout();
    let style = Style::new(!cli.no_color && stdout.is_terminal());
    let console = Console::new(std::io::stdin().lock(), stdout.lock(), style);

    let mut session = Session::new(&network, config.network_name, console);
    session.welcome().context("Failed to write to stdout")?;
    session.run().context("Console I/O failed")?;
    Ok(())
}
