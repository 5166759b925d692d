mod har;
mod replay;
mod commands;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use output::ColorWhen;

#[derive(Parser)]
#[command(name = "harplay")]
#[command(author, version, about = "Replay HAR captures and verify recorded status codes")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Coloring: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    color: ColorWhen,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay entries against the live network and compare status codes
    Replay(commands::ReplayCmd),

    /// Show HAR file metadata and replay-oriented summary
    Info(commands::InfoCmd),

    /// Count entries in the HAR file
    Count(commands::CountCmd),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let color = cli.color.should_color();

    // Configure colored output
    if !color {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Replay(cmd) => cmd.run(color),
        Commands::Info(cmd) => {
            let har = load_har(&cmd.file)?;
            cmd.run(&har, color)
        }
        Commands::Count(cmd) => {
            let har = load_har(&cmd.file)?;
            cmd.run(&har)
        }
    }
}

fn load_har(path: &str) -> Result<har::Har> {
    let har = if path == "-" {
        har::parse_stdin()
    } else {
        har::parse_file(path)
    };
    har.with_context(|| format!("Failed to load HAR file: {}", path))
}
