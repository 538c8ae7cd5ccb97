//! Testloom command-line interface.

mod commands;
mod config;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "testloom")]
#[command(about = "Test scaffolding generator for React and React Native", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate test scaffolds for matching source files (default command)
    #[command(visible_alias = "gen")]
    Generate(commands::generate::GenerateArgs),

    /// Print the structural analysis of matching files as JSON
    Analyze(commands::analyze::AnalyzeArgs),
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Generate(args)) => commands::generate::run(args),
        Some(Commands::Analyze(args)) => commands::analyze::run(args),
        None => commands::generate::run(commands::generate::GenerateArgs::default()),
    }
}
