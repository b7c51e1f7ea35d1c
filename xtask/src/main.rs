//! xtask - Development task runner for eqset
//!
//! Usage:
//!   cargo xtask check-laws [--seed <n>] [--cases <n>] [--max-growth <n>] [--format text|json]

mod check_laws;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development task runner for eqset")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the standard set laws through the seeded property harness
    CheckLaws(check_laws::CheckLawsArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::CheckLaws(args) => check_laws::run(args),
    }
}
