mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "recylog")]
#[command(about = "Track recyclable materials and render text-chart reports", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the SQLite database (created on demand)
    #[arg(long, default_value = "~/.recylog/materials.db", global = true)]
    pub db: String,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Commands,
}
