use super::enums::{AnalysisMode, ChartKind};
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Register a new material")]
    Add {
        #[arg(long, help = "Record id (generated when omitted)")]
        id: Option<String>,

        #[arg(long)]
        name: String,

        #[arg(long, help = "Category, e.g. Solid, Hazardous, Glass")]
        material_type: String,

        #[arg(long)]
        quantity: f64,

        #[arg(long)]
        value: f64,

        #[arg(long, help = "Storage location (defaults to \"unspecified\")")]
        location: Option<String>,

        #[arg(long, help = "Lifecycle status (defaults to \"Available\")")]
        status: Option<String>,
    },

    #[command(about = "List all materials, newest first")]
    List,

    #[command(about = "Search materials by name, type and status")]
    Search {
        #[arg(long, default_value = "", help = "Case-insensitive substring of the name")]
        name: String,

        #[arg(long, default_value = "All")]
        material_type: String,

        #[arg(long, default_value = "All")]
        status: String,
    },

    #[command(about = "Edit fields of an existing material")]
    Update {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        material_type: Option<String>,

        #[arg(long)]
        quantity: Option<f64>,

        #[arg(long)]
        value: Option<f64>,

        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        status: Option<String>,
    },

    #[command(about = "Delete a material by id")]
    Delete { id: String },

    #[command(about = "Show summary statistics")]
    Stats,

    #[command(about = "Long-form analysis and qualitative notes")]
    Analyze {
        #[arg(long, default_value = "full")]
        mode: AnalysisMode,
    },

    #[command(about = "Render a text chart over the current records")]
    Chart { kind: ChartKind },

    #[command(about = "Export all records to a CSV file")]
    Export { path: PathBuf },

    #[command(about = "Import records from a CSV file")]
    Import { path: PathBuf },

    #[command(about = "Load sample data into an empty store")]
    Seed,
}
