use crate::args::{Cli, Commands};
use crate::handlers;
use crate::output::ConsoleRenderer;
use anyhow::{Context, Result};
use recylog_store::Store;
use std::path::PathBuf;

pub fn run(cli: Cli) -> Result<()> {
    let db_path = expand_tilde(&cli.db);
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create data dir: {}", parent.display()))?;
    }

    let store = Store::open(&db_path)?;
    let renderer = ConsoleRenderer::new(cli.color);

    match cli.command {
        Commands::Add {
            id,
            name,
            material_type,
            quantity,
            value,
            location,
            status,
        } => handlers::add::handle(&store, id, name, material_type, quantity, value, location, status),

        Commands::List => handlers::list::handle(&store, &renderer, cli.format),

        Commands::Search {
            name,
            material_type,
            status,
        } => handlers::search::handle(&store, &renderer, cli.format, &name, &material_type, &status),

        Commands::Update {
            id,
            name,
            material_type,
            quantity,
            value,
            location,
            status,
        } => handlers::update::handle(&store, &id, name, material_type, quantity, value, location, status),

        Commands::Delete { id } => handlers::delete::handle(&store, &id),

        Commands::Stats => handlers::stats::handle(&store, &renderer, cli.format),

        Commands::Analyze { mode } => handlers::analyze::handle(&store, &renderer, cli.format, mode),

        Commands::Chart { kind } => handlers::chart::handle(&store, &renderer, cli.format, kind),

        Commands::Export { path } => handlers::export::handle(&store, &path),

        Commands::Import { path } => handlers::import::handle(&store, &path),

        Commands::Seed => handlers::seed::handle(&store),
    }
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(rest);
        }
    }
    PathBuf::from(path)
}
