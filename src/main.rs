use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use diagram_store::config::Config;
use diagram_store::loader::{load_document, save_document};
use diagram_store::logging::init_tracing;
use diagram_store::observers::{MemoryRouter, TracingToasts};
use diagram_store::script::Script;
use diagram_store::store::{configure_store, RootState, SharedStore};

/// Replays a script of editor actions through the diagram store.
#[derive(Debug, Parser)]
#[command(name = "diagram-store", version, about)]
struct Cli {
    /// TOML file with `[[actions]]` to dispatch in order.
    script: PathBuf,

    /// Config file (default: platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON document to load before replaying.
    #[arg(long)]
    load: Option<PathBuf>,

    /// Write the final document to this path.
    #[arg(long)]
    save: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;
    init_tracing(&config.logging.filter);

    let script = Script::load(&cli.script)?;
    let router = MemoryRouter::default();
    let store = SharedStore::new(configure_store(&config, TracingToasts, router.clone()));

    if let Some(path) = &cli.load {
        load_document(&store, path, true).await?;
    }

    tracing::info!(actions = script.actions.len(), "Replaying script");
    for action in script.actions {
        store.dispatch(action);
    }

    if let Some(path) = &cli.save {
        save_document(&store, path, true).await?;
    }

    print_summary(&store.snapshot(), &router.location());
    Ok(())
}

fn print_summary(state: &RootState, location: &str) {
    let content = state.content();
    println!("undo: {}", state.editor.past_len());
    println!("redo: {}", state.editor.future_len());
    println!("diagrams: {}", content.diagrams.len());
    println!("items: {}", content.item_count());
    if let Some(selected) = &content.selected_diagram {
        println!("selected: {}", selected);
    }
    println!("location: {}", location);
}
