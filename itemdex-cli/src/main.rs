//! itemdex CLI
//!
//! Command-line interface for resolving game item references (URL slugs or
//! catalog ids) against an item catalog.

use clap::{Parser, Subcommand};

use itemdex_catalog::{CatalogIndex, CatalogSource, Resolver};

mod commands;
mod error;

use commands::{run_games, run_list, run_resolve, run_slug};

#[derive(Parser)]
#[command(name = "itemdex")]
#[command(about = "Resolve game item slugs and ids against an item catalog", long_about = None)]
struct Cli {
    /// Catalog location: a JSON file path or an http(s) URL
    #[arg(short, long, global = true, default_value = "data/items.json")]
    catalog: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve an item by game and slug, or directly by catalog id
    Resolve {
        /// Game slug (e.g. knight-online)
        game: String,

        /// Item slug (e.g. hepas-bone-crasher-plus-21)
        item: Option<String>,

        /// Resolve by catalog id instead of slug (preferred when the URL carries one)
        #[arg(short, long)]
        id: Option<u32>,
    },

    /// List every item in a game's catalog
    List {
        /// Game slug
        game: String,
    },

    /// Encode an item name into a URL slug, or decode one back
    Slug {
        /// Item name (or slug with --decode)
        input: String,

        /// Decode a slug into an approximate name
        #[arg(short, long)]
        decode: bool,
    },

    /// List supported games
    Games,
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();

    log::debug!("Catalog location: {}", cli.catalog);
    let resolver = Resolver::new(CatalogIndex::new(CatalogSource::from_location(&cli.catalog)));

    let result = match cli.command {
        Commands::Resolve { game, item, id } => {
            run_resolve(&resolver, &game, item.as_deref(), id).await
        }
        Commands::List { game } => run_list(&resolver, &game).await,
        Commands::Slug { input, decode } => {
            run_slug(&input, decode);
            Ok(())
        }
        Commands::Games => {
            run_games();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
