//! Rickdex CLI: list and filter characters from the terminal.
//!
//! Uses the same `FilterState` and catalog matching as the desktop app.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use rickdex_core::{
    load_config, Catalog, CharacterType, FilterState, RickdexConfig, Species, StarredStore,
};

/// Rickdex CLI: browse characters with search and filters.
#[derive(Parser)]
#[command(name = "rdx", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,

    /// Character catalog (overrides `data_file` in rickdex.toml)
    #[arg(long, global = true)]
    data: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List characters matching the given filters
    List {
        /// Case-insensitive name search
        #[arg(long, short, default_value = "")]
        search: String,

        /// Character type: all, starred, regular
        #[arg(long = "type", short = 't')]
        character_type: Option<CharacterType>,

        /// Species: all, human, alien
        #[arg(long)]
        species: Option<Species>,

        /// Maximum number of results (default: page_size from config)
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Star or unstar a character by id
    Star {
        /// Character id
        id: u32,
    },
    /// Show catalog, starred, and config status
    Status,
}

fn fail(msg: &str) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

fn load_catalog(config: &RickdexConfig) -> Catalog {
    Catalog::load(&config.data_file).unwrap_or_else(|e| fail(&e))
}

fn load_starred(config: &RickdexConfig) -> StarredStore {
    StarredStore::load(&config.starred_file).unwrap_or_else(|e| fail(&e))
}

fn print_json(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => fail(&format!("Failed to serialize output: {e}")),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rickdex=warn".parse().unwrap()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let cwd = std::env::current_dir()
        .unwrap_or_else(|e| fail(&format!("Could not determine current directory: {e}")));
    let mut config = load_config(&cwd);
    if let Some(data) = cli.data {
        config.data_file = data;
    }
    tracing::debug!(
        source = ?config.source,
        data_file = %config.data_file.display(),
        "Resolved config"
    );

    match cli.command {
        Commands::List { search, character_type, species, limit } => {
            let catalog = load_catalog(&config);
            let starred = load_starred(&config);

            let defaults = &config.default_filters;
            let filters = FilterState::new(
                search,
                character_type.unwrap_or(defaults.character_type),
                species.unwrap_or(defaults.species),
            );
            let limit = limit.unwrap_or(config.page_size);
            let response = catalog.filter(&filters, &starred);

            if cli.json {
                let items: Vec<serde_json::Value> = response
                    .characters
                    .iter()
                    .take(limit)
                    .map(|c| {
                        serde_json::json!({
                            "id": c.id,
                            "name": c.name,
                            "species": c.species,
                            "status": c.status,
                            "starred": starred.is_starred(c.id),
                        })
                    })
                    .collect();
                print_json(&serde_json::json!({
                    "filters": filters,
                    "activeFilters": filters.active_count(),
                    "matched": response.characters.len(),
                    "total": response.total,
                    "characters": items,
                }));
            } else {
                if response.characters.is_empty() {
                    eprintln!("No characters match ({} active filters)", filters.active_count());
                    std::process::exit(1);
                }
                for c in response.characters.iter().take(limit) {
                    let star = if starred.is_starred(c.id) { "\u{2605}" } else { " " };
                    println!("{star} {:>5}  {:<32} {}", c.id, c.name, c.subtitle());
                }
                eprintln!(
                    "\n{} of {} characters (showing {}, {} active filters)",
                    response.characters.len(),
                    response.total,
                    response.characters.len().min(limit),
                    filters.active_count()
                );
            }
        }
        Commands::Star { id } => {
            let catalog = load_catalog(&config);
            let character = catalog
                .get(id)
                .unwrap_or_else(|| fail(&format!("No character with id {id}")));
            let mut starred = load_starred(&config);
            let now_starred = starred.toggle(id);
            starred.save().unwrap_or_else(|e| fail(&e));

            if cli.json {
                print_json(&serde_json::json!({
                    "id": id,
                    "name": character.name,
                    "starred": now_starred,
                }));
            } else if now_starred {
                println!("Starred {} ({id})", character.name);
            } else {
                println!("Unstarred {} ({id})", character.name);
            }
        }
        Commands::Status => {
            let catalog = Catalog::load(&config.data_file);
            let starred = load_starred(&config);
            let source = config.source.as_ref().map(|p| p.display().to_string());

            if cli.json {
                print_json(&serde_json::json!({
                    "config": source,
                    "data_file": config.data_file.display().to_string(),
                    "starred_file": config.starred_file.display().to_string(),
                    "characters": catalog.as_ref().map(|c| c.len()).ok(),
                    "starred": starred.len(),
                    "default_filters": config.default_filters,
                }));
            } else {
                println!("Config:     {}", source.as_deref().unwrap_or("(defaults)"));
                println!("Catalog:    {}", config.data_file.display());
                match &catalog {
                    Ok(c) => println!("Characters: {}", c.len()),
                    Err(e) => println!("Characters: unavailable ({e})"),
                }
                println!("Starred:    {} ({})", starred.len(), config.starred_file.display());
                println!(
                    "Defaults:   type={} species={}",
                    config.default_filters.character_type, config.default_filters.species
                );
            }
        }
    }
}
