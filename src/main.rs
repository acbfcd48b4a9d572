use clap::Parser;
use flashdeck::core::config::{self, CliOverrides};
use flashdeck::core::deck::load_deck;
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "flashdeck", version, about = "Flip through flashcards in the terminal")]
struct Args {
    /// Deck file (.json or .toml); falls back to FLASHDECK_DECK or the config file
    deck: Option<PathBuf>,

    /// Keep only the first N cards
    #[arg(short, long)]
    limit: Option<usize>,

    /// Show the highest-scored cards first
    #[arg(short, long)]
    sort_by_score: bool,

    /// Hide the key binding line
    #[arg(long)]
    no_hints: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - the terminal belongs to the TUI. It accepts
    // everything; the global max level is narrowed once config is resolved.
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("flashdeck.log") {
        let _ = WriteLogger::init(LevelFilter::Trace, log_config, log_file);
    }
    log::set_max_level(config::DEFAULT_LOG_LEVEL);

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Failed to load config: {}", e);
            eprintln!("flashdeck: {e}");
            return ExitCode::FAILURE;
        }
    };
    let cli = CliOverrides {
        deck: args.deck,
        limit: args.limit,
        sort_by_score: args.sort_by_score,
        no_hints: args.no_hints,
    };
    let resolved = config::resolve(&file_config, &cli);
    log::set_max_level(resolved.log_level);

    let Some(deck_path) = resolved.deck_path.clone() else {
        eprintln!("flashdeck: no deck given (pass a path, set FLASHDECK_DECK, or set general.default_deck)");
        return ExitCode::FAILURE;
    };

    let deck = match load_deck(&deck_path, resolved.load_options) {
        Ok(deck) => deck,
        Err(e) => {
            log::warn!("Failed to load deck {}: {}", deck_path.display(), e);
            eprintln!("flashdeck: {}: {e}", deck_path.display());
            return ExitCode::FAILURE;
        }
    };

    log::info!("Flashdeck starting with '{}' ({} cards)", deck.title, deck.len());

    match flashdeck::tui::run(&resolved, deck) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::warn!("Terminal error: {}", e);
            eprintln!("flashdeck: terminal error: {e}");
            ExitCode::FAILURE
        }
    }
}
