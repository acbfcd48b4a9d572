//! # Deck
//!
//! The fixed, ordered set of cards a session walks through.
//!
//! Decks are loaded once from a file and never change size afterwards.
//! Two on-disk formats are accepted, picked by extension:
//!
//! ```text
//! deck.json   [ { "front": "...", "back": "...", "score": 0.9 }, ... ]
//!             or { "title": "...", "cards": [ ... ] }
//!
//! deck.toml   title = "..."
//!             [[cards]]
//!             front = "..."
//!             back = "..."
//! ```
//!
//! `question`/`answer` are accepted as aliases for `front`/`back`.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::fs;
use std::path::Path;

/// One flashcard. Flip state is not stored here; the surface owns it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Card {
    #[serde(alias = "question")]
    pub front: String,
    #[serde(alias = "answer")]
    pub back: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
}

impl Card {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
            score: None,
        }
    }

    pub fn with_score(mut self, score: f32) -> Self {
        self.score = Some(score);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Deck {
    pub title: String,
    cards: Vec<Card>,
}

impl Deck {
    pub fn new(title: impl Into<String>, cards: Vec<Card>) -> Self {
        Self {
            title: title.into(),
            cards,
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Highest score first. Unscored cards keep their relative order at the end.
    /// NaN scores follow IEEE total order, so they never break the sort.
    fn sort_by_score(&mut self) {
        self.cards.sort_by(|a, b| match (a.score, b.score) {
            (Some(x), Some(y)) => y.total_cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
    }
}

/// Shaping applied after parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LoadOptions {
    pub sort_by_score: bool,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckFormat {
    Json,
    Toml,
}

impl DeckFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(DeckFormat::Json),
            "toml" => Some(DeckFormat::Toml),
            _ => None,
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum DeckError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Toml(toml::de::Error),
    UnsupportedFormat(String),
    /// 1-based card position and the face that was blank.
    EmptyFace { position: usize, face: &'static str },
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::Io(e) => write!(f, "deck I/O error: {e}"),
            DeckError::Json(e) => write!(f, "deck JSON error: {e}"),
            DeckError::Toml(e) => write!(f, "deck TOML error: {e}"),
            DeckError::UnsupportedFormat(path) => {
                write!(f, "unsupported deck format: {path} (expected .json or .toml)")
            }
            DeckError::EmptyFace { position, face } => {
                write!(f, "card {position} has an empty {face}")
            }
        }
    }
}

impl std::error::Error for DeckError {}

// ============================================================================
// Parsing
// ============================================================================

// Unknown keys are errors: a misspelled `cards` key would otherwise load as
// an empty deck.
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonDeck {
    Bare(Vec<Card>),
    Titled(TitledDeck),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TitledDeck {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    cards: Vec<Card>,
}

/// Parse deck text. `fallback_title` is used when the text carries no title.
pub fn parse_deck(
    text: &str,
    format: DeckFormat,
    fallback_title: &str,
    options: LoadOptions,
) -> Result<Deck, DeckError> {
    let (title, cards) = match format {
        DeckFormat::Json => match serde_json::from_str(text).map_err(DeckError::Json)? {
            JsonDeck::Bare(cards) => (None, cards),
            JsonDeck::Titled(deck) => (deck.title, deck.cards),
        },
        DeckFormat::Toml => {
            let deck: TitledDeck = toml::from_str(text).map_err(DeckError::Toml)?;
            (deck.title, deck.cards)
        }
    };

    validate(&cards)?;

    let mut deck = Deck::new(title.unwrap_or_else(|| fallback_title.to_string()), cards);
    if options.sort_by_score {
        deck.sort_by_score();
    }
    if let Some(limit) = options.limit {
        deck.cards.truncate(limit);
    }
    debug!("Parsed deck '{}' with {} cards", deck.title, deck.len());
    Ok(deck)
}

fn validate(cards: &[Card]) -> Result<(), DeckError> {
    for (i, card) in cards.iter().enumerate() {
        if card.front.trim().is_empty() {
            return Err(DeckError::EmptyFace { position: i + 1, face: "front" });
        }
        if card.back.trim().is_empty() {
            return Err(DeckError::EmptyFace { position: i + 1, face: "back" });
        }
    }
    Ok(())
}

/// Load a deck file, choosing the parser from its extension.
pub fn load_deck(path: &Path, options: LoadOptions) -> Result<Deck, DeckError> {
    let format = DeckFormat::from_path(path)
        .ok_or_else(|| DeckError::UnsupportedFormat(path.display().to_string()))?;
    let text = fs::read_to_string(path).map_err(DeckError::Io)?;
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("deck");
    let deck = parse_deck(&text, format, stem, options)?;
    info!("Loaded deck from {} ({} cards)", path.display(), deck.len());
    Ok(deck)
}
