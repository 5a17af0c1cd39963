use std::path::{Path, PathBuf};

use rand::Rng;
use rand::seq::{IteratorRandom, SliceRandom};
use serde::{Deserialize, Serialize};

use crate::consts::{IMAGE_DIR, IMAGE_EXTENSION};
use crate::{Category, Element};

const BUILTIN_CARDS: &str = include_str!("../data/cards.json");

/// One card record: what gets flipped over for a category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TarotCard {
    /// File-safe name; underscores stand in for spaces.
    pub name: String,
    pub category: Category,
    pub message: String,
    /// Free-form element tag, see [`TarotCard::aura`].
    pub element: String,
}

impl TarotCard {
    /// Card shown when a deck has nothing to offer.
    pub fn fallback(category: Category) -> Self {
        Self {
            name: "TheSun".to_owned(),
            category,
            message: "No cards loaded.".to_owned(),
            element: Element::Air.to_string(),
        }
    }

    /// Name with underscores turned back into spaces.
    pub fn display_name(&self) -> String {
        self.name.replace('_', " ")
    }

    pub fn image_path(&self) -> String {
        format!("{IMAGE_DIR}/{}.{IMAGE_EXTENSION}", self.name)
    }

    /// The element this card lends its aura to, if the tag names one.
    pub fn aura(&self) -> Option<Element> {
        self.element.parse().ok()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    #[error("Failed to read deck {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid deck JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A pool of cards to draw from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck {
    cards: Vec<TarotCard>,
}

impl Deck {
    pub const fn new(cards: Vec<TarotCard>) -> Self {
        Self { cards }
    }

    /// The deck compiled into the crate.
    ///
    /// # Errors
    /// Only if the embedded JSON is malformed.
    pub fn builtin() -> Result<Self, DeckError> {
        Self::from_json(BUILTIN_CARDS)
    }

    /// Parses a JSON array of cards.
    ///
    /// # Errors
    /// Returns `DeckError::Json` when the text is not a valid card array.
    pub fn from_json(json: &str) -> Result<Self, DeckError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a JSON deck from disk.
    ///
    /// # Errors
    /// Returns `DeckError::Io` if the file cannot be read, `DeckError::Json` if it does not
    /// hold a card array.
    pub fn from_path(path: &Path) -> Result<Self, DeckError> {
        let json = std::fs::read_to_string(path).map_err(|source| DeckError::Io {
            path: path.to_owned(),
            source,
        })?;
        let deck = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), cards = deck.len(), "loaded deck");
        Ok(deck)
    }

    pub fn cards(&self) -> &[TarotCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Draws a card for `category`.
    ///
    /// Picks uniformly among that category's cards, falls back to any card when the category
    /// has none, and to [`TarotCard::fallback`] when the deck is empty.
    pub fn draw<R: Rng + ?Sized>(&self, category: Category, rng: &mut R) -> TarotCard {
        if let Some(card) = self
            .cards
            .iter()
            .filter(|card| card.category == category)
            .choose(rng)
        {
            return card.clone();
        }
        tracing::debug!(%category, "no cards for category, drawing from whole deck");
        self.cards
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| TarotCard::fallback(category))
    }
}
