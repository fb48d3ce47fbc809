use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{bail, Context};

use crate::{Card, Grid};

/// Holds every card of an event and answers lookups.
///
/// Cards identify their holders, so every query requires the event's
/// admin token. A wrong token yields `None`, indistinguishable from a
/// lookup that found nothing.
#[derive(Clone, Debug)]
pub struct CardStore {
    cards: Vec<Card>,
    admin_token: String,
}

impl CardStore {
    /// Builds a store after checking the whole card set: every card must
    /// fit the grid, and numbers and keys must be unique.
    pub fn new(
        grid: Grid,
        cards: Vec<Card>,
        admin_token: impl Into<String>,
    ) -> anyhow::Result<Self> {
        {
            let mut numbers = BTreeSet::new();
            let mut keys = BTreeSet::new();
            for card in &cards {
                card.validate(grid)
                    .with_context(|| format!("Card {} is malformed", card.number))?;
                if !numbers.insert(card.number) {
                    bail!("Duplicate card number {}", card.number);
                }
                if !keys.insert(card.key.as_str()) {
                    bail!("Duplicate card key '{}'", card.key);
                }
            }
        }
        Ok(Self {
            cards,
            admin_token: admin_token.into(),
        })
    }

    /// Reads a card set from a JSON file, as written by the generator.
    pub fn load(path: &Path, grid: Grid, admin_token: impl Into<String>) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Could not open card file '{}'", path.display()))?;
        let cards: Vec<Card> = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Could not parse card file '{}'", path.display()))?;
        Self::new(grid, cards, admin_token)
    }

    /// All cards of the event, or `None` if the token does not match.
    pub fn fetch_all(&self, token: &str) -> Option<&[Card]> {
        (self.admin_token == token).then_some(self.cards.as_slice())
    }

    /// The card with the given lookup key, or `None` if the token does
    /// not match or no card has that key.
    pub fn by_key(&self, key: &str, token: &str) -> Option<&Card> {
        self.fetch_all(token)?.iter().find(|card| card.key == key)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
