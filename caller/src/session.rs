use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::Context;
use lingo::{Catalog, CellId, MarkedCells};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The running state of one event, persisted between invocations.
///
/// The session file is the single source of truth for which entries have
/// been revealed and which cards have already reported a bingo.
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    marked: MarkedCells,
    bingo_numbers: BTreeSet<u32>,
    last_drawn: Option<CellId>,
}

impl Session {
    /// Reads a session file, or starts a fresh session if the file does
    /// not exist yet.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let file = File::open(path)
            .with_context(|| format!("Could not open session file '{}'", path.display()))?;
        let session = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Could not parse session file '{}'", path.display()))?;
        Ok(session)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let file = File::create(path)
            .with_context(|| format!("Could not write session file '{}'", path.display()))?;
        serde_json::to_writer(BufWriter::new(file), self)?;
        Ok(())
    }

    pub fn marked(&self) -> &MarkedCells {
        &self.marked
    }

    pub fn last_drawn(&self) -> Option<CellId> {
        self.last_drawn
    }

    /// Draws one of the entries that have not been revealed yet, and
    /// marks it. Returns `None` once everything is revealed.
    pub fn draw(&mut self, catalog: &Catalog, rng: &mut impl Rng) -> Option<CellId> {
        let unrevealed: Vec<CellId> = catalog
            .ids()
            .filter(|id| !self.marked.contains(*id))
            .collect();
        let drawn = *unrevealed.choose(rng)?;
        self.marked.mark(drawn);
        self.last_drawn = Some(drawn);
        Some(drawn)
    }

    /// Records which cards currently show a bingo, and returns the card
    /// numbers that were not already known from earlier draws.
    pub fn record_bingos(&mut self, numbers: impl IntoIterator<Item = u32>) -> Vec<u32> {
        numbers
            .into_iter()
            .filter(|number| self.bingo_numbers.insert(*number))
            .collect()
    }

    /// Forgets every reveal and reported bingo. This restarts the event.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
