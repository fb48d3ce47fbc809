use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::CellId;

/// One revealable item, i.e. what a single cell of a card stands for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub description: String,
}

/// The ordered list of everything that can be revealed during an event.
///
/// A [`CellId`] is an index into this list, so the catalog must not be
/// reordered or truncated once cards have been generated from it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Reads a catalog from a JSON file containing a plain array of
    /// entries.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Could not open catalog file '{}'", path.display()))?;
        let catalog = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Could not parse catalog file '{}'", path.display()))?;
        Ok(catalog)
    }

    pub fn get(&self, id: CellId) -> Option<&CatalogEntry> {
        self.entries.get(id.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All valid identifiers, in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = CellId> + '_ {
        (0..self.entries.len() as u32).map(CellId)
    }
}
