use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{Grid, InvalidCard};

/// Identifies one entry of the event's reveal catalog.
///
/// This is an index into the catalog, not a location on a card. The same
/// `CellId` sits at a different [`Position`](crate::Position) on every
/// card that contains it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CellId(pub u32);

impl CellId {
    /// The 1-based number printed on card faces. The catalog itself is
    /// indexed from zero. Saturates for the largest identifier, which
    /// can only come from a hand-edited file.
    pub const fn display_number(self) -> u32 {
        self.0.saturating_add(1)
    }
}

/// A single cell of a card: a catalog entry, or `None` for the free
/// center cell.
pub type Cell = Option<CellId>;

/// One participant's bingo card.
///
/// `cells` is the full grid in row-major order. Cards are handed out by
/// their `key`, an opaque string that doubles as the lookup credential,
/// while `number` is the short label printed on the card.
///
/// ```
/// use lingo::{Card, CellId};
/// let card: Card = serde_json::from_str(
///     r#"{"number": 1, "key": "gK6ObMyMJ2Wb", "cells": [4, null, 17]}"#,
/// )
/// .unwrap();
/// assert_eq!(card.cells[1], None);
/// assert!(card.contains(CellId(17)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub number: u32,
    pub key: String,
    pub cells: Vec<Cell>,
}

impl Card {
    /// Checks that this card fits the grid: right number of cells, the
    /// free cell exactly at the center, and no catalog entry twice.
    pub fn validate(&self, grid: Grid) -> Result<(), InvalidCard> {
        let expected = grid.cell_count();
        if self.cells.len() != expected {
            return Err(InvalidCard::WrongCellCount {
                expected,
                actual: self.cells.len(),
            });
        }
        let center = grid.center().index();
        if self.cells[center].is_some() {
            return Err(InvalidCard::CenterNotFree);
        }
        let mut seen = BTreeSet::new();
        for (index, cell) in self.cells.iter().enumerate() {
            match cell {
                Some(id) => {
                    if !seen.insert(*id) {
                        return Err(InvalidCard::DuplicateCellId { id: *id });
                    }
                }
                None => {
                    if index != center {
                        return Err(InvalidCard::FreeCellOutsideCenter { index });
                    }
                }
            }
        }
        Ok(())
    }

    pub fn contains(&self, id: CellId) -> bool {
        self.cells.contains(&Some(id))
    }
}
