use std::collections::BTreeSet;

use rand::distributions::Alphanumeric;
use rand::seq::index;
use rand::Rng;

use crate::{Card, Cell, CellId, GenerateError, Grid};

/// Length of the lookup key assigned to every generated card.
pub const KEY_LENGTH: usize = 12;

/// Generates the full card set for one event.
///
/// Cards are numbered `1..=count`. Every card gets its own random
/// selection of catalog entries, with no entry twice on the same card,
/// and a lookup key that is unique within the batch.
pub fn generate_cards(
    grid: Grid,
    catalog_len: usize,
    count: u32,
    rng: &mut impl Rng,
) -> Result<Vec<Card>, GenerateError> {
    let required = grid.cell_count() - 1;
    if catalog_len < required {
        return Err(GenerateError::CatalogTooSmall {
            required,
            available: catalog_len,
        });
    }

    let mut keys = BTreeSet::new();
    let mut cards = Vec::with_capacity(count as usize);
    for number in 1..=count {
        // Re-roll on a key collision within the batch
        let key = loop {
            let candidate = random_key(rng);
            if keys.insert(candidate.clone()) {
                break candidate;
            }
        };
        cards.push(Card {
            number,
            key,
            cells: random_cells(grid, catalog_len, rng),
        });
    }
    Ok(cards)
}

fn random_cells(grid: Grid, catalog_len: usize, rng: &mut impl Rng) -> Vec<Cell> {
    let mut cells: Vec<Cell> = index::sample(rng, catalog_len, grid.cell_count() - 1)
        .into_iter()
        .map(|entry| Some(CellId(entry as u32)))
        .collect();
    cells.insert(grid.center().index(), None);
    cells
}

fn random_key(rng: &mut impl Rng) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(KEY_LENGTH)
        .map(char::from)
        .collect()
}
