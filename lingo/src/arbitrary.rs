use std::collections::BTreeSet;

use quickcheck::Arbitrary;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::{generate_cards, Card, CellId, Grid, MarkedCells};

// Generated inputs draw their entries from a catalog of this size, so
// that marks sometimes hit a card and sometimes miss it.
const CATALOG_LEN: usize = 60;

/// A generated standard card together with two arbitrary reveal sets.
#[derive(Clone, Debug)]
pub struct CardWithMarks {
    pub card: Card,
    pub marked: MarkedCells,
    pub extra: MarkedCells,
}

impl quickcheck::Arbitrary for CardWithMarks {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let grid = Grid::new(5, 5).unwrap();
        let mut rng = StdRng::seed_from_u64(u64::arbitrary(g));
        let card = generate_cards(grid, CATALOG_LEN, 1, &mut rng)
            .unwrap()
            .pop()
            .unwrap();
        CardWithMarks {
            card,
            marked: arbitrary_marks(g),
            extra: arbitrary_marks(g),
        }
    }
}

fn arbitrary_marks(g: &mut quickcheck::Gen) -> MarkedCells {
    BTreeSet::<u8>::arbitrary(g)
        .into_iter()
        .map(|raw| CellId(u32::from(raw) % CATALOG_LEN as u32))
        .collect()
}

/// Odd grid dimensions between 3 and 9.
#[derive(Copy, Clone, Debug)]
pub struct OddDims {
    pub width: u8,
    pub height: u8,
}

impl quickcheck::Arbitrary for OddDims {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        OddDims {
            width: 2 * (u8::arbitrary(g) % 4) + 3,
            height: 2 * (u8::arbitrary(g) % 4) + 3,
        }
    }
}
