use crate::CellId;

/// The error type for [`Grid::new()`](crate::Grid::new).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidGrid {
    EvenWidth { width: u8 },
    EvenHeight { height: u8 },
}

impl std::error::Error for InvalidGrid {}

impl std::fmt::Display for InvalidGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidGrid::EvenWidth { width } => {
                write!(f, "Grid width must be odd, but {} is even", width)
            }
            InvalidGrid::EvenHeight { height } => {
                write!(f, "Grid height must be odd, but {} is even", height)
            }
        }
    }
}

/// The error type for [`Card::validate()`](crate::Card::validate), i.e. for
/// checking a single card layout against a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidCard {
    WrongCellCount { expected: usize, actual: usize },
    CenterNotFree,
    FreeCellOutsideCenter { index: usize },
    DuplicateCellId { id: CellId },
}

impl std::error::Error for InvalidCard {}

impl std::fmt::Display for InvalidCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidCard::WrongCellCount { expected, actual } => {
                write!(f, "Card has {} cells, but the grid has {}", actual, expected)
            }
            InvalidCard::CenterNotFree => {
                write!(f, "The center cell of a card must be the free cell")
            }
            InvalidCard::FreeCellOutsideCenter { index } => {
                write!(f, "Card has a free cell at index {}, outside the center", index)
            }
            InvalidCard::DuplicateCellId { id } => {
                write!(f, "Card contains catalog entry {} more than once", id.0)
            }
        }
    }
}

/// The error type for [`generate_cards()`](crate::generate_cards).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    /// The catalog does not have enough entries to fill the non-center
    /// cells of a single card.
    CatalogTooSmall { required: usize, available: usize },
}

impl std::error::Error for GenerateError {}

impl std::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateError::CatalogTooSmall {
                required,
                available,
            } => {
                write!(
                    f,
                    "A card needs {} distinct catalog entries, but the catalog only has {}",
                    required, available
                )
            }
        }
    }
}
