use crate::InvalidGrid;

/// The dimensions of every card in an event.
///
/// Both sides must be odd, so that the grid has a unique center cell.
/// The center is the free cell of every card.
///
/// ```
/// use lingo::Grid;
/// let grid = Grid::new(5, 5).unwrap();
/// assert_eq!(grid.cell_count(), 25);
/// assert_eq!(grid.center().index(), 12);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u8,
    height: u8,
}

impl Grid {
    pub fn new(width: u8, height: u8) -> Result<Self, InvalidGrid> {
        if width % 2 == 0 {
            return Err(InvalidGrid::EvenWidth { width });
        }
        if height % 2 == 0 {
            return Err(InvalidGrid::EvenHeight { height });
        }
        Ok(Self { width, height })
    }

    pub fn width(self) -> u8 {
        self.width
    }

    pub fn height(self) -> u8 {
        self.height
    }

    /// The number of cells on a card, including the free center.
    pub fn cell_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// The position of the free cell. Both sides are odd, so this is
    /// always the exact middle of the grid.
    pub fn center(self) -> Position {
        Position((self.cell_count() / 2) as u16)
    }

    /// The position at the given coordinates, with `(0, 0)` in the top
    /// left corner.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates lie outside the grid.
    pub fn position(self, row: u8, col: u8) -> Position {
        assert!(
            row < self.height && col < self.width,
            "({}, {}) is outside a {}x{} grid",
            row,
            col,
            self.width,
            self.height
        );
        Position(u16::from(row) * u16::from(self.width) + u16::from(col))
    }

    /// All positions of the grid in row-major order.
    pub fn positions(self) -> impl Iterator<Item = Position> {
        (0..self.cell_count() as u16).map(Position)
    }
}

/// A location on the grid, counted in row-major order.
///
/// Positions say *where* something is on a card. They are deliberately a
/// different type than [`CellId`](crate::CellId), which says *what* a cell
/// shows, because the same catalog entry sits at a different position on
/// every card.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(u16);

impl Position {
    /// The index into a card's cell list.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}
