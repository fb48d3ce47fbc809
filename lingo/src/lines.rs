use crate::{Grid, Position};

/// One way to complete a bingo: a full row, a full column, or one of the
/// two diagonals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    positions: Vec<Position>,
}

impl Line {
    fn new(positions: Vec<Position>) -> Self {
        Self { positions }
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn contains(&self, position: Position) -> bool {
        self.positions.contains(&position)
    }
}

/// All winning lines of a grid, in a fixed order: rows from the top,
/// then columns from the left, then the two diagonals.
///
/// On a non-square grid the diagonals stop at the shorter side, so every
/// grid has exactly `height + width + 2` lines.
pub fn line_patterns(grid: Grid) -> Vec<Line> {
    let width = grid.width();
    let height = grid.height();
    let diagonal = width.min(height);

    let mut lines = Vec::with_capacity(usize::from(height) + usize::from(width) + 2);
    for row in 0..height {
        lines.push(Line::new(
            (0..width).map(|col| grid.position(row, col)).collect(),
        ));
    }
    for col in 0..width {
        lines.push(Line::new(
            (0..height).map(|row| grid.position(row, col)).collect(),
        ));
    }
    lines.push(Line::new(
        (0..diagonal).map(|i| grid.position(i, i)).collect(),
    ));
    lines.push(Line::new(
        (0..diagonal)
            .map(|i| grid.position(i, width - 1 - i))
            .collect(),
    ));
    lines
}
