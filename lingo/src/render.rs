use std::collections::BTreeSet;

use crate::{Card, Grid, MarkedCells, Position};

/// Renders a card as a boxed text grid.
///
/// Each cell shows its display number followed by a one-character state
/// marker: `#` on a completed line, `+` one reveal away from completing
/// a line, `*` revealed, blank otherwise. The free center cell shows
/// `FREE` and counts as revealed from the start.
pub fn render_card(
    grid: Grid,
    card: &Card,
    marked: &MarkedCells,
    completed: &BTreeSet<Position>,
    reach: &BTreeSet<Position>,
) -> String {
    let mut result = format!("Card No. {}\n", card.number);
    // Draw the top of the box
    result += "╭";
    for _ in 0..grid.width() {
        result += "─────";
    }
    result += "╮\n";
    for row in 0..grid.height() {
        result += "│";
        for col in 0..grid.width() {
            let position = grid.position(row, col);
            let cell = card.cells[position.index()];
            let satisfied = match cell {
                Some(id) => marked.contains(id),
                None => true,
            };
            let marker = if completed.contains(&position) {
                '#'
            } else if reach.contains(&position) {
                '+'
            } else if satisfied {
                '*'
            } else {
                ' '
            };
            match cell {
                Some(id) => result += &format!("{:>4}{}", id.display_number(), marker),
                None => result += &format!("FREE{}", marker),
            }
        }
        result += "│\n";
    }
    // Draw the bottom of the box
    result += "╰";
    for _ in 0..grid.width() {
        result += "─────";
    }
    result += "╯";
    result
}
