use std::collections::BTreeSet;

use crate::{line_patterns, Cell, Grid, Line, MarkedCells, Position};

/// Evaluates card layouts against the set of revealed entries.
///
/// The winning lines depend only on the grid, so they are computed once
/// per evaluator and shared by every card it looks at.
///
/// ```
/// use lingo::{CellId, Evaluator, Grid, MarkedCells};
///
/// let grid = Grid::new(5, 5).unwrap();
/// let evaluator = Evaluator::new(grid);
/// // A card with the catalog entries laid out in order around the center.
/// let cells: Vec<_> = (0..25u32).map(|i| (i != 12).then(|| CellId(i))).collect();
/// let marked: MarkedCells = [0, 1, 2, 3, 4].into_iter().map(CellId).collect();
///
/// let bingo = evaluator.completed_line_cells(&cells, &marked);
/// assert_eq!(bingo.len(), 5);
/// assert!(bingo.contains(&grid.position(0, 4)));
/// ```
#[derive(Clone, Debug)]
pub struct Evaluator {
    grid: Grid,
    center: Position,
    lines: Vec<Line>,
}

impl Evaluator {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            center: grid.center(),
            lines: line_patterns(grid),
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Every position that lies on a fully satisfied line. A cell is
    /// satisfied if its entry has been revealed, or if it is the free
    /// center. Positions shared by several complete lines appear once.
    ///
    /// # Panics
    ///
    /// Panics if `cells` does not have one cell per grid position.
    pub fn completed_line_cells(&self, cells: &[Cell], marked: &MarkedCells) -> BTreeSet<Position> {
        self.check_layout(cells);
        let mut completed = BTreeSet::new();
        for line in &self.lines {
            if line
                .positions()
                .iter()
                .all(|&position| self.is_satisfied(position, cells, marked))
            {
                completed.extend(line.positions().iter().copied());
            }
        }
        completed
    }

    /// Every position whose reveal would complete a line: the single
    /// unsatisfied cell of each line that is one reveal away. A line that
    /// is already complete contributes nothing.
    ///
    /// # Panics
    ///
    /// Panics if `cells` does not have one cell per grid position.
    pub fn reach_cells(&self, cells: &[Cell], marked: &MarkedCells) -> BTreeSet<Position> {
        self.check_layout(cells);
        let mut reach = BTreeSet::new();
        for line in &self.lines {
            let unsatisfied: Vec<Position> = line
                .positions()
                .iter()
                .copied()
                .filter(|&position| !self.is_satisfied(position, cells, marked))
                .collect();
            if let [missing] = unsatisfied[..] {
                reach.insert(missing);
            }
        }
        reach
    }

    fn is_satisfied(&self, position: Position, cells: &[Cell], marked: &MarkedCells) -> bool {
        position == self.center
            || matches!(cells[position.index()], Some(id) if marked.contains(id))
    }

    fn check_layout(&self, cells: &[Cell]) {
        assert_eq!(
            cells.len(),
            self.grid.cell_count(),
            "Card has the wrong number of cells for a {}x{} grid",
            self.grid.width(),
            self.grid.height()
        );
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::{CardWithMarks, OddDims};
    use crate::CellId;

    fn grid() -> Grid {
        Grid::new(5, 5).unwrap()
    }

    /// Catalog entries laid out in row-major order, center free.
    fn ordered_cells(grid: Grid) -> Vec<Cell> {
        let center = grid.center().index();
        (0..grid.cell_count() as u32)
            .map(|i| (i as usize != center).then(|| CellId(i)))
            .collect()
    }

    fn marks(ids: &[u32]) -> MarkedCells {
        ids.iter().copied().map(CellId).collect()
    }

    fn indices(positions: &BTreeSet<Position>) -> Vec<usize> {
        positions.iter().map(|p| p.index()).collect()
    }

    #[test]
    fn a_complete_top_row_is_a_bingo() {
        let evaluator = Evaluator::new(grid());
        let completed =
            evaluator.completed_line_cells(&ordered_cells(grid()), &marks(&[0, 1, 2, 3, 4]));
        assert_eq!(indices(&completed), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn a_complete_line_is_no_longer_reach() {
        let evaluator = Evaluator::new(grid());
        let reach = evaluator.reach_cells(&ordered_cells(grid()), &marks(&[0, 1, 2, 3, 4]));
        assert!(reach.is_empty());
    }

    #[test]
    fn one_missing_cell_is_reach() {
        let evaluator = Evaluator::new(grid());
        let reach = evaluator.reach_cells(&ordered_cells(grid()), &marks(&[0, 1, 2, 3]));
        assert_eq!(indices(&reach), vec![4]);
    }

    #[test]
    fn two_lines_missing_the_same_cell_report_it_once() {
        let evaluator = Evaluator::new(grid());
        // The top row and the left column both lack only the corner.
        let reach =
            evaluator.reach_cells(&ordered_cells(grid()), &marks(&[1, 2, 3, 4, 5, 10, 15, 20]));
        assert_eq!(indices(&reach), vec![0]);
    }

    #[test]
    fn a_wide_grid_column_completes_on_its_own_length() {
        let grid = Grid::new(5, 3).unwrap();
        let evaluator = Evaluator::new(grid);
        let cells = ordered_cells(grid);

        // Three cells per column, so two reveals put a column one away.
        let reach = evaluator.reach_cells(&cells, &marks(&[0, 5]));
        assert_eq!(indices(&reach), vec![10]);

        let completed = evaluator.completed_line_cells(&cells, &marks(&[0, 5, 10]));
        assert_eq!(indices(&completed), vec![0, 5, 10]);
    }

    #[test]
    fn the_free_center_counts_towards_its_row() {
        let evaluator = Evaluator::new(grid());
        let completed =
            evaluator.completed_line_cells(&ordered_cells(grid()), &marks(&[10, 11, 13, 14]));
        assert_eq!(indices(&completed), vec![10, 11, 12, 13, 14]);
    }

    #[test]
    fn overlapping_bingo_lines_merge_their_cells() {
        let evaluator = Evaluator::new(grid());
        let completed = evaluator.completed_line_cells(
            &ordered_cells(grid()),
            &marks(&[0, 1, 2, 3, 4, 10, 11, 13, 14]),
        );
        assert_eq!(indices(&completed), vec![0, 1, 2, 3, 4, 10, 11, 12, 13, 14]);
    }

    #[test]
    fn nothing_is_revealed_nothing_is_won() {
        let evaluator = Evaluator::new(grid());
        assert!(evaluator
            .completed_line_cells(&ordered_cells(grid()), &MarkedCells::new())
            .is_empty());
        assert!(evaluator
            .reach_cells(&ordered_cells(grid()), &MarkedCells::new())
            .is_empty());
    }

    #[test]
    #[should_panic(expected = "wrong number of cells")]
    fn mismatched_layout_panics() {
        let evaluator = Evaluator::new(grid());
        let _ = evaluator.completed_line_cells(&[None; 5], &MarkedCells::new());
    }

    quickcheck! {
        fn completed_cells_only_grow(input: CardWithMarks) -> bool {
            let evaluator = Evaluator::new(grid());
            let before = evaluator.completed_line_cells(&input.card.cells, &input.marked);
            let more: MarkedCells = input.marked.iter().chain(input.extra.iter()).collect();
            let after = evaluator.completed_line_cells(&input.card.cells, &more);
            before.is_subset(&after)
        }

        fn evaluation_has_no_hidden_state(input: CardWithMarks) -> bool {
            let evaluator = Evaluator::new(grid());
            let first = evaluator.completed_line_cells(&input.card.cells, &input.marked);
            let second = evaluator.completed_line_cells(&input.card.cells, &input.marked);
            let reach_first = evaluator.reach_cells(&input.card.cells, &input.marked);
            let reach_second = evaluator.reach_cells(&input.card.cells, &input.marked);
            first == second && reach_first == reach_second
        }

        fn reach_and_completed_never_overlap(input: CardWithMarks) -> bool {
            let evaluator = Evaluator::new(grid());
            let completed = evaluator.completed_line_cells(&input.card.cells, &input.marked);
            let reach = evaluator.reach_cells(&input.card.cells, &input.marked);
            completed.is_disjoint(&reach)
        }

        fn revealing_a_reach_cell_completes_a_line(input: CardWithMarks) -> bool {
            let evaluator = Evaluator::new(grid());
            let reach = evaluator.reach_cells(&input.card.cells, &input.marked);
            reach.into_iter().all(|position| {
                let id = match input.card.cells[position.index()] {
                    Some(id) => id,
                    // The free center is always satisfied, so it can never be reach.
                    None => return false,
                };
                let marked: MarkedCells =
                    input.marked.iter().chain(std::iter::once(id)).collect();
                evaluator
                    .completed_line_cells(&input.card.cells, &marked)
                    .contains(&position)
            })
        }

        fn one_unrevealed_value_on_any_line_is_reach(dims: OddDims) -> bool {
            let grid = Grid::new(dims.width, dims.height).unwrap();
            let evaluator = Evaluator::new(grid);
            let cells = ordered_cells(grid);
            line_patterns(grid).iter().all(|line| {
                line.positions().iter().all(|&missing| {
                    if missing == grid.center() {
                        return true;
                    }
                    let marked: MarkedCells = line
                        .positions()
                        .iter()
                        .filter(|&&position| position != missing)
                        .filter_map(|&position| cells[position.index()])
                        .collect();
                    evaluator.reach_cells(&cells, &marked).contains(&missing)
                })
            })
        }

        fn revealing_everything_completes_the_whole_card(input: CardWithMarks) -> bool {
            let evaluator = Evaluator::new(grid());
            let all: MarkedCells = input.card.cells.iter().flatten().copied().collect();
            let completed = evaluator.completed_line_cells(&input.card.cells, &all);
            completed.len() == grid().cell_count()
        }

        fn results_stay_on_the_grid(input: CardWithMarks) -> bool {
            let evaluator = Evaluator::new(grid());
            let completed = evaluator.completed_line_cells(&input.card.cells, &input.marked);
            let reach = evaluator.reach_cells(&input.card.cells, &input.marked);
            completed
                .into_iter()
                .chain(reach)
                .all(|position| position.index() < grid().cell_count())
        }
    }
}
