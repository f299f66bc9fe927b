//! Penalty scoring over grid states.
//!
//! Scores are always non-positive; less negative is better. Conflicted
//! cells weigh heaviest, then empty cells, then the number of placed
//! shapes, then the number of distinct colors in use.

use crate::grid::Grid;
use crate::placement::PlacedShape;

const CONFLICT_WEIGHT: usize = 100;
const EMPTY_WEIGHT: usize = 50;
const SHAPE_WEIGHT: usize = 20;
const COLOR_WEIGHT: usize = 10;

/// Scores the current grid state.
///
/// `placed` is the list of shapes committed by the search; its length is
/// the shape-count term of the penalty.
pub fn heuristic_value(grid: &Grid, placed: &[PlacedShape]) -> f64 {
    let conflicts = conflicted_cell_count(grid);
    let empty = grid.iter().filter(|(_, cell)| cell.is_none()).count();
    let shapes = placed.len();
    let colors = distinct_color_count(grid);

    let penalty =
        CONFLICT_WEIGHT * conflicts + EMPTY_WEIGHT * empty + SHAPE_WEIGHT * shapes + COLOR_WEIGHT * colors;
    -(penalty as f64) / 100.0
}

/// Counts cells whose value reappears in one of their 4-neighbors.
///
/// The comparison is on raw cell values, so every cell in a run of
/// adjacent empty cells counts. That makes sparse grids score badly and
/// pushes the search toward full boards. The hard constraint in
/// [`crate::adjacency`] ignores empty cells instead.
pub fn conflicted_cell_count(grid: &Grid) -> usize {
    grid.iter()
        .filter(|&(pos, cell)| grid.neighbors4(pos).any(|n| grid.get(n) == cell))
        .count()
}

/// Number of distinct colors present on the grid.
pub fn distinct_color_count(grid: &Grid) -> usize {
    let mut colors: Vec<_> = grid.iter().filter_map(|(_, cell)| cell).collect();
    colors.sort_unstable();
    colors.dedup();
    colors.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Position;
    use crate::is_conflict_free;

    fn placements(n: usize) -> Vec<PlacedShape> {
        (0..n)
            .map(|i| PlacedShape {
                shape: 0,
                anchor: Position::new(i % 2, i / 2),
                color: 0,
            })
            .collect()
    }

    #[test]
    fn test_single_empty_cell() {
        // One empty cell, no neighbors, nothing placed: only the empty
        // term contributes.
        let grid = Grid::new(1);
        assert_eq!(heuristic_value(&grid, &[]), -0.5);
    }

    #[test]
    fn test_empty_cells_count_as_conflicts() {
        // All four cells of an empty 2x2 grid neighbor another empty
        // cell, so all four carry the conflict weight on top of the
        // empty weight.
        let grid = Grid::new(2);
        assert_eq!(heuristic_value(&grid, &[]), -6.0);
    }

    #[test]
    fn test_full_checkerboard_score() {
        let mut grid = Grid::new(2);
        grid.set(Position::new(0, 0), Some(0));
        grid.set(Position::new(1, 0), Some(1));
        grid.set(Position::new(0, 1), Some(1));
        grid.set(Position::new(1, 1), Some(0));

        // No conflicts, no empties, four placements, two colors.
        assert_eq!(heuristic_value(&grid, &placements(4)), -1.0);
    }

    #[test]
    fn test_conflicts_dominate() {
        let mut grid = Grid::new(2);
        grid.set(Position::new(0, 0), Some(0));
        grid.set(Position::new(1, 0), Some(1));
        grid.set(Position::new(0, 1), Some(1));
        grid.set(Position::new(1, 1), Some(0));
        let clean = heuristic_value(&grid, &placements(4));

        // Recolor one cell to collide with two neighbors.
        grid.set(Position::new(1, 1), Some(1));
        let conflicted = heuristic_value(&grid, &placements(4));

        assert_eq!(conflicted_cell_count(&grid), 3);
        assert!(conflicted < clean);
    }

    #[test]
    fn test_soft_and_hard_adjacency_disagree_on_empties() {
        // Top row colored, bottom row empty: the hard constraint holds,
        // yet both empty cells count as conflicted for the heuristic.
        let mut grid = Grid::new(2);
        grid.set(Position::new(0, 0), Some(0));
        grid.set(Position::new(1, 0), Some(1));

        assert!(is_conflict_free(&grid));
        assert_eq!(conflicted_cell_count(&grid), 2);
        assert_eq!(heuristic_value(&grid, &placements(2)), -3.6);
    }

    #[test]
    fn test_distinct_colors_ignore_empties() {
        let mut grid = Grid::new(3);
        assert_eq!(distinct_color_count(&grid), 0);
        grid.set(Position::new(0, 0), Some(2));
        grid.set(Position::new(2, 2), Some(2));
        grid.set(Position::new(1, 1), Some(0));
        assert_eq!(distinct_color_count(&grid), 2);
    }
}
