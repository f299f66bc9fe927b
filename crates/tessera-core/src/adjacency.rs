//! Adjacency constraint checking.

use crate::grid::Grid;

/// Whether no two 4-adjacent cells hold the same color.
///
/// Empty cells never conflict. This is the hard constraint a finished
/// grid must satisfy; the softer scoring in [`crate::heuristic`] treats
/// adjacency differently.
pub fn is_conflict_free(grid: &Grid) -> bool {
    for (pos, cell) in grid.iter() {
        let Some(color) = cell else { continue };
        if grid.neighbors4(pos).any(|n| grid.get(n) == Some(color)) {
            return false;
        }
    }
    true
}
