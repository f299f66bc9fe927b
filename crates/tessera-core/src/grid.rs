//! Square grid of optionally colored cells.

use crate::palette::ColorIndex;

/// Cell coordinates. `x` is the column, `y` the row, with the origin in
/// the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    /// Creates a position from column and row.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: Position) -> f64 {
        let dx = self.x as f64 - other.x as f64;
        let dy = self.y as f64 - other.y as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Square matrix of cells, each empty or holding a palette color.
///
/// The edge length is fixed at construction. Cells are stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<ColorIndex>>,
}

impl Grid {
    /// Creates an empty grid with the given edge length.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Edge length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether `pos` lies on the grid.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.size && pos.y < self.size
    }

    fn index(&self, pos: Position) -> usize {
        debug_assert!(self.contains(pos), "position off the grid: {pos:?}");
        pos.y * self.size + pos.x
    }

    /// Returns the cell at `pos`, `None` when empty.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    pub fn get(&self, pos: Position) -> Option<ColorIndex> {
        self.cells[self.index(pos)]
    }

    /// Overwrites the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    pub fn set(&mut self, pos: Position, value: Option<ColorIndex>) {
        let index = self.index(pos);
        self.cells[index] = value;
    }

    /// Whether the cell at `pos` is empty.
    pub fn is_empty_cell(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Whether every cell holds a color.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Iterates over every cell with its position, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Option<ColorIndex>)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (Position::new(i % size, i / size), cell))
    }

    /// Positions of all empty cells, row by row.
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.iter()
            .filter_map(|(pos, cell)| cell.is_none().then_some(pos))
    }

    /// In-bounds 4-neighbors of `pos`.
    pub fn neighbors4(&self, pos: Position) -> impl Iterator<Item = Position> {
        let size = self.size;
        let Position { x, y } = pos;
        let up = y.checked_sub(1).map(|ny| Position::new(x, ny));
        let down = (y + 1 < size).then_some(Position::new(x, y + 1));
        let left = x.checked_sub(1).map(|nx| Position::new(nx, y));
        let right = (x + 1 < size).then_some(Position::new(x + 1, y));
        [up, down, left, right].into_iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(4);
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.cell_count(), 16);
        assert!(!grid.is_full());
        assert_eq!(grid.empty_cells().count(), 16);
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new(3);
        let pos = Position::new(2, 1);
        assert_eq!(grid.get(pos), None);

        grid.set(pos, Some(2));
        assert_eq!(grid.get(pos), Some(2));
        assert!(!grid.is_empty_cell(pos));

        grid.set(pos, None);
        assert!(grid.is_empty_cell(pos));
    }

    #[test]
    fn test_neighbors_at_corner() {
        let grid = Grid::new(3);
        let neighbors: Vec<_> = grid.neighbors4(Position::new(0, 0)).collect();
        assert_eq!(neighbors.len(), 2);
        assert!(neighbors.contains(&Position::new(1, 0)));
        assert!(neighbors.contains(&Position::new(0, 1)));
    }

    #[test]
    fn test_neighbors_in_center() {
        let grid = Grid::new(3);
        let neighbors: Vec<_> = grid.neighbors4(Position::new(1, 1)).collect();
        assert_eq!(neighbors.len(), 4);
    }

    #[test]
    fn test_is_full_after_filling() {
        let mut grid = Grid::new(2);
        for pos in grid.empty_cells().collect::<Vec<_>>() {
            grid.set(pos, Some(0));
        }
        assert!(grid.is_full());
        assert_eq!(grid.empty_cells().count(), 0);
    }

    #[test]
    fn test_distance() {
        let a = Position::new(0, 0);
        let b = Position::new(3, 4);
        assert_eq!(a.distance_to(b), 5.0);
        assert_eq!(b.distance_to(a), 5.0);
        assert_eq!(a.distance_to(a), 0.0);
    }
}
