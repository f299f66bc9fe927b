//! Brush shapes and the shape catalog.

use crate::grid::{Grid, Position};

/// Index of a shape within a [`ShapeCatalog`].
pub type ShapeIndex = usize;

/// Occupancy mask of a brush, stored as cell offsets from the top-left
/// anchor of its bounding box.
///
/// The anchor cell itself is covered only if `(0, 0)` appears among the
/// offsets; the sparse diagonal brushes leave it out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    name: String,
    offsets: Vec<(usize, usize)>,
}

impl Shape {
    /// Creates a shape from `(dx, dy)` offsets relative to the anchor.
    pub fn new(name: impl Into<String>, offsets: Vec<(usize, usize)>) -> Self {
        Self {
            name: name.into(),
            offsets,
        }
    }

    /// Shape name, as used in placement reports.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cell offsets from the anchor.
    pub fn offsets(&self) -> &[(usize, usize)] {
        &self.offsets
    }

    /// Number of cells the shape covers.
    pub fn cell_count(&self) -> usize {
        self.offsets.len()
    }

    /// Absolute positions covered when anchored at `anchor`.
    pub fn cells_at(&self, anchor: Position) -> impl Iterator<Item = Position> + '_ {
        self.offsets
            .iter()
            .map(move |&(dx, dy)| Position::new(anchor.x + dx, anchor.y + dy))
    }

    /// Whether every covered cell is on the grid and empty.
    pub fn fits(&self, grid: &Grid, anchor: Position) -> bool {
        self.cells_at(anchor)
            .all(|pos| grid.contains(pos) && grid.is_empty_cell(pos))
    }
}

/// Ordered set of shapes the brush cycles through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeCatalog {
    shapes: Vec<Shape>,
}

impl ShapeCatalog {
    /// Creates a catalog from shapes, in brush cycle order.
    pub fn new(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }

    /// The nine default brushes.
    pub fn standard() -> Self {
        Self::new(vec![
            Shape::new("dot", vec![(0, 0)]),
            Shape::new("domino-h", vec![(0, 0), (1, 0)]),
            Shape::new("domino-v", vec![(0, 0), (0, 1)]),
            Shape::new("block", vec![(0, 0), (1, 0), (0, 1), (1, 1)]),
            Shape::new("bar-h", vec![(0, 0), (1, 0), (2, 0)]),
            Shape::new("bar-v", vec![(0, 0), (0, 1), (0, 2)]),
            Shape::new("diagonal", vec![(0, 0), (1, 1)]),
            Shape::new("anti-diagonal", vec![(1, 0), (0, 1)]),
            Shape::new("corner", vec![(0, 0), (1, 0), (0, 1)]),
        ])
    }

    /// Number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the catalog holds no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Whether `index` refers to a shape in this catalog.
    pub fn contains(&self, index: ShapeIndex) -> bool {
        index < self.shapes.len()
    }

    /// The shape at `index`.
    pub fn get(&self, index: ShapeIndex) -> Option<&Shape> {
        self.shapes.get(index)
    }

    /// Name of the shape at `index`.
    pub fn name(&self, index: ShapeIndex) -> Option<&str> {
        self.shapes.get(index).map(Shape::name)
    }

    /// Iterates over the shapes with their indices.
    pub fn iter(&self) -> impl Iterator<Item = (ShapeIndex, &Shape)> {
        self.shapes.iter().enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog() {
        let catalog = ShapeCatalog::standard();
        assert_eq!(catalog.len(), 9);
        assert_eq!(catalog.name(0), Some("dot"));
        assert_eq!(catalog.name(8), Some("corner"));
        assert!(!catalog.contains(9));
    }

    #[test]
    fn test_dot_fits_anywhere_empty() {
        let catalog = ShapeCatalog::standard();
        let dot = catalog.get(0).unwrap();
        let grid = Grid::new(3);
        for pos in grid.empty_cells() {
            assert!(dot.fits(&grid, pos));
        }
    }

    #[test]
    fn test_block_rejected_at_edge() {
        let catalog = ShapeCatalog::standard();
        let block = catalog.get(3).unwrap();
        let grid = Grid::new(3);
        assert!(block.fits(&grid, Position::new(1, 1)));
        assert!(!block.fits(&grid, Position::new(2, 1)));
        assert!(!block.fits(&grid, Position::new(1, 2)));
    }

    #[test]
    fn test_fit_rejected_on_occupied_cell() {
        let catalog = ShapeCatalog::standard();
        let domino = catalog.get(1).unwrap();
        let mut grid = Grid::new(3);
        grid.set(Position::new(1, 0), Some(0));
        assert!(!domino.fits(&grid, Position::new(0, 0)));
        assert!(domino.fits(&grid, Position::new(0, 1)));
    }

    #[test]
    fn test_anti_diagonal_skips_anchor() {
        let catalog = ShapeCatalog::standard();
        let shape = catalog.get(7).unwrap();
        let covered: Vec<_> = shape.cells_at(Position::new(0, 0)).collect();
        assert_eq!(covered, vec![Position::new(1, 0), Position::new(0, 1)]);
    }
}
