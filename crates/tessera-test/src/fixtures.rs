//! Small catalogs, palettes and boards.

use tessera_core::{Palette, Shape, ShapeCatalog};
use tessera_engine::{Board, BoardError};

/// Catalog holding only the single-cell brush.
pub fn dot_catalog() -> ShapeCatalog {
    ShapeCatalog::new(vec![Shape::new("dot", vec![(0, 0)])])
}

/// Catalog holding only the horizontal two-cell brush.
pub fn domino_catalog() -> ShapeCatalog {
    ShapeCatalog::new(vec![Shape::new("domino-h", vec![(0, 0), (1, 0)])])
}

/// Single-color palette. Any brush wider than one cell then colors
/// touching cells alike, which no conflict-free grid allows.
pub fn mono_palette() -> Palette {
    Palette::new(["slate"])
}

/// Board with the single-cell brush and the standard four colors.
pub fn dot_board(size: usize, seed: u64) -> Result<Board, BoardError> {
    Board::new(size, dot_catalog(), Palette::standard(), seed)
}

/// Board with the single-cell brush and a single color.
pub fn mono_dot_board(size: usize, seed: u64) -> Result<Board, BoardError> {
    Board::new(size, dot_catalog(), mono_palette(), seed)
}
