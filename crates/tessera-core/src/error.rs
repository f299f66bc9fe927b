//! Error types for Tessera

use thiserror::Error;

/// Errors raised by navigation and index lookups.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TesseraError {
    /// Brush position outside the grid.
    #[error("Position ({x}, {y}) is outside the grid of size {grid_size}")]
    PositionOutOfBounds {
        x: usize,
        y: usize,
        grid_size: usize,
    },

    /// Shape index not present in the catalog.
    #[error("Shape index {index} is out of range for a catalog of {catalog_size} shapes")]
    InvalidShapeIndex { index: usize, catalog_size: usize },

    /// Color index not present in the palette.
    #[error("Color index {index} is out of range for a palette of {palette_size} colors")]
    InvalidColorIndex { index: usize, palette_size: usize },
}

/// Result type alias for Tessera operations
pub type Result<T> = std::result::Result<T, TesseraError>;
