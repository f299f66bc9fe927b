//! Placement records and brush state.

use crate::grid::Position;
use crate::palette::ColorIndex;
use crate::shape::ShapeIndex;

/// A committed shape placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedShape {
    /// Catalog index of the shape.
    pub shape: ShapeIndex,
    /// Top-left anchor cell.
    pub anchor: Position,
    /// Palette index the shape was painted in.
    pub color: ColorIndex,
}

/// Cursor state of the brush.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrushState {
    /// Cell under the brush.
    pub position: Position,
    /// Selected shape index.
    pub shape: ShapeIndex,
    /// Selected color index.
    pub color: ColorIndex,
}
