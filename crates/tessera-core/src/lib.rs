//! Tessera Core - domain model for the shape coloring puzzle
//!
//! This crate provides the fundamental types shared by the Tessera crates:
//! - Grid, shape and palette definitions
//! - Placement records and brush state
//! - The adjacency constraint check
//! - The heuristic used to score partial colorings
//!
//! Everything here is pure: no I/O, no randomness, no logging.

pub mod adjacency;
pub mod error;
pub mod grid;
pub mod heuristic;
pub mod palette;
pub mod placement;
pub mod shape;

pub use adjacency::is_conflict_free;
pub use error::{Result, TesseraError};
pub use grid::{Grid, Position};
pub use heuristic::{conflicted_cell_count, distinct_color_count, heuristic_value};
pub use palette::{ColorIndex, Palette};
pub use placement::{BrushState, PlacedShape};
pub use shape::{Shape, ShapeCatalog, ShapeIndex};
