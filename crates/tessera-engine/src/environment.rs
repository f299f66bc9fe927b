//! The seam between a solver and a grid engine.

use tessera_core::{
    is_conflict_free, BrushState, ColorIndex, Grid, Palette, PlacedShape, Position, ShapeCatalog,
    ShapeIndex,
};

use crate::command::{Command, StepReport};

/// A grid engine the solver drives through brush commands.
///
/// Implementations own the grid, the placement history and the brush.
/// A single caller executes commands synchronously; every mutation goes
/// through [`execute`](Environment::execute), observation through the
/// borrowing queries.
pub trait Environment {
    /// Executes one command and reports the resulting brush state.
    fn execute(&mut self, command: Command) -> StepReport;

    /// Edge length of the grid.
    fn grid_size(&self) -> usize;

    /// The catalog the brush cycles through.
    fn catalog(&self) -> &ShapeCatalog;

    /// The palette the brush cycles through.
    fn palette(&self) -> &Palette;

    /// Current grid contents.
    fn grid(&self) -> &Grid;

    /// Shapes committed through `place`, oldest first.
    fn placed_shapes(&self) -> &[PlacedShape];

    /// Current brush state.
    fn brush(&self) -> BrushState;

    /// Picks a paint color for `cell`, preferring colors not used by any
    /// of its 4-neighbors.
    fn available_color(&mut self, cell: Position) -> ColorIndex;

    /// Whether `shape` would cover only empty in-bounds cells when
    /// anchored at `anchor`.
    fn can_place(&self, shape: ShapeIndex, anchor: Position) -> bool {
        self.catalog()
            .get(shape)
            .is_some_and(|s| s.fits(self.grid(), anchor))
    }

    /// Whether the grid is full and conflict-free.
    fn is_satisfied(&self) -> bool {
        self.grid().is_full() && is_conflict_free(self.grid())
    }
}
