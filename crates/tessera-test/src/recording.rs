//! Command-recording environment wrapper.

use tessera_core::{
    BrushState, ColorIndex, Grid, Palette, PlacedShape, Position, ShapeCatalog, ShapeIndex,
};
use tessera_engine::{Command, Environment, StepReport};

/// Wraps an environment and logs every executed command.
///
/// Queries pass straight through, so the wrapper is transparent to a
/// solver; tests inspect the log afterwards.
#[derive(Debug, Clone)]
pub struct Recording<E> {
    inner: E,
    log: Vec<Command>,
}

impl<E> Recording<E> {
    /// Wraps `inner` with an empty log.
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            log: Vec::new(),
        }
    }

    /// Commands executed so far, oldest first.
    pub fn commands(&self) -> &[Command] {
        &self.log
    }

    /// How many recorded commands equal `command`.
    pub fn count_of(&self, command: Command) -> usize {
        self.log.iter().filter(|&&c| c == command).count()
    }

    /// Clears the log.
    pub fn clear(&mut self) {
        self.log.clear();
    }

    /// The wrapped environment.
    pub fn inner(&self) -> &E {
        &self.inner
    }

    /// Unwraps into the inner environment, dropping the log.
    pub fn into_inner(self) -> E {
        self.inner
    }
}

impl<E: Environment> Environment for Recording<E> {
    fn execute(&mut self, command: Command) -> StepReport {
        self.log.push(command);
        self.inner.execute(command)
    }

    fn grid_size(&self) -> usize {
        self.inner.grid_size()
    }

    fn catalog(&self) -> &ShapeCatalog {
        self.inner.catalog()
    }

    fn palette(&self) -> &Palette {
        self.inner.palette()
    }

    fn grid(&self) -> &Grid {
        self.inner.grid()
    }

    fn placed_shapes(&self) -> &[PlacedShape] {
        self.inner.placed_shapes()
    }

    fn brush(&self) -> BrushState {
        self.inner.brush()
    }

    fn available_color(&mut self, cell: Position) -> ColorIndex {
        self.inner.available_color(cell)
    }

    fn can_place(&self, shape: ShapeIndex, anchor: Position) -> bool {
        self.inner.can_place(shape, anchor)
    }

    fn is_satisfied(&self) -> bool {
        self.inner.is_satisfied()
    }
}
