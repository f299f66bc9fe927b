//! In-memory reference environment.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use thiserror::Error;
use tracing::trace;

use tessera_core::{
    BrushState, ColorIndex, Grid, Palette, PlacedShape, Position, ShapeCatalog,
};

use crate::command::{Command, StepReport};
use crate::environment::Environment;

/// Attempts per requested pre-colored cell before construction gives up.
const SEED_ATTEMPTS_PER_CELL: usize = 100;

/// Errors raised while constructing a [`Board`].
#[derive(Debug, Error)]
pub enum BoardError {
    /// Grid size zero.
    #[error("Grid size must be at least 1")]
    ZeroGridSize,

    /// Palette without colors.
    #[error("Palette must contain at least one color")]
    EmptyPalette,

    /// Catalog without shapes.
    #[error("Catalog must contain at least one shape")]
    EmptyCatalog,

    /// More pre-colored cells requested than the grid holds.
    #[error("Cannot pre-color {requested} cells on a grid of {cell_count} cells")]
    TooManySeeds { requested: usize, cell_count: usize },

    /// Could not pre-color the requested cells without conflicts.
    #[error("Gave up pre-coloring after {attempts} attempts ({placed} of {requested} cells placed)")]
    SeedPlacement {
        requested: usize,
        placed: usize,
        attempts: usize,
    },
}

/// In-memory grid engine driven entirely through brush commands.
///
/// The board owns its own random stream, used for color suggestions and
/// for the optional pre-colored cells, so a given seed reproduces the
/// same run.
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    catalog: ShapeCatalog,
    palette: Palette,
    brush: BrushState,
    placed: Vec<PlacedShape>,
    rng: ChaCha20Rng,
}

impl Board {
    /// Creates an empty board.
    pub fn new(
        size: usize,
        catalog: ShapeCatalog,
        palette: Palette,
        seed: u64,
    ) -> Result<Self, BoardError> {
        Self::with_seeded_cells(size, catalog, palette, seed, 0)
    }

    /// Creates a board with `seed_cells` single cells pre-colored at
    /// random, mutually conflict-free.
    ///
    /// Pre-colored cells are part of the grid but not of the placement
    /// history: `undo` can never remove them.
    pub fn with_seeded_cells(
        size: usize,
        catalog: ShapeCatalog,
        palette: Palette,
        seed: u64,
        seed_cells: usize,
    ) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::ZeroGridSize);
        }
        if palette.is_empty() {
            return Err(BoardError::EmptyPalette);
        }
        if catalog.is_empty() {
            return Err(BoardError::EmptyCatalog);
        }
        let grid = Grid::new(size);
        if seed_cells > grid.cell_count() {
            return Err(BoardError::TooManySeeds {
                requested: seed_cells,
                cell_count: grid.cell_count(),
            });
        }

        let mut board = Self {
            grid,
            catalog,
            palette,
            brush: BrushState {
                position: Position::new(0, 0),
                shape: 0,
                color: 0,
            },
            placed: Vec::new(),
            rng: ChaCha20Rng::seed_from_u64(seed),
        };
        board.seed_cells(seed_cells)?;
        Ok(board)
    }

    /// Board with the standard catalog and palette.
    pub fn standard(size: usize, seed: u64, seed_cells: usize) -> Result<Self, BoardError> {
        Self::with_seeded_cells(
            size,
            ShapeCatalog::standard(),
            Palette::standard(),
            seed,
            seed_cells,
        )
    }

    fn seed_cells(&mut self, count: usize) -> Result<(), BoardError> {
        let budget = count * SEED_ATTEMPTS_PER_CELL;
        let mut placed = 0;
        let mut attempts = 0;
        while placed < count && attempts < budget {
            attempts += 1;
            let cell = Position::new(
                self.rng.random_range(0..self.grid.size()),
                self.rng.random_range(0..self.grid.size()),
            );
            if !self.grid.is_empty_cell(cell) {
                continue;
            }
            let color = self.rng.random_range(0..self.palette.len());
            let clashes = self
                .grid
                .neighbors4(cell)
                .any(|n| self.grid.get(n) == Some(color));
            if clashes {
                continue;
            }
            self.grid.set(cell, Some(color));
            placed += 1;
        }
        if placed < count {
            return Err(BoardError::SeedPlacement {
                requested: count,
                placed,
                attempts,
            });
        }
        Ok(())
    }

    fn place(&mut self) {
        let anchor = self.brush.position;
        let Some(shape) = self.catalog.get(self.brush.shape) else {
            return;
        };
        if !shape.fits(&self.grid, anchor) {
            return;
        }
        for pos in shape.cells_at(anchor) {
            self.grid.set(pos, Some(self.brush.color));
        }
        self.placed.push(PlacedShape {
            shape: self.brush.shape,
            anchor,
            color: self.brush.color,
        });
    }

    fn undo(&mut self) {
        let Some(last) = self.placed.pop() else {
            return;
        };
        let Some(shape) = self.catalog.get(last.shape) else {
            return;
        };
        for pos in shape.cells_at(last.anchor) {
            self.grid.set(pos, None);
        }
    }
}

impl Environment for Board {
    fn execute(&mut self, command: Command) -> StepReport {
        match command {
            Command::Up => {
                self.brush.position.y = self.brush.position.y.saturating_sub(1);
            }
            Command::Down => {
                if self.brush.position.y + 1 < self.grid.size() {
                    self.brush.position.y += 1;
                }
            }
            Command::Left => {
                self.brush.position.x = self.brush.position.x.saturating_sub(1);
            }
            Command::Right => {
                if self.brush.position.x + 1 < self.grid.size() {
                    self.brush.position.x += 1;
                }
            }
            Command::SwitchShape => {
                self.brush.shape = (self.brush.shape + 1) % self.catalog.len();
            }
            Command::SwitchColor => {
                self.brush.color = (self.brush.color + 1) % self.palette.len();
            }
            Command::Place => self.place(),
            Command::Undo => self.undo(),
            Command::Export => {}
        }
        let report = StepReport {
            brush: self.brush,
            satisfied: self.is_satisfied(),
        };
        trace!(
            event = "command",
            command = %command,
            x = report.brush.position.x,
            y = report.brush.position.y,
            satisfied = report.satisfied,
        );
        report
    }

    fn grid_size(&self) -> usize {
        self.grid.size()
    }

    fn catalog(&self) -> &ShapeCatalog {
        &self.catalog
    }

    fn palette(&self) -> &Palette {
        &self.palette
    }

    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn placed_shapes(&self) -> &[PlacedShape] {
        &self.placed
    }

    fn brush(&self) -> BrushState {
        self.brush
    }

    fn available_color(&mut self, cell: Position) -> ColorIndex {
        let used: Vec<ColorIndex> = self
            .grid
            .neighbors4(cell)
            .filter_map(|n| self.grid.get(n))
            .collect();
        let free: Vec<ColorIndex> = (0..self.palette.len())
            .filter(|color| !used.contains(color))
            .collect();
        if free.is_empty() {
            self.rng.random_range(0..self.palette.len())
        } else {
            free[self.rng.random_range(0..free.len())]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::{is_conflict_free, Shape};

    fn dot_board(size: usize, colors: usize, seed: u64) -> Board {
        let catalog = ShapeCatalog::new(vec![Shape::new("dot", vec![(0, 0)])]);
        let names = ["indigo", "taupe", "veridian", "peach"];
        let palette = Palette::new(names[..colors].iter().copied());
        Board::new(size, catalog, palette, seed).unwrap()
    }

    #[test]
    fn test_movement_clamps_at_borders() {
        let mut board = dot_board(3, 2, 0);
        assert_eq!(board.brush().position, Position::new(0, 0));

        board.execute(Command::Up);
        board.execute(Command::Left);
        assert_eq!(board.brush().position, Position::new(0, 0));

        for _ in 0..5 {
            board.execute(Command::Down);
            board.execute(Command::Right);
        }
        assert_eq!(board.brush().position, Position::new(2, 2));
    }

    #[test]
    fn test_switches_wrap_around() {
        let mut board = dot_board(3, 2, 0);
        board.execute(Command::SwitchColor);
        assert_eq!(board.brush().color, 1);
        board.execute(Command::SwitchColor);
        assert_eq!(board.brush().color, 0);

        // Single-shape catalog: switching is a cycle of length one.
        board.execute(Command::SwitchShape);
        assert_eq!(board.brush().shape, 0);
    }

    #[test]
    fn test_place_and_undo_restore_the_grid() {
        let mut board = dot_board(2, 2, 0);
        board.execute(Command::Place);

        assert_eq!(board.grid().get(Position::new(0, 0)), Some(0));
        assert_eq!(board.placed_shapes().len(), 1);

        board.execute(Command::Undo);
        assert!(board.grid().is_empty_cell(Position::new(0, 0)));
        assert!(board.placed_shapes().is_empty());
    }

    #[test]
    fn test_undo_on_empty_history_is_noop() {
        let mut board = dot_board(2, 2, 0);
        let before = board.grid().clone();
        let report = board.execute(Command::Undo);

        assert_eq!(board.grid(), &before);
        assert_eq!(report.brush.position, Position::new(0, 0));
        assert!(!report.satisfied);
    }

    #[test]
    fn test_place_on_occupied_cell_is_noop() {
        let mut board = dot_board(2, 2, 0);
        board.execute(Command::Place);
        board.execute(Command::SwitchColor);
        board.execute(Command::Place);

        assert_eq!(board.placed_shapes().len(), 1);
        assert_eq!(board.grid().get(Position::new(0, 0)), Some(0));
    }

    #[test]
    fn test_satisfied_when_full_and_conflict_free() {
        let mut board = dot_board(1, 2, 0);
        assert!(!board.is_satisfied());
        let report = board.execute(Command::Place);
        assert!(report.satisfied);
        assert!(board.is_satisfied());
    }

    #[test]
    fn test_export_changes_nothing() {
        let mut board = dot_board(2, 2, 0);
        board.execute(Command::Place);
        let grid = board.grid().clone();
        let brush = board.brush();

        let report = board.execute(Command::Export);
        assert_eq!(board.grid(), &grid);
        assert_eq!(report.brush, brush);
    }

    #[test]
    fn test_available_color_avoids_neighbors() {
        let mut board = dot_board(2, 4, 0);
        board.execute(Command::Place);

        for _ in 0..16 {
            let color = board.available_color(Position::new(1, 0));
            assert_ne!(color, 0);
        }
    }

    #[test]
    fn test_seeded_board_is_deterministic() {
        let a = Board::standard(6, 42, 5).unwrap();
        let b = Board::standard(6, 42, 5).unwrap();
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn test_seeded_cells_are_conflict_free() {
        let board = Board::standard(6, 7, 5).unwrap();
        let colored = board
            .grid()
            .iter()
            .filter(|(_, cell)| cell.is_some())
            .count();

        assert_eq!(colored, 5);
        assert!(is_conflict_free(board.grid()));
        assert!(board.placed_shapes().is_empty());
    }

    #[test]
    fn test_undo_cannot_remove_seeded_cells() {
        let mut board = Board::standard(4, 3, 3).unwrap();
        board.execute(Command::Undo);

        let colored = board
            .grid()
            .iter()
            .filter(|(_, cell)| cell.is_some())
            .count();
        assert_eq!(colored, 3);
    }

    #[test]
    fn test_construction_errors() {
        let catalog = ShapeCatalog::standard();
        let palette = Palette::standard();

        assert!(matches!(
            Board::new(0, catalog.clone(), palette.clone(), 0),
            Err(BoardError::ZeroGridSize)
        ));
        assert!(matches!(
            Board::new(3, ShapeCatalog::new(vec![]), palette.clone(), 0),
            Err(BoardError::EmptyCatalog)
        ));
        assert!(matches!(
            Board::new(3, catalog.clone(), Palette::new(Vec::<String>::new()), 0),
            Err(BoardError::EmptyPalette)
        ));
        assert!(matches!(
            Board::with_seeded_cells(2, catalog, palette, 0, 5),
            Err(BoardError::TooManySeeds { requested: 5, cell_count: 4 })
        ));
    }
}
