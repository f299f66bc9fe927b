//! Random placement proposals.

use rand::Rng;
use smallvec::SmallVec;
use tracing::{debug, trace};

use tessera_core::{is_conflict_free, Position, Result, ShapeIndex};
use tessera_engine::{Command, Environment};

use crate::navigator;

/// Proposes placements by random search over the empty cells.
///
/// A successful proposal is already committed to the environment with a
/// `place` command when it is returned; the caller scores the result
/// and decides whether to keep it.
#[derive(Debug, Clone)]
pub struct MoveGenerator {
    locality_bias: f64,
    locality_radius: f64,
}

impl MoveGenerator {
    /// Creates a generator.
    ///
    /// `locality_bias` is the probability of restricting candidate
    /// cells to those within `locality_radius` of the last accepted
    /// placement.
    pub fn new(locality_bias: f64, locality_radius: f64) -> Self {
        Self {
            locality_bias,
            locality_radius,
        }
    }

    /// Searches for a cell, shape and color that keep the grid
    /// conflict-free, then navigates there and places.
    ///
    /// The search is budgeted at one try per grid cell. Returns the
    /// anchor of the committed placement, `None` when the grid has no
    /// empty cell or every try failed. A try is consumed whether the
    /// placement is refused by the environment or by the adjacency
    /// check.
    pub fn propose<E, R>(
        &self,
        env: &mut E,
        rng: &mut R,
        last_cell: Option<Position>,
    ) -> Result<Option<Position>>
    where
        E: Environment,
        R: Rng,
    {
        let budget = env.grid_size() * env.grid_size();

        for attempt in 0..budget {
            let mut candidates: Vec<Position> = env.grid().empty_cells().collect();
            if candidates.is_empty() {
                return Ok(None);
            }

            // Prefer cells near the last accepted placement.
            if let Some(last) = last_cell {
                if rng.random::<f64>() < self.locality_bias {
                    let near: Vec<Position> = candidates
                        .iter()
                        .copied()
                        .filter(|cell| cell.distance_to(last) < self.locality_radius)
                        .collect();
                    if !near.is_empty() {
                        candidates = near;
                    }
                }
            }

            let cell = candidates[rng.random_range(0..candidates.len())];

            let fitting: SmallVec<[ShapeIndex; 9]> = (0..env.catalog().len())
                .filter(|&shape| env.can_place(shape, cell))
                .collect();
            if fitting.is_empty() {
                continue;
            }
            let shape = fitting[rng.random_range(0..fitting.len())];
            let color = env.available_color(cell);

            for command in navigator::path_to(env.brush().position, cell, env.grid_size())? {
                env.execute(command);
            }
            for command in navigator::shape_switches(env.brush().shape, shape, env.catalog().len())? {
                env.execute(command);
            }
            for command in navigator::color_switches(env.brush().color, color, env.palette().len())? {
                env.execute(command);
            }

            // The environment may have turned the placement down by now.
            if !env.can_place(shape, cell) {
                continue;
            }

            let Some(mask) = env.catalog().get(shape) else {
                continue;
            };
            let mut scratch = env.grid().clone();
            for pos in mask.cells_at(cell) {
                scratch.set(pos, Some(color));
            }
            if !is_conflict_free(&scratch) {
                trace!(
                    event = "proposal_conflict",
                    attempt,
                    x = cell.x,
                    y = cell.y,
                    shape,
                    color,
                );
                continue;
            }

            env.execute(Command::Place);
            trace!(
                event = "proposal_placed",
                attempt,
                x = cell.x,
                y = cell.y,
                shape,
                color,
            );
            return Ok(Some(cell));
        }

        debug!(event = "proposal_exhausted", budget);
        Ok(None)
    }
}
