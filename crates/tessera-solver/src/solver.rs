//! Annealing search controller.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace};

use tessera_core::{heuristic_value, Position};
use tessera_engine::{Command, Environment};

use crate::config::SolverConfig;
use crate::error::Result;
use crate::generator::MoveGenerator;
use crate::statistics::SearchStatistics;

/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// The environment reported a full, conflict-free grid.
    Satisfied,
    /// The configured iteration ceiling was reached first.
    IterationLimit,
}

impl SolveStatus {
    /// Short name, used in logs and summaries.
    pub fn as_str(&self) -> &'static str {
        match self {
            SolveStatus::Satisfied => "satisfied",
            SolveStatus::IterationLimit => "iteration limit",
        }
    }
}

impl std::fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a solve run.
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    /// Why the search stopped.
    pub status: SolveStatus,
    /// Counters collected along the way.
    pub statistics: SearchStatistics,
}

/// Whether a scored step is kept.
///
/// Improvements are always kept. Anything else is kept with probability
/// `exp(delta / temperature)`, so equal scores always pass while the
/// temperature is above zero and nothing passes once it bottoms out.
fn accept<R: Rng>(rng: &mut R, current: f64, neighbor: f64, temperature: f64) -> bool {
    neighbor > current || rng.random::<f64>() < ((neighbor - current) / temperature).exp()
}

/// Simulated annealing controller.
///
/// Drives an [`Environment`] through brush commands. Each iteration
/// asks the move generator for a placement, scores the grid and either
/// keeps the step or undoes it. A prolonged stall rolls placements
/// back, first half of them, then all of them.
#[derive(Debug)]
pub struct Solver {
    config: SolverConfig,
    generator: MoveGenerator,
    rng: StdRng,
}

impl Solver {
    /// Creates a solver, validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Config`](crate::SolverError::Config) when
    /// a knob is outside its allowed range.
    pub fn new(config: SolverConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let generator = MoveGenerator::new(config.locality_bias, config.locality_radius);
        Ok(Self {
            config,
            generator,
            rng,
        })
    }

    /// The configuration the solver was built with.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Rolls placements back once the stall counter crosses a reset
    /// threshold: half of them from `half_reset_after` on, all of them
    /// from `full_reset_after` on.
    ///
    /// Returns the re-baselined score when a reset fired.
    fn stall_reset<E: Environment>(
        &self,
        env: &mut E,
        stall: u32,
        stats: &mut SearchStatistics,
    ) -> Option<f64> {
        let (kind, undone) = if stall >= self.config.full_reset_after {
            stats.full_resets += 1;
            ("full", env.placed_shapes().len())
        } else if stall >= self.config.half_reset_after {
            stats.half_resets += 1;
            ("half", env.placed_shapes().len() / 2)
        } else {
            return None;
        };
        for _ in 0..undone {
            env.execute(Command::Undo);
        }
        let score = heuristic_value(env.grid(), env.placed_shapes());
        debug!(event = "stall_reset", kind, undone, score);
        Some(score)
    }

    /// Runs the search until the environment reports satisfaction.
    ///
    /// With `max_iterations` configured the loop also stops at the
    /// ceiling; without it the search runs for as long as it takes,
    /// which on an unsatisfiable board is forever.
    pub fn solve<E: Environment>(&mut self, env: &mut E) -> Result<SolveOutcome> {
        let start = Instant::now();
        let mut stats = SearchStatistics::default();
        let mut temperature = self.config.initial_temperature;
        let mut stall = 0u32;
        let mut last_cell: Option<Position> = None;
        let mut current = heuristic_value(env.grid(), env.placed_shapes());
        let mut last_progress = start;

        info!(
            event = "solve_start",
            grid_size = env.grid_size(),
            score = current,
            temperature,
        );

        let status = loop {
            if env.is_satisfied() {
                break SolveStatus::Satisfied;
            }
            if let Some(limit) = self.config.max_iterations {
                if stats.iterations >= limit {
                    break SolveStatus::IterationLimit;
                }
            }
            stats.iterations += 1;

            // A long stall rolls the board back. The counter itself is
            // only cleared by the next accepted step, so a stall deep
            // enough keeps escalating until something is kept again.
            if let Some(score) = self.stall_reset(env, stall, &mut stats) {
                current = score;
            }

            let proposal = self.generator.propose(env, &mut self.rng, last_cell)?;
            if proposal.is_none() {
                env.execute(Command::Undo);
                stats.failed_proposals += 1;
            }

            let neighbor = heuristic_value(env.grid(), env.placed_shapes());
            let kept = accept(&mut self.rng, current, neighbor, temperature);

            trace!(
                event = "step",
                iteration = stats.iterations,
                score = neighbor,
                temperature,
                accepted = kept,
            );

            if kept {
                current = neighbor;
                last_cell = proposal;
                stall = 0;
                stats.accepted += 1;
            } else {
                env.execute(Command::Undo);
                stall += 1;
                stats.rejected += 1;
            }

            temperature *= self.config.cooling_rate;

            if last_progress.elapsed().as_secs() >= 1 {
                debug!(
                    event = "progress",
                    iteration = stats.iterations,
                    score = current,
                    temperature,
                    placed = env.placed_shapes().len(),
                );
                last_progress = Instant::now();
            }
        };

        stats.final_temperature = temperature;
        stats.duration = start.elapsed();

        info!(
            event = "solve_end",
            status = status.as_str(),
            iterations = stats.iterations,
            accepted = stats.accepted,
            rejected = stats.rejected,
            duration_ms = stats.duration.as_millis() as u64,
        );

        Ok(SolveOutcome {
            status,
            statistics: stats,
        })
    }
}
