//! Annealing search for the shape coloring puzzle.
//!
//! The solver never touches grid cells directly. It plans brush
//! command sequences ([`navigator`]), asks a budgeted random search
//! for conflict-free placements ([`generator`]) and accepts or undoes
//! each step with a cooling acceptance rule ([`solver`]), all against
//! any [`tessera_engine::Environment`].
//!
//! # Examples
//!
//! ```
//! use tessera_engine::{Board, Environment};
//! use tessera_solver::{Solver, SolverConfig};
//!
//! let mut board = Board::standard(4, 11, 2).unwrap();
//! let config = SolverConfig::default()
//!     .with_random_seed(11)
//!     .with_max_iterations(400);
//! let mut solver = Solver::new(config).unwrap();
//! let outcome = solver.solve(&mut board).unwrap();
//!
//! // Whatever the stopping reason, committed placements never conflict.
//! assert!(tessera_core::is_conflict_free(board.grid()));
//! println!("{} after {} iterations", outcome.status, outcome.statistics.iterations);
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod navigator;
pub mod solver;
pub mod statistics;

pub use config::{ConfigError, SolverConfig};
pub use error::{Result, SolverError};
pub use generator::MoveGenerator;
pub use solver::{SolveOutcome, SolveStatus, Solver};
pub use statistics::SearchStatistics;
