//! Tessera Engine - grid environments driven by brush commands
//!
//! This crate defines the command protocol between a solver and a grid
//! engine, the [`Environment`] trait both sides agree on, an in-memory
//! reference implementation ([`Board`]) and plain-text snapshot output.
//!
//! The protocol is deliberately narrow: the brush moves one cell at a
//! time, cycles through shapes and colors one step at a time, and the
//! only mutations are `place` and `undo`. Everything a solver learns
//! about the grid comes from the queries on [`Environment`].

pub mod board;
pub mod command;
pub mod environment;
pub mod report;

pub use board::{Board, BoardError};
pub use command::{Command, StepReport};
pub use environment::Environment;
pub use report::ReportError;
