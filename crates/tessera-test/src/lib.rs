//! Shared test fixtures for the Tessera crates.
//!
//! Everything here exists to keep tests short: canned catalogs and
//! palettes whose search behavior is easy to reason about, boards
//! built from them, and a command-recording wrapper for asserting on
//! the traffic between a solver and its environment. Intended as a
//! dev-dependency only.

pub mod fixtures;
pub mod recording;

pub use fixtures::{dot_board, dot_catalog, domino_catalog, mono_dot_board, mono_palette};
pub use recording::Recording;
