//! Shape coloring demo.
//!
//! Builds an in-memory board, runs the annealing solver against it and
//! writes plain-text snapshots of the grid before and after, plus a
//! dump of every surviving placement.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use tessera_engine::{report, Board, Environment};
use tessera_solver::{Solver, SolverConfig};

/// Fill a grid with colored shapes so no two touching cells match.
#[derive(Debug, Parser)]
#[command(name = "shape-coloring", version)]
struct Args {
    /// Grid edge length.
    #[arg(long, default_value_t = 6)]
    grid_size: usize,

    /// Number of randomly pre-colored cells.
    #[arg(long, default_value_t = 5)]
    seeded_cells: usize,

    /// Seed for the board and the solver; OS entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many iterations instead of running to
    /// completion.
    #[arg(long)]
    max_iterations: Option<u64>,

    /// Solver configuration file (TOML).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to write the pre-solve grid snapshot.
    #[arg(long, default_value = "initial_grid.txt")]
    initial_grid: PathBuf,

    /// Where to write the final grid snapshot.
    #[arg(long, default_value = "grid.txt")]
    final_grid: PathBuf,

    /// Where to write the placement dump.
    #[arg(long, default_value = "shapes.txt")]
    placements: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let mut config = match &args.config {
        Some(path) => SolverConfig::load(path)?,
        None => SolverConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.random_seed = Some(seed);
    }
    if let Some(limit) = args.max_iterations {
        config.max_iterations = Some(limit);
    }

    let board_seed = config.random_seed.unwrap_or_else(rand::random);
    let mut board = Board::standard(args.grid_size, board_seed, args.seeded_cells)?;

    println!(
        "Shape coloring: {0}x{0} grid, {1} colors, {2} brushes, {3} pre-colored cells",
        args.grid_size,
        board.palette().len(),
        board.catalog().len(),
        args.seeded_cells,
    );

    report::write_grid(&args.initial_grid, board.grid())?;
    println!("Initial grid written to {}", args.initial_grid.display());

    let mut solver = Solver::new(config)?;
    let outcome = solver.solve(&mut board)?;
    let stats = &outcome.statistics;

    report::write_grid(&args.final_grid, board.grid())?;
    report::write_placements(
        &args.placements,
        board.placed_shapes(),
        board.catalog(),
        board.palette(),
    )?;

    println!();
    println!("Finished: {}", outcome.status);
    println!("  iterations       {}", stats.iterations);
    println!("  accepted         {}", stats.accepted);
    println!("  rejected         {}", stats.rejected);
    println!("  failed searches  {}", stats.failed_proposals);
    println!(
        "  resets           {} half, {} full",
        stats.half_resets, stats.full_resets
    );
    println!("  acceptance rate  {:.2}", stats.acceptance_rate());
    println!("  elapsed          {:.2?}", stats.duration);
    println!("Final grid written to {}", args.final_grid.display());
    println!("Placements written to {}", args.placements.display());

    Ok(())
}
