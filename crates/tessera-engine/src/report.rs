//! Plain-text snapshots of grids and placements.
//!
//! Grids serialize to a whitespace-delimited integer matrix, one row per
//! line, with `-1` marking empty cells. Placements serialize one per
//! line as `<shape> <x> <y> <color>` using catalog and palette names.

use std::fs;
use std::path::Path;

use thiserror::Error;

use tessera_core::{Grid, Palette, PlacedShape, Position, ShapeCatalog};

/// Errors raised while writing or parsing snapshots.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid cell token '{token}' in row {row}")]
    InvalidToken { row: usize, token: String },

    #[error("Rows do not form a square grid")]
    NotSquare,
}

/// Renders the grid as an integer matrix.
pub fn grid_to_text(grid: &Grid) -> String {
    let mut out = String::new();
    for y in 0..grid.size() {
        for x in 0..grid.size() {
            if x > 0 {
                out.push(' ');
            }
            match grid.get(Position::new(x, y)) {
                Some(color) => out.push_str(&color.to_string()),
                None => out.push_str("-1"),
            }
        }
        out.push('\n');
    }
    out
}

/// Parses a grid previously rendered by [`grid_to_text`].
pub fn grid_from_text(text: &str) -> Result<Grid, ReportError> {
    let mut rows: Vec<Vec<Option<usize>>> = Vec::new();
    for (row_idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let mut row = Vec::new();
        for token in line.split_whitespace() {
            let value: i64 = token.parse().map_err(|_| ReportError::InvalidToken {
                row: row_idx,
                token: token.to_string(),
            })?;
            match value {
                -1 => row.push(None),
                v if v >= 0 => row.push(Some(v as usize)),
                _ => {
                    return Err(ReportError::InvalidToken {
                        row: row_idx,
                        token: token.to_string(),
                    })
                }
            }
        }
        rows.push(row);
    }

    let size = rows.len();
    if rows.iter().any(|row| row.len() != size) {
        return Err(ReportError::NotSquare);
    }

    let mut grid = Grid::new(size);
    for (y, row) in rows.iter().enumerate() {
        for (x, &cell) in row.iter().enumerate() {
            grid.set(Position::new(x, y), cell);
        }
    }
    Ok(grid)
}

/// Renders placements one per line, oldest first.
pub fn placements_to_text(
    placed: &[PlacedShape],
    catalog: &ShapeCatalog,
    palette: &Palette,
) -> String {
    let mut out = String::new();
    for p in placed {
        let shape = catalog.name(p.shape).unwrap_or("?");
        let color = palette.name(p.color).unwrap_or("?");
        out.push_str(&format!("{shape} {} {} {color}\n", p.anchor.x, p.anchor.y));
    }
    out
}

/// Writes the grid snapshot to `path`.
pub fn write_grid(path: impl AsRef<Path>, grid: &Grid) -> Result<(), ReportError> {
    fs::write(path, grid_to_text(grid))?;
    Ok(())
}

/// Reads a grid snapshot from `path`.
pub fn read_grid(path: impl AsRef<Path>) -> Result<Grid, ReportError> {
    let text = fs::read_to_string(path)?;
    grid_from_text(&text)
}

/// Writes the placement dump to `path`.
pub fn write_placements(
    path: impl AsRef<Path>,
    placed: &[PlacedShape],
    catalog: &ShapeCatalog,
    palette: &Palette,
) -> Result<(), ReportError> {
    fs::write(path, placements_to_text(placed, catalog, palette))?;
    Ok(())
}
