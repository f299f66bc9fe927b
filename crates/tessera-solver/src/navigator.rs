//! Brush command planning.
//!
//! Pure planning: these functions compute command sequences without
//! touching an environment, so a caller can inspect or replay them.
//! Movement plans go vertical before horizontal, one command per unit
//! step; selector plans only cycle forward, wrapping past the end.

use smallvec::SmallVec;
use tessera_core::{ColorIndex, Position, Result, ShapeIndex, TesseraError};
use tessera_engine::Command;

fn ensure_in_bounds(position: Position, grid_size: usize) -> Result<()> {
    if position.x >= grid_size || position.y >= grid_size {
        return Err(TesseraError::PositionOutOfBounds {
            x: position.x,
            y: position.y,
            grid_size,
        });
    }
    Ok(())
}

/// Commands that move the brush from `from` to `target`.
///
/// The plan length is the Manhattan distance between the two cells.
///
/// # Errors
///
/// Returns [`TesseraError::PositionOutOfBounds`] when either endpoint
/// lies outside a `grid_size` by `grid_size` grid.
pub fn path_to(
    from: Position,
    target: Position,
    grid_size: usize,
) -> Result<SmallVec<[Command; 16]>> {
    ensure_in_bounds(from, grid_size)?;
    ensure_in_bounds(target, grid_size)?;

    let mut plan = SmallVec::new();
    if target.y >= from.y {
        plan.extend(std::iter::repeat(Command::Down).take(target.y - from.y));
    } else {
        plan.extend(std::iter::repeat(Command::Up).take(from.y - target.y));
    }
    if target.x >= from.x {
        plan.extend(std::iter::repeat(Command::Right).take(target.x - from.x));
    } else {
        plan.extend(std::iter::repeat(Command::Left).take(from.x - target.x));
    }
    Ok(plan)
}

/// Commands that advance the shape selector from `current` to `target`.
///
/// # Errors
///
/// Returns [`TesseraError::InvalidShapeIndex`] when `target` is outside
/// the catalog.
pub fn shape_switches(
    current: ShapeIndex,
    target: ShapeIndex,
    catalog_size: usize,
) -> Result<SmallVec<[Command; 8]>> {
    if target >= catalog_size {
        return Err(TesseraError::InvalidShapeIndex {
            index: target,
            catalog_size,
        });
    }
    let steps = (target + catalog_size - current) % catalog_size;
    Ok(std::iter::repeat(Command::SwitchShape).take(steps).collect())
}

/// Commands that advance the color selector from `current` to `target`.
///
/// # Errors
///
/// Returns [`TesseraError::InvalidColorIndex`] when `target` is outside
/// the palette.
pub fn color_switches(
    current: ColorIndex,
    target: ColorIndex,
    palette_size: usize,
) -> Result<SmallVec<[Command; 8]>> {
    if target >= palette_size {
        return Err(TesseraError::InvalidColorIndex {
            index: target,
            palette_size,
        });
    }
    let steps = (target + palette_size - current) % palette_size;
    Ok(std::iter::repeat(Command::SwitchColor).take(steps).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_engine::Environment;
    use tessera_test::{dot_board, Recording};

    #[test]
    fn test_path_goes_vertical_then_horizontal() {
        let plan = path_to(Position::new(0, 0), Position::new(2, 1), 4).unwrap();
        assert_eq!(
            plan.as_slice(),
            [Command::Down, Command::Right, Command::Right]
        );
    }

    #[test]
    fn test_path_length_is_manhattan_distance() {
        let plan = path_to(Position::new(3, 2), Position::new(1, 0), 6).unwrap();
        assert_eq!(plan.as_slice(), [Command::Up, Command::Up, Command::Left, Command::Left]);
    }

    #[test]
    fn test_path_to_same_cell_is_empty() {
        let plan = path_to(Position::new(2, 2), Position::new(2, 2), 4).unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn test_path_rejects_target_outside_grid() {
        let err = path_to(Position::new(0, 0), Position::new(4, 1), 4).unwrap_err();
        assert_eq!(
            err,
            TesseraError::PositionOutOfBounds {
                x: 4,
                y: 1,
                grid_size: 4
            }
        );
    }

    #[test]
    fn test_path_rejects_start_outside_grid() {
        let err = path_to(Position::new(9, 9), Position::new(1, 1), 4).unwrap_err();
        assert_eq!(
            err,
            TesseraError::PositionOutOfBounds {
                x: 9,
                y: 9,
                grid_size: 4
            }
        );
    }

    #[test]
    fn test_planned_path_lands_the_brush_on_target() {
        let mut board = Recording::new(dot_board(5, 3).unwrap());
        let target = Position::new(4, 2);
        for command in path_to(board.brush().position, target, 5).unwrap() {
            board.execute(command);
        }
        assert_eq!(board.brush().position, target);
        assert_eq!(board.count_of(Command::Down), 2);
        assert_eq!(board.count_of(Command::Right), 4);
        assert_eq!(board.commands().len(), 6);
    }

    #[test]
    fn test_forward_switch_count() {
        assert_eq!(shape_switches(2, 5, 9).unwrap().len(), 3);
        assert_eq!(color_switches(0, 3, 4).unwrap().len(), 3);
    }

    #[test]
    fn test_backward_target_wraps_forward() {
        assert_eq!(shape_switches(5, 2, 9).unwrap().len(), 6);
        assert_eq!(color_switches(3, 0, 4).unwrap().len(), 1);
    }

    #[test]
    fn test_switch_to_current_selection_is_empty() {
        assert!(shape_switches(4, 4, 9).unwrap().is_empty());
        assert!(color_switches(2, 2, 4).unwrap().is_empty());
    }

    #[test]
    fn test_switch_rejects_invalid_index() {
        let err = shape_switches(0, 9, 9).unwrap_err();
        assert_eq!(
            err,
            TesseraError::InvalidShapeIndex {
                index: 9,
                catalog_size: 9
            }
        );
        let err = color_switches(0, 4, 4).unwrap_err();
        assert_eq!(
            err,
            TesseraError::InvalidColorIndex {
                index: 4,
                palette_size: 4
            }
        );
    }

    #[test]
    fn test_planned_switches_land_on_target_selection() {
        let mut board = dot_board(3, 1).unwrap();
        for command in color_switches(board.brush().color, 3, board.palette().len()).unwrap() {
            board.execute(command);
        }
        assert_eq!(board.brush().color, 3);
    }
}
