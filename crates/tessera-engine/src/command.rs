//! Brush command protocol.

use std::fmt;

use tessera_core::BrushState;

/// A single brush instruction accepted by an [`Environment`].
///
/// [`Environment`]: crate::Environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move the brush one cell up; ignored at the top border.
    Up,
    /// Move the brush one cell down; ignored at the bottom border.
    Down,
    /// Move the brush one cell left; ignored at the left border.
    Left,
    /// Move the brush one cell right; ignored at the right border.
    Right,
    /// Advance to the next shape, wrapping at the end of the catalog.
    SwitchShape,
    /// Advance to the next color, wrapping at the end of the palette.
    SwitchColor,
    /// Paint the selected shape at the brush position, if it fits.
    Place,
    /// Remove the most recently placed shape; ignored when none remain.
    Undo,
    /// Observation request; changes nothing.
    Export,
}

impl Command {
    /// Protocol name of the command.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Up => "up",
            Command::Down => "down",
            Command::Left => "left",
            Command::Right => "right",
            Command::SwitchShape => "switchshape",
            Command::SwitchColor => "switchcolor",
            Command::Place => "place",
            Command::Undo => "undo",
            Command::Export => "export",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// State reported back after every executed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    /// Brush state after the command.
    pub brush: BrushState,
    /// Whether the grid is now full and conflict-free.
    pub satisfied: bool,
}
