use thiserror::Error;

use crate::{CellCount, Coord};

/// Rejected board settings, raised before any cell exists.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("The number of mines must be greater than or equal to 1")]
    TooFewMines,
    #[error("The number of mines must be lower: {requested} requested, at most {max} allowed")]
    TooManyMines { requested: CellCount, max: CellCount },
    #[error("The dimension of the field must be greater than 4 and less than 40, got {0}")]
    InvalidDimension(Coord),
    #[error("Generated layout is {dimension}x{dimension} with {mines} mines, not what was configured")]
    LayoutMismatch { dimension: Coord, mines: CellCount },
}

/// Engine operation attempted against the wrong cell state.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Cannot flag or unflag a revealed cell")]
    AlreadyRevealed,
}

/// Player input that is rejected without changing the board.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid input")]
    Malformed,
    #[error("Invalid input: ({col}, {row}) is outside a {dimension}x{dimension} field")]
    OutOfRange { col: u8, row: u8, dimension: Coord },
    #[error("Cell already explored")]
    AlreadyExplored,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Field(#[from] FieldError),
    #[error(transparent)]
    Input(#[from] InputError),
}

impl GameError {
    /// Only bad player input can be shrugged off and re-prompted.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Input(_))
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
