use core::result::Result;
use core::str::FromStr;

use crate::*;

pub const EXIT_COMMAND: &str = "exit";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Set or unset a mine mark.
    Mine,
    /// Claim the cell is free of mines.
    Free,
}

impl FromStr for Action {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mine" => Ok(Self::Mine),
            "free" => Ok(Self::Free),
            _ => Err(InputError::Malformed),
        }
    }
}

/// A move as typed by the player: column first, both 1-based.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Command {
    pub col: u8,
    pub row: u8,
    pub action: Action,
}

impl Command {
    pub fn new(col: u8, row: u8, action: Action) -> Self {
        Self { col, row, action }
    }

    pub fn check_bounds(self, dimension: Coord) -> Result<Self, InputError> {
        let in_range = |value: u8| (1..=dimension).contains(&value);
        if in_range(self.col) && in_range(self.row) {
            Ok(self)
        } else {
            Err(InputError::OutOfRange {
                col: self.col,
                row: self.row,
                dimension,
            })
        }
    }

    /// Zero-based `(row, col)`, `None` when either coordinate is 0.
    pub fn coords(self) -> Option<Coord2> {
        Some((self.row.checked_sub(1)?, self.col.checked_sub(1)?))
    }
}

/// One or two digits without a leading zero.
fn parse_coordinate(s: &str) -> Result<u8, InputError> {
    let bytes = s.as_bytes();
    let well_formed = matches!(bytes.len(), 1 | 2)
        && bytes[0] != b'0'
        && bytes.iter().all(u8::is_ascii_digit);
    if !well_formed {
        return Err(InputError::Malformed);
    }
    s.parse().map_err(|_| InputError::Malformed)
}

/// Parses `<col> <row> <mine|free>`, separated by single spaces.
impl FromStr for Command {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(' ');
        let (Some(col), Some(row), Some(action), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(InputError::Malformed);
        };

        Ok(Self::new(
            parse_coordinate(col)?,
            parse_coordinate(row)?,
            action.parse()?,
        ))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Exit,
    Command(Command),
}

impl Input {
    /// Parses one line without its terminator, checking coordinates against
    /// the field.
    pub fn parse(line: &str, dimension: Coord) -> Result<Self, InputError> {
        if line == EXIT_COMMAND {
            return Ok(Self::Exit);
        }
        let command: Command = line.parse()?;
        Ok(Self::Command(command.check_bounds(dimension)?))
    }
}
