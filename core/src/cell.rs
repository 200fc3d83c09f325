use core::result::Result;

use serde::{Deserialize, Serialize};

use crate::*;

pub const HIDDEN_MARK: char = '.';
pub const FLAG_MARK: char = '@';
pub const MINE_MARK: char = 'X';
pub const EMPTY_MARK: char = '#';

/// One position of the field. Mine placement and the adjacent count are fixed
/// once the field is generated, `revealed` only ever goes from false to true.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    position: Coord2,
    mine: bool,
    adjacent_mines: u8,
    revealed: bool,
    flagged: bool,
}

impl Cell {
    pub(crate) fn new(position: Coord2, mine: bool, adjacent_mines: u8) -> Self {
        Self {
            position,
            mine,
            adjacent_mines,
            revealed: false,
            flagged: false,
        }
    }

    pub fn position(&self) -> Coord2 {
        self.position
    }

    pub fn is_mine(&self) -> bool {
        self.mine
    }

    /// Only meaningful for cells that are not mines.
    pub fn adjacent_mines(&self) -> u8 {
        self.adjacent_mines
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn is_flagged(&self) -> bool {
        self.flagged
    }

    /// Safe cell with no mines around it, the seed of a flood fill.
    pub fn is_empty(&self) -> bool {
        !self.mine && self.adjacent_mines == 0
    }

    pub fn glyph(&self) -> char {
        match (self.revealed, self.flagged, self.mine) {
            (false, false, _) => HIDDEN_MARK,
            (false, true, _) => FLAG_MARK,
            (true, _, true) => MINE_MARK,
            (true, _, false) if self.adjacent_mines == 0 => EMPTY_MARK,
            (true, _, false) => char::from(b'0' + self.adjacent_mines),
        }
    }

    /// Returns `true` if the cell was hidden before.
    pub(crate) fn reveal(&mut self) -> bool {
        let was_hidden = !self.revealed;
        self.revealed = true;
        self.flagged = false;
        was_hidden
    }

    pub(crate) fn toggle_flag(&mut self) -> Result<FlagOutcome, FieldError> {
        if self.revealed {
            debug_assert!(!self.flagged, "revealed cell {:?} is flagged", self.position);
            return Err(FieldError::AlreadyRevealed);
        }

        self.flagged = !self.flagged;
        Ok(if self.flagged {
            FlagOutcome::Flagged
        } else {
            FlagOutcome::Unflagged
        })
    }
}
