use core::ops::{Index, IndexMut};
use core::result::Result;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;
pub use random::*;

mod random;

pub trait MinefieldGenerator {
    fn generate(self, config: GameConfig) -> MineLayout;
}

/// Where the mines are, nothing about what the player has seen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    /// Square layout without any mines.
    pub fn empty(dimension: Coord) -> Self {
        Self {
            mine_mask: Array2::default((dimension, dimension).to_nd_index()),
            mine_count: 0,
        }
    }

    pub fn from_mine_coords(dimension: Coord, mine_coords: &[Coord2]) -> Result<Self, FieldError> {
        let mut layout = Self::empty(dimension);

        for &coords in mine_coords {
            if coords.0 >= dimension || coords.1 >= dimension {
                return Err(FieldError::InvalidCoords);
            }
            layout.place_mine(coords);
        }

        Ok(layout)
    }

    /// Returns `false` when there was already a mine at `coords`.
    pub(crate) fn place_mine(&mut self, coords: Coord2) -> bool {
        if self[coords] {
            return false;
        }
        self[coords] = true;
        self.mine_count += 1;
        true
    }

    pub fn dimension(&self) -> Coord {
        let (rows, _) = self.mine_mask.dim();
        rows.min(Coord::MAX as usize) as Coord
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // at most eight neighbours, always fits
        self.mine_mask
            .iter_neighbors(coords)
            .filter(|&pos| self[pos])
            .count() as u8
    }

    pub fn mine_coords(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.mine_mask
            .indexed_iter()
            .filter(|&(_, &is_mine)| is_mine)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for MineLayout {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.mine_mask[coords.to_nd_index()]
    }
}

/// Hands back a prepared layout as is. The field rejects it when it does not
/// match the config.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMinefieldGenerator {
    layout: MineLayout,
}

impl FixedMinefieldGenerator {
    pub fn new(layout: MineLayout) -> Self {
        Self { layout }
    }
}

impl MinefieldGenerator for FixedMinefieldGenerator {
    fn generate(self, _config: GameConfig) -> MineLayout {
        self.layout
    }
}
