use alloc::vec;
use core::result::Result;

use ndarray::Array2;

use crate::*;

/// The mine field engine: owns every cell of one game.
///
/// A fresh `Field` is empty until [`Field::initialize`] runs; later calls to
/// `initialize` on the same value leave the board untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    cells: Array2<Cell>,
    mine_count: CellCount,
    revealed_count: CellCount,
    flagged_count: CellCount,
    initialized: bool,
}

impl Field {
    pub fn new() -> Self {
        Self {
            cells: Array2::from_shape_fn((0, 0), |(row, col)| {
                Cell::new((row as Coord, col as Coord), false, 0)
            }),
            mine_count: 0,
            revealed_count: 0,
            flagged_count: 0,
            initialized: false,
        }
    }

    /// Builds and initializes a field in one go.
    pub fn generate(
        config: GameConfig,
        generator: impl MinefieldGenerator,
    ) -> Result<Self, ConfigError> {
        let mut field = Self::new();
        field.initialize(config, generator)?;
        Ok(field)
    }

    pub fn initialize(
        &mut self,
        config: GameConfig,
        generator: impl MinefieldGenerator,
    ) -> Result<InitOutcome, ConfigError> {
        if self.initialized {
            log::debug!("Field already initialized, keeping the current board");
            return Ok(InitOutcome::AlreadyInitialized);
        }
        config.validate()?;

        let layout = generator.generate(config);
        let dimension = layout.dimension();
        if dimension != config.dimension || layout.mine_count() != config.mines {
            log::warn!(
                "Layout is {}x{} with {} mines, config asked for {}x{} with {}",
                dimension,
                dimension,
                layout.mine_count(),
                config.dimension,
                config.dimension,
                config.mines
            );
            return Err(ConfigError::LayoutMismatch {
                dimension,
                mines: layout.mine_count(),
            });
        }
        self.cells = Array2::from_shape_fn((dimension, dimension).to_nd_index(), |(row, col)| {
            let position = (row as Coord, col as Coord);
            if layout.contains_mine(position) {
                Cell::new(position, true, 0)
            } else {
                Cell::new(position, false, layout.adjacent_mine_count(position))
            }
        });
        self.mine_count = layout.mine_count();
        self.revealed_count = 0;
        self.flagged_count = 0;
        self.initialized = true;

        log::debug!(
            "Generated {}x{} field with {} mines",
            dimension,
            dimension,
            self.mine_count
        );
        Ok(InitOutcome::Generated)
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn dimension(&self) -> Coord {
        self.cells.nrows().min(Coord::MAX as usize) as Coord
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    /// Cells revealed so far, mines included.
    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    /// `None` exactly when `coords` is off the board.
    pub fn cell_at(&self, coords: Coord2) -> Option<&Cell> {
        self.cells.get(coords.to_nd_index())
    }

    /// Every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome, FieldError> {
        let cell = self
            .cells
            .get_mut(coords.to_nd_index())
            .ok_or(FieldError::InvalidCoords)?;

        let outcome = cell.toggle_flag()?;
        match outcome {
            FlagOutcome::Flagged => self.flagged_count += 1,
            FlagOutcome::Unflagged => self.flagged_count -= 1,
        }
        Ok(outcome)
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome, FieldError> {
        let cell = *self.cell_at(coords).ok_or(FieldError::InvalidCoords)?;

        Ok(if cell.is_revealed() {
            RevealOutcome::NoChange
        } else if cell.is_mine() {
            log::debug!("Mine hit at {:?}", coords);
            self.reveal_all_mines();
            RevealOutcome::HitMine
        } else if cell.adjacent_mines() > 0 {
            self.reveal_cell(coords);
            RevealOutcome::Revealed
        } else {
            RevealOutcome::Expanded(self.expand(coords))
        })
    }

    /// Reveals the mine set and nothing else.
    pub fn reveal_all_mines(&mut self) {
        let dimension = self.dimension();
        for row in 0..dimension {
            for col in 0..dimension {
                if self.cells[(row, col).to_nd_index()].is_mine() {
                    self.reveal_cell((row, col));
                }
            }
        }
    }

    /// Flood fill from `coords`: reveals it, every empty cell connected to it
    /// and the numbered cells bordering that region. Returns how many cells
    /// were newly revealed. Mines are never touched.
    pub fn expand(&mut self, coords: Coord2) -> CellCount {
        let Some(&start) = self.cell_at(coords) else {
            return 0;
        };
        if start.is_mine() {
            return 0;
        }

        let mut revealed = 0;
        if self.reveal_cell(coords) {
            revealed += 1;
        }

        // a position is pushed at most once: it is revealed before being pushed
        let mut pending = vec![coords];
        while let Some(current) = pending.pop() {
            for neighbor in self.cells.iter_neighbors(current) {
                let cell = self.cells[neighbor.to_nd_index()];
                if cell.is_revealed() || cell.is_mine() {
                    continue;
                }

                self.reveal_cell(neighbor);
                revealed += 1;
                if cell.adjacent_mines() == 0 {
                    pending.push(neighbor);
                }
            }
        }

        log::trace!("Expanded {} cells from {:?}", revealed, coords);
        revealed
    }

    fn reveal_cell(&mut self, coords: Coord2) -> bool {
        let cell = &mut self.cells[coords.to_nd_index()];
        let was_flagged = cell.is_flagged();
        if !cell.reveal() {
            return false;
        }

        if was_flagged {
            self.flagged_count -= 1;
        }
        self.revealed_count += 1;
        true
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}
