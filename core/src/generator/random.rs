use super::*;

/// Purely random placement, reproducible from `seed`.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: GameConfig) -> MineLayout {
        use rand::prelude::*;

        let dimension = config.dimension;
        let total_cells = config.total_cells();
        let mut layout = MineLayout::empty(dimension);

        let mines = if config.mines > total_cells {
            log::warn!(
                "Minefield cannot hold {} mines, only placing {}",
                config.mines,
                total_cells
            );
            total_cells
        } else {
            config.mines
        };

        let mut rng = SmallRng::seed_from_u64(self.seed);
        for _ in 0..mines {
            // retry until a cell without a mine comes up
            loop {
                let row = rng.random_range(0..dimension);
                let col = rng.random_range(0..dimension);
                if layout.place_mine((row, col)) {
                    break;
                }
            }
        }

        log::debug!(
            "Placed {} mines on a {}x{} field (seed {})",
            layout.mine_count(),
            dimension,
            dimension,
            self.seed
        );
        layout
    }
}
