use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

/// What a valid command did to the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    Flag(FlagOutcome),
    Reveal(RevealOutcome),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Turn {
    Exit,
    Played(CommandOutcome),
}

/// One game: a field plus the loss flag.
#[derive(Clone, Debug, PartialEq)]
pub struct Game {
    field: Field,
    stepped_on_mine: bool,
}

impl Game {
    /// Random board drawn from `seed`.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_generator(config, RandomMinefieldGenerator::new(seed))
    }

    pub fn with_generator(config: GameConfig, generator: impl MinefieldGenerator) -> Result<Self> {
        Ok(Self {
            field: Field::generate(config, generator)?,
            stepped_on_mine: false,
        })
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn stepped_on_mine(&self) -> bool {
        self.stepped_on_mine
    }

    /// Parses and applies one input line, already stripped of its terminator.
    pub fn apply_line(&mut self, line: &str) -> Result<Turn> {
        match Input::parse(line, self.field.dimension())? {
            Input::Exit => Ok(Turn::Exit),
            Input::Command(command) => self.apply_command(command).map(Turn::Played),
        }
    }

    pub fn apply_command(&mut self, command: Command) -> Result<CommandOutcome> {
        let command = command.check_bounds(self.field.dimension())?;
        let coords = command.coords().ok_or(FieldError::InvalidCoords)?;
        let cell = *self
            .field
            .cell_at(coords)
            .ok_or(FieldError::InvalidCoords)?;

        if cell.is_revealed() {
            return Err(InputError::AlreadyExplored.into());
        }

        log::debug!("{:?} at {:?}", command.action, coords);
        Ok(match command.action {
            Action::Mine => CommandOutcome::Flag(self.field.toggle_flag(coords)?),
            Action::Free => {
                let outcome = self.field.reveal(coords)?;
                if outcome == RevealOutcome::HitMine {
                    self.stepped_on_mine = true;
                }
                CommandOutcome::Reveal(outcome)
            }
        })
    }

    /// Every safe cell is revealed and none of them carries a flag. Flags on
    /// mines, or missing from mines, do not matter.
    pub fn has_won(&self) -> bool {
        self.field
            .cells()
            .filter(|cell| !cell.is_mine())
            .all(|cell| cell.is_revealed() && !cell.is_flagged())
    }

    pub fn state(&self) -> GameState {
        if self.stepped_on_mine {
            GameState::Lost
        } else if self.has_won() {
            GameState::Won
        } else {
            GameState::InProgress
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(mines: &[Coord2]) -> Game {
        let layout = MineLayout::from_mine_coords(5, mines).unwrap();
        let config = GameConfig::new(5, layout.mine_count()).unwrap();
        Game::with_generator(config, FixedMinefieldGenerator::new(layout)).unwrap()
    }

    #[test]
    fn new_rejects_invalid_config() {
        assert_eq!(
            Game::new(GameConfig::new_unchecked(9, 0), 1),
            Err(GameError::Config(ConfigError::TooFewMines))
        );
    }

    #[test]
    fn clearing_the_board_wins() {
        let mut game = game(&[(2, 2)]);
        assert_eq!(game.state(), GameState::InProgress);

        let turn = game.apply_line("1 1 free").unwrap();

        assert_eq!(
            turn,
            Turn::Played(CommandOutcome::Reveal(RevealOutcome::Expanded(24)))
        );
        assert!(game.has_won());
        assert_eq!(game.state(), GameState::Won);
    }

    #[test]
    fn flag_on_mine_does_not_block_win() {
        let mut game = game(&[(2, 2)]);
        game.apply_line("3 3 mine").unwrap();
        game.apply_line("1 1 free").unwrap();

        assert!(game.has_won());
    }

    #[test]
    fn flag_on_safe_cell_blocks_win() {
        // a wall of mines down the middle column
        let mut game = game(&[(0, 2), (1, 2), (2, 2), (3, 2), (4, 2)]);
        game.apply_line("1 1 free").unwrap();
        game.apply_line("5 1 mine").unwrap();
        game.apply_line("3 1 mine").unwrap();
        assert!(!game.has_won());

        game.apply_line("5 1 mine").unwrap();
        game.apply_line("5 1 free").unwrap();
        assert!(game.has_won());
    }

    #[test]
    fn flagged_safe_cell_is_cleared_by_expansion() {
        let mut game = game(&[(2, 2)]);
        game.apply_line("5 1 mine").unwrap();
        assert!(game.field().cell_at((0, 4)).unwrap().is_flagged());

        game.apply_line("1 1 free").unwrap();

        assert!(game.has_won());
    }

    #[test]
    fn partially_cleared_board_is_not_won() {
        let mut game = game(&[(2, 2)]);
        game.apply_line("2 2 free").unwrap();
        game.apply_line("1 1 mine").unwrap();

        assert!(!game.has_won());
    }

    #[test]
    fn stepping_on_mine_loses() {
        let mut game = game(&[(2, 2), (4, 4)]);

        let turn = game.apply_line("3 3 free").unwrap();

        assert_eq!(
            turn,
            Turn::Played(CommandOutcome::Reveal(RevealOutcome::HitMine))
        );
        assert!(game.stepped_on_mine());
        assert_eq!(game.state(), GameState::Lost);
        assert!(game.field().cell_at((4, 4)).unwrap().is_revealed());
    }

    #[test]
    fn revealed_cells_reject_both_actions() {
        let mut game = game(&[(2, 2)]);
        game.apply_line("2 2 free").unwrap();
        let before = game.clone();

        assert_eq!(
            game.apply_line("2 2 free"),
            Err(GameError::Input(InputError::AlreadyExplored))
        );
        assert_eq!(
            game.apply_line("2 2 mine"),
            Err(GameError::Input(InputError::AlreadyExplored))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn out_of_range_leaves_board_alone() {
        let mut game = game(&[(2, 2)]);
        let before = game.clone();

        let err = game.apply_line("6 1 free").unwrap_err();

        assert!(err.is_recoverable());
        assert_eq!(game, before);
    }

    #[test]
    fn out_of_range_command_value_is_rejected() {
        let mut game = game(&[(2, 2)]);

        assert!(matches!(
            game.apply_command(Command::new(1, 6, Action::Mine)),
            Err(GameError::Input(InputError::OutOfRange { .. }))
        ));
    }

    #[test]
    fn zero_coordinate_command_is_rejected() {
        let mut game = game(&[(2, 2)]);
        let before = game.clone();

        assert!(matches!(
            game.apply_command(Command::new(0, 1, Action::Free)),
            Err(GameError::Input(InputError::OutOfRange { .. }))
        ));
        assert_eq!(game, before);
    }

    #[test]
    fn exit_is_reported() {
        let mut game = game(&[(2, 2)]);

        assert_eq!(game.apply_line("exit"), Ok(Turn::Exit));
    }
}
