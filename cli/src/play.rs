use std::io::{BufRead, Write};

use anyhow::Context;
use sapper_core::{Game, GameState, Turn};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Ending {
    Won,
    Lost,
    Exited,
}

/// Next line without its terminator, `None` at end of input.
fn read_line(input: &mut impl BufRead) -> anyhow::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.strip_suffix('\n').unwrap_or(&line);
    let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
    Ok(Some(trimmed.to_owned()))
}

/// Runs the prompt loop until the board is cleared, a mine goes off or the
/// player leaves.
pub(crate) fn play(
    game: &mut Game,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> anyhow::Result<Ending> {
    write!(output, "{}", game.field())?;

    loop {
        match game.state() {
            GameState::Won => {
                writeln!(output, "Congratulations! You found all the mines!")?;
                return Ok(Ending::Won);
            }
            GameState::Lost => {
                writeln!(output, "You stepped on a mine and failed!")?;
                return Ok(Ending::Lost);
            }
            GameState::InProgress => {}
        }

        loop {
            writeln!(output, "Set/unset mines marks or claim a cell as free:")?;
            output.flush()?;

            let Some(line) = read_line(input)? else {
                log::debug!("input closed");
                writeln!(output, "Bye!")?;
                return Ok(Ending::Exited);
            };

            match game.apply_line(&line) {
                Ok(Turn::Exit) => {
                    writeln!(output, "Bye!")?;
                    return Ok(Ending::Exited);
                }
                Ok(Turn::Played(outcome)) => {
                    log::debug!("{:?} -> {:?}", line, outcome);
                    break;
                }
                Err(err) if err.is_recoverable() => {
                    log::debug!("rejected {:?}: {}", line, err);
                    writeln!(output, "{}", err)?;
                }
                Err(err) => {
                    return Err(err).with_context(|| format!("Engine rejected {:?}", line));
                }
            }
        }

        write!(output, "{}", game.field())?;
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use sapper_core::{FixedMinefieldGenerator, GameConfig, MineLayout};

    use super::*;

    const PROMPT: &str = "Set/unset mines marks or claim a cell as free:\n";

    fn game(mines: &[(u8, u8)]) -> Game {
        let layout = MineLayout::from_mine_coords(5, mines).unwrap();
        let config = GameConfig::new(5, layout.mine_count()).unwrap();
        Game::with_generator(config, FixedMinefieldGenerator::new(layout)).unwrap()
    }

    fn run(game: &mut Game, stdin: &str) -> (Ending, String) {
        let mut output = Vec::new();
        let ending = play(game, &mut Cursor::new(stdin), &mut output).unwrap();
        (ending, String::from_utf8(output).unwrap())
    }

    #[test]
    fn winning_game() {
        let mut game = game(&[(2, 2)]);

        let (ending, output) = run(&mut game, "1 1 free\n");

        assert_eq!(ending, Ending::Won);
        assert!(output.starts_with("---|  1  2  3  4  5 |\n"));
        assert!(output.contains("  3|  #  1  .  1  # |\n"));
        assert!(output.ends_with("Congratulations! You found all the mines!\n"));
    }

    #[test]
    fn losing_game_shows_mines() {
        let mut game = game(&[(2, 2), (0, 4)]);

        let (ending, output) = run(&mut game, "3 3 free\n");

        assert_eq!(ending, Ending::Lost);
        assert!(output.contains("  1|  .  .  .  .  X |\n"));
        assert!(output.contains("  3|  .  .  X  .  . |\n"));
        assert!(output.ends_with("You stepped on a mine and failed!\n"));
    }

    #[test]
    fn invalid_lines_reprompt_without_printing_the_board() {
        let mut game = game(&[(2, 2)]);

        let (ending, output) = run(&mut game, "99 1 free\nhello\n2 2 free\n2 2 mine\nexit\n");

        assert_eq!(ending, Ending::Exited);
        // initial board plus one after the single valid move
        assert_eq!(output.matches("---|  1  2  3  4  5 |").count(), 2);
        assert_eq!(output.matches(PROMPT).count(), 5);
        assert_eq!(output.matches("Invalid input").count(), 2);
        assert!(output.contains("Cell already explored\n"));
        assert!(output.ends_with("Bye!\n"));
    }

    #[test]
    fn exit_skips_win_check() {
        let mut game = game(&[(2, 2)]);

        let (ending, output) = run(&mut game, "exit\n1 1 free\n");

        assert_eq!(ending, Ending::Exited);
        assert!(!output.contains("Congratulations"));
        assert!(!game.field().cell_at((0, 0)).unwrap().is_revealed());
    }

    #[test]
    fn end_of_input_exits() {
        let mut game = game(&[(2, 2)]);

        let (ending, output) = run(&mut game, "5 5 mine\r\n");

        assert_eq!(ending, Ending::Exited);
        assert!(output.contains("  5|  .  .  .  .  @ |\n"));
    }
}
