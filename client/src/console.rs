use std::io::{self, Write};
use tictactoe_common::games::tictactoe::{
    BOARD_CELLS, BOARD_SIZE, Board, GameState, Mark, Move, MoveScore, Position, TicTacToeGame,
    WinningLine,
};
use tictactoe_common::{debug_log, log};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Cell(Move),
    Hint,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Finished(GameState),
    Quit,
}

/// Accepts a cell number `1`-`9`, a 1-based `row col` pair, `hint` or `q`.
pub fn parse_command(input: &str) -> Result<Command, String> {
    let input = input.trim().to_lowercase();

    match input.as_str() {
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        "h" | "hint" => return Ok(Command::Hint),
        _ => {}
    }

    let numbers = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(|part| part.parse::<usize>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| format!("Unrecognized input '{}'", input))?;

    let index = match numbers.as_slice() {
        [cell @ 1..=BOARD_CELLS] => Some(cell - 1),
        [row @ (1..), col @ (1..)] => Position::new(row - 1, col - 1).to_index(),
        _ => None,
    };

    index
        .map(Command::Cell)
        .ok_or_else(|| format!("'{}' is not a cell on the board", input))
}

/// Score grid for the empty cells; taken cells show their mark.
pub fn format_scores(board: &Board, scores: &[MoveScore]) -> String {
    let mut cells: Vec<String> = board
        .cells()
        .iter()
        .map(|mark| match mark {
            Mark::Empty => "?".to_string(),
            _ => mark.symbol().to_string(),
        })
        .collect();

    for MoveScore { cell, score } in scores {
        if let Some(slot) = cells.get_mut(*cell) {
            *slot = score.to_string();
        }
    }

    cells
        .chunks(BOARD_SIZE)
        .map(|row| {
            row.iter()
                .map(|cell| format!("{:>4}", cell))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Cell number with its 1-based row and column, e.g. `6 (row 2, col 3)`.
pub fn describe_cell(cell: Move) -> String {
    match Position::from_index(cell) {
        Some(position) => format!(
            "{} (row {}, col {})",
            cell + 1,
            position.row + 1,
            position.col + 1
        ),
        None => (cell + 1).to_string(),
    }
}

pub fn describe_line(line: &WinningLine) -> String {
    let (start, end) = (line.start(), line.end());
    format!(
        "row {} col {} to row {} col {}",
        start.row + 1,
        start.col + 1,
        end.row + 1,
        end.col + 1
    )
}

fn print_hint(game: &TicTacToeGame) {
    match game.hint() {
        Ok(scores) => println!(
            "Move scores for {}:\n{}",
            game.current_mark(),
            format_scores(game.board(), &scores)
        ),
        Err(e) => println!("No hint available: {}", e),
    }
}

fn print_result(game: &TicTacToeGame) {
    match game.winner() {
        Some(winner) => {
            let line = game
                .winning_line()
                .map(|line| format!(" along {}", describe_line(&line)))
                .unwrap_or_default();
            println!("{} ({:?}) wins{}!", winner.mark, winner.kind, line);
        }
        None => println!("It's a draw."),
    }
}

pub fn play_round<I>(
    game: &mut TicTacToeGame,
    input: &mut I,
    show_scores: bool,
) -> io::Result<RoundOutcome>
where
    I: Iterator<Item = io::Result<String>>,
{
    loop {
        println!("\n{}", game.board());

        if game.state().is_terminal() {
            print_result(game);
            return Ok(RoundOutcome::Finished(game.state()));
        }

        let mark = game.current_mark();

        if game.is_computer_turn() {
            if show_scores {
                print_hint(game);
            }
            match game.play_computer_move() {
                Ok(cell) => println!("Computer ({}) plays {}", mark, describe_cell(cell)),
                Err(e) => {
                    log!("Computer could not move: {}", e);
                    println!("Computer ({}) could not move: {}", mark, e);
                    return Ok(RoundOutcome::Quit);
                }
            }
            continue;
        }

        print!("{} to move [1-9 | row col | hint | q]: ", mark);
        io::stdout().flush()?;

        let Some(line) = input.next() else {
            return Ok(RoundOutcome::Quit);
        };
        let line = line?;

        match parse_command(&line) {
            Ok(Command::Quit) => return Ok(RoundOutcome::Quit),
            Ok(Command::Hint) => print_hint(game),
            Ok(Command::Cell(cell)) => {
                if let Err(e) = game.place_mark(cell) {
                    debug_log!("Rejected move {} from {}: {}", cell, mark, e);
                    println!("{}", e);
                }
            }
            Err(message) => println!("{}", message),
        }
    }
}

pub fn ask_rematch<I>(input: &mut I) -> io::Result<bool>
where
    I: Iterator<Item = io::Result<String>>,
{
    print!("Play again? [y/N]: ");
    io::stdout().flush()?;

    match input.next() {
        Some(line) => Ok(matches!(line?.trim().to_lowercase().as_str(), "y" | "yes")),
        None => Ok(false),
    }
}
