use super::board::Board;
use super::types::{GameState, Mark, Move, WinningLine};

pub const WINNING_LINES: [[Move; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Classifies `board`. Lines of `active_mark`, the mark played last, are
/// checked before the other mark's.
pub fn evaluate(board: &Board, active_mark: Mark) -> GameState {
    let check_order = match active_mark.opponent() {
        Some(other) => [active_mark, other],
        None => [Mark::X, Mark::O],
    };

    for mark in check_order {
        if find_line(board, mark).is_some()
            && let Some(state) = GameState::won_by(mark)
        {
            return state;
        }
    }

    if board.is_full() {
        GameState::Draw
    } else {
        GameState::Playing
    }
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    [Mark::X, Mark::O]
        .into_iter()
        .find_map(|mark| find_line(board, mark).map(|cells| WinningLine::new(mark, cells)))
}

fn find_line(board: &Board, mark: Mark) -> Option<[Move; 3]> {
    let cells = board.cells();
    WINNING_LINES
        .into_iter()
        .find(|line| line.iter().all(|&index| cells[index] == mark))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::BOARD_CELLS;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    fn board_with_line(line: [Move; 3], mark: Mark) -> Board {
        let mut cells = [Mark::Empty; BOARD_CELLS];
        for index in line {
            cells[index] = mark;
        }
        Board::from_cells(cells)
    }

    #[test]
    fn test_every_line_wins_for_each_mark() {
        for line in WINNING_LINES {
            let x_board = board_with_line(line, Mark::X);
            assert_eq!(evaluate(&x_board, Mark::X), GameState::XWon, "line {:?}", line);
            assert_eq!(evaluate(&x_board, Mark::O), GameState::XWon, "line {:?}", line);

            let o_board = board_with_line(line, Mark::O);
            assert_eq!(evaluate(&o_board, Mark::O), GameState::OWon, "line {:?}", line);
            assert_eq!(evaluate(&o_board, Mark::X), GameState::OWon, "line {:?}", line);
        }
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = board("XOX/XOO/OXO");
        assert_eq!(evaluate(&board, Mark::X), GameState::Draw);
        assert_eq!(evaluate(&board, Mark::O), GameState::Draw);
    }

    #[test]
    fn test_open_board_without_line_is_playing() {
        assert_eq!(evaluate(&board("XOX/O__/___"), Mark::X), GameState::Playing);
        assert_eq!(evaluate(&Board::new(), Mark::X), GameState::Playing);
    }

    #[test]
    fn test_full_board_with_line_is_win_not_draw() {
        let board = board("XOX/OXO/OXX");
        assert_eq!(evaluate(&board, Mark::X), GameState::XWon);
    }

    #[test]
    fn test_active_mark_decides_double_line_attribution() {
        let board = board("XXX/OOO/___");
        assert_eq!(evaluate(&board, Mark::X), GameState::XWon);
        assert_eq!(evaluate(&board, Mark::O), GameState::OWon);
    }

    #[test]
    fn test_winning_line_is_reported() {
        let line = check_win_with_line(&board("X_O/_XO/__X")).unwrap();
        assert_eq!(line.mark, Mark::X);
        assert_eq!(line.cells, [0, 4, 8]);
        assert_eq!(check_win(&board("X_O/_XO/___")), None);
    }
}
