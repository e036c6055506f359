use std::fmt;
use std::str::FromStr;

use super::types::{BOARD_CELLS, BOARD_SIZE, Mark, Move};
use crate::error::TicTacToeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; BOARD_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; BOARD_CELLS]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; BOARD_CELLS] {
        &self.cells
    }

    pub fn get(&self, index: Move) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_empty_cell(&self, index: Move) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    pub fn place(&mut self, index: Move, mark: Mark) -> Result<(), TicTacToeError> {
        if mark == Mark::Empty {
            return Err(TicTacToeError::InvalidMark);
        }

        let cell = self
            .cells
            .get_mut(index)
            .ok_or(TicTacToeError::OutOfBounds(index))?;

        if *cell != Mark::Empty {
            return Err(TicTacToeError::CellOccupied(index));
        }

        *cell = mark;
        Ok(())
    }

    // Hypothetical moves of the search. `index` comes from `generate_moves`
    // and every `set` is retracted with `clear` before the caller returns.

    pub(crate) fn set(&mut self, index: Move, mark: Mark) {
        self.cells[index] = mark;
    }

    pub(crate) fn clear(&mut self, index: Move) {
        self.cells[index] = Mark::Empty;
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    /// One-line form, rows separated by `/`, e.g. `X_X/OO_/___`.
    pub fn compact(&self) -> String {
        self.cells
            .chunks(BOARD_SIZE)
            .map(|row| row.iter().map(|mark| mark.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Empty cells in ascending index order.
pub fn generate_moves(board: &Board) -> Vec<Move> {
    board
        .cells
        .iter()
        .enumerate()
        .filter(|&(_, &cell)| cell == Mark::Empty)
        .map(|(index, _)| index)
        .collect()
}

impl FromStr for Board {
    type Err = TicTacToeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Mark::Empty; BOARD_CELLS];
        let mut count = 0;

        for symbol in s.chars().filter(|c| *c != '/' && !c.is_whitespace()) {
            let mark = Mark::from_symbol(symbol).ok_or_else(|| {
                TicTacToeError::InvalidBoard(format!("unexpected symbol '{}'", symbol))
            })?;
            if count == BOARD_CELLS {
                return Err(TicTacToeError::InvalidBoard(format!(
                    "more than {} cells",
                    BOARD_CELLS
                )));
            }
            cells[count] = mark;
            count += 1;
        }

        if count != BOARD_CELLS {
            return Err(TicTacToeError::InvalidBoard(format!(
                "expected {} cells, found {}",
                BOARD_CELLS, count
            )));
        }

        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if row_index > 0 {
                writeln!(f, "---+---+---")?;
            }
            let line = row
                .iter()
                .enumerate()
                .map(|(col, &mark)| match mark {
                    Mark::Empty => format!(" {} ", row_index * BOARD_SIZE + col + 1),
                    _ => format!(" {} ", mark.symbol()),
                })
                .collect::<Vec<_>>()
                .join("|");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.cells().iter().all(|&cell| cell == Mark::Empty));
        assert_eq!(generate_moves(&board).len(), 9);
        assert!(!board.is_full());
    }

    #[test]
    fn test_generate_moves_empty_board() {
        assert_eq!(generate_moves(&Board::new()), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_generate_moves_partial_board() {
        let board = board("X_O/_X_/O_X");
        assert_eq!(generate_moves(&board), vec![1, 3, 5, 7]);
    }

    #[test]
    fn test_generate_moves_length_matches_filled_cells() {
        let mut board = Board::new();
        let order = [4, 0, 8, 2, 6, 1, 7, 3, 5];
        let mut mark = Mark::X;
        for (filled, &cell) in order.iter().enumerate() {
            assert_eq!(generate_moves(&board).len(), 9 - filled);
            board.place(cell, mark).unwrap();
            mark = mark.opponent().unwrap();
        }
        assert!(generate_moves(&board).is_empty());
        assert!(board.is_full());
    }

    #[test]
    fn test_place_rejects_occupied_cell() {
        let mut board = Board::new();
        board.place(4, Mark::X).unwrap();
        assert_eq!(board.place(4, Mark::O), Err(TicTacToeError::CellOccupied(4)));
        assert_eq!(board.get(4), Some(Mark::X));
    }

    #[test]
    fn test_place_rejects_out_of_bounds_and_empty_mark() {
        let mut board = Board::new();
        assert_eq!(board.place(9, Mark::X), Err(TicTacToeError::OutOfBounds(9)));
        assert_eq!(board.place(0, Mark::Empty), Err(TicTacToeError::InvalidMark));
    }

    #[test]
    fn test_parse_and_compact() {
        let board = board("X_X/OO_/___");
        assert_eq!(board.get(0), Some(Mark::X));
        assert_eq!(board.get(3), Some(Mark::O));
        assert_eq!(board.get(5), Some(Mark::Empty));
        assert_eq!(board.compact(), "X_X/OO_/___");

        let spaced: Board = "x . x\no o .\n. . .".parse().unwrap();
        assert_eq!(spaced, board);
    }

    #[test]
    fn test_parse_rejects_malformed_boards() {
        assert!(matches!("XO".parse::<Board>(), Err(TicTacToeError::InvalidBoard(_))));
        assert!(matches!("XOXOXOXOXO".parse::<Board>(), Err(TicTacToeError::InvalidBoard(_))));
        assert!(matches!("XOZ/___/___".parse::<Board>(), Err(TicTacToeError::InvalidBoard(_))));
    }

    #[test]
    fn test_display_numbers_empty_cells() {
        let rendered = board("X__/_O_/___").to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], " X | 2 | 3 ");
        assert_eq!(lines[1], "---+---+---");
        assert_eq!(lines[2], " 4 | O | 6 ");
        assert_eq!(lines.len(), 5);
    }
}
