use std::fmt;

use crate::games::tictactoe::Move;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicTacToeError {
    CellOccupied(Move),
    OutOfBounds(Move),
    NoLegalMoves,
    GameAlreadyOver,
    InvalidMark,
    InvalidBoard(String),
    NotHumanTurn,
    NotComputerTurn,
}

impl fmt::Display for TicTacToeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicTacToeError::CellOccupied(index) => write!(f, "Cell {} is already marked", index),
            TicTacToeError::OutOfBounds(index) => write!(f, "Cell {} is out of bounds", index),
            TicTacToeError::NoLegalMoves => write!(f, "No legal moves left on the board"),
            TicTacToeError::GameAlreadyOver => write!(f, "Game is already over"),
            TicTacToeError::InvalidMark => write!(f, "A player mark must be X or O"),
            TicTacToeError::InvalidBoard(reason) => write!(f, "Invalid board: {}", reason),
            TicTacToeError::NotHumanTurn => write!(f, "It is the computer's turn"),
            TicTacToeError::NotComputerTurn => write!(f, "It is a human player's turn"),
        }
    }
}

impl std::error::Error for TicTacToeError {}
