use serde::{Deserialize, Serialize};
use std::fmt;

pub const BOARD_SIZE: usize = 3;
pub const BOARD_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Cell index into the board, row-major (`row * 3 + col`).
pub type Move = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
            Mark::Empty => '_',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Mark> {
        match symbol {
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' => Some(Mark::O),
            '_' | '.' | '-' => Some(Mark::Empty),
            _ => None,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Outcome classification of a board. X is always the first player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    XWon,
    OWon,
    Draw,
}

impl GameState {
    pub fn is_terminal(self) -> bool {
        self != GameState::Playing
    }

    pub fn winner(self) -> Option<Mark> {
        match self {
            GameState::XWon => Some(Mark::X),
            GameState::OWon => Some(Mark::O),
            GameState::Playing | GameState::Draw => None,
        }
    }

    pub(crate) fn won_by(mark: Mark) -> Option<GameState> {
        match mark {
            Mark::X => Some(GameState::XWon),
            Mark::O => Some(GameState::OWon),
            Mark::Empty => None,
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameState::Playing => write!(f, "in progress"),
            GameState::XWon => write!(f, "X wins"),
            GameState::OWon => write!(f, "O wins"),
            GameState::Draw => write!(f, "draw"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn from_index(index: Move) -> Option<Self> {
        if index >= BOARD_CELLS {
            return None;
        }
        Some(Self::new(index / BOARD_SIZE, index % BOARD_SIZE))
    }

    pub fn to_index(&self) -> Option<Move> {
        if self.row >= BOARD_SIZE || self.col >= BOARD_SIZE {
            return None;
        }
        Some(self.row * BOARD_SIZE + self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [Move; 3],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [Move; 3]) -> Self {
        Self { mark, cells }
    }

    pub fn start(&self) -> Position {
        Position::new(self.cells[0] / BOARD_SIZE, self.cells[0] % BOARD_SIZE)
    }

    pub fn end(&self) -> Position {
        Position::new(self.cells[2] / BOARD_SIZE, self.cells[2] % BOARD_SIZE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveScore {
    pub cell: Move,
    pub score: i32,
}
