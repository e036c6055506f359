use rand::Rng;

use super::board::Board;
use super::bot_controller::{best_move, score_moves};
use super::settings::{FirstPlayerMode, GameSettings, MatchMode};
use super::types::{GameState, Mark, Move, MoveScore, WinningLine};
use super::win_detector::{check_win_with_line, evaluate};
use crate::error::TicTacToeError;
use crate::log;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Computer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub mark: Mark,
    pub kind: PlayerKind,
    /// Cell of this player's latest move.
    pub selected_move: Option<Move>,
    pub win: bool,
}

impl Player {
    pub fn new(mark: Mark, kind: PlayerKind) -> Self {
        Self {
            mark,
            kind,
            selected_move: None,
            win: false,
        }
    }

    pub fn is_computer(&self) -> bool {
        self.kind == PlayerKind::Computer
    }
}

#[derive(Debug)]
pub struct TicTacToeGame {
    board: Board,
    player_x: Player,
    player_o: Player,
    current_mark: Mark,
    state: GameState,
    last_move: Option<Move>,
    history: Vec<Move>,
}

impl TicTacToeGame {
    pub fn new<R: Rng + ?Sized>(settings: &GameSettings, rng: &mut R) -> Self {
        let (x_kind, o_kind) = match settings.match_mode {
            MatchMode::HumanVsHuman => (PlayerKind::Human, PlayerKind::Human),
            MatchMode::ComputerVsComputer => (PlayerKind::Computer, PlayerKind::Computer),
            MatchMode::HumanVsComputer => {
                let human_first = match settings.first_player {
                    FirstPlayerMode::Human => true,
                    FirstPlayerMode::Computer => false,
                    FirstPlayerMode::Random => rng.random_bool(0.5),
                };
                if human_first {
                    (PlayerKind::Human, PlayerKind::Computer)
                } else {
                    (PlayerKind::Computer, PlayerKind::Human)
                }
            }
        };

        Self::with_players(x_kind, o_kind)
    }

    pub fn with_players(x_kind: PlayerKind, o_kind: PlayerKind) -> Self {
        log!("New game: X is {:?}, O is {:?}", x_kind, o_kind);
        Self {
            board: Board::new(),
            player_x: Player::new(Mark::X, x_kind),
            player_o: Player::new(Mark::O, o_kind),
            current_mark: Mark::X,
            state: GameState::Playing,
            last_move: None,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.current_mark).unwrap_or(&self.player_x)
    }

    pub fn player(&self, mark: Mark) -> Option<&Player> {
        match mark {
            Mark::X => Some(&self.player_x),
            Mark::O => Some(&self.player_o),
            Mark::Empty => None,
        }
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn winner(&self) -> Option<&Player> {
        self.state.winner().and_then(|mark| self.player(mark))
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    pub fn is_computer_turn(&self) -> bool {
        self.state == GameState::Playing && self.current_player().is_computer()
    }

    /// Applies a human player's move for the side to move.
    pub fn place_mark(&mut self, index: Move) -> Result<GameState, TicTacToeError> {
        if self.state.is_terminal() {
            return Err(TicTacToeError::GameAlreadyOver);
        }
        if self.current_player().is_computer() {
            return Err(TicTacToeError::NotHumanTurn);
        }
        self.apply_move(index)
    }

    /// Lets the computer pick and apply the move for the side to move.
    pub fn play_computer_move(&mut self) -> Result<Move, TicTacToeError> {
        if self.state.is_terminal() {
            return Err(TicTacToeError::GameAlreadyOver);
        }
        if !self.current_player().is_computer() {
            return Err(TicTacToeError::NotComputerTurn);
        }

        let cell = best_move(&self.board, self.current_mark)?;
        self.apply_move(cell)?;
        Ok(cell)
    }

    /// Minimax scores of every legal move for the side to move.
    pub fn hint(&self) -> Result<Vec<MoveScore>, TicTacToeError> {
        if self.state.is_terminal() {
            return Err(TicTacToeError::GameAlreadyOver);
        }
        score_moves(&self.board, self.current_mark)
    }

    /// Starts over with the same players.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.player_x = Player::new(Mark::X, self.player_x.kind);
        self.player_o = Player::new(Mark::O, self.player_o.kind);
        self.current_mark = Mark::X;
        self.state = GameState::Playing;
        self.last_move = None;
        self.history.clear();
    }

    fn apply_move(&mut self, index: Move) -> Result<GameState, TicTacToeError> {
        let mark = self.current_mark;
        self.board.place(index, mark)?;
        self.last_move = Some(index);
        self.history.push(index);
        if let Some(player) = self.player_mut(mark) {
            player.selected_move = Some(index);
        }

        log!("{} played cell {}: {}", mark, index + 1, self.board.compact());

        self.state = evaluate(&self.board, mark);

        if let Some(winner) = self.state.winner()
            && let Some(player) = self.player_mut(winner)
        {
            player.win = true;
        }

        if self.state == GameState::Playing {
            self.switch_turn();
        } else {
            log!("Game over: {}", self.state);
        }

        Ok(self.state)
    }

    fn player_mut(&mut self, mark: Mark) -> Option<&mut Player> {
        match mark {
            Mark::X => Some(&mut self.player_x),
            Mark::O => Some(&mut self.player_o),
            Mark::Empty => None,
        }
    }

    fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == Mark::X {
            Mark::O
        } else {
            Mark::X
        };
    }
}
