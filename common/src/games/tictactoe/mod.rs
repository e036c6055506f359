mod board;
mod bot_controller;
mod game_state;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, generate_moves};
pub use bot_controller::{
    DRAW_PAYOFF, LOSS_PAYOFF, UNRESOLVED_POSITION_SCORE, WIN_PAYOFF, best_move, evaluate_position,
    score_moves,
};
pub use game_state::{Player, PlayerKind, TicTacToeGame};
pub use settings::{FirstPlayerMode, GameSettings, MatchMode};
pub use types::{BOARD_CELLS, BOARD_SIZE, GameState, Mark, Move, MoveScore, Position, WinningLine};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line, evaluate};
