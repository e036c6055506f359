use super::board::{Board, generate_moves};
use super::types::{GameState, Mark, Move, MoveScore};
use super::win_detector::evaluate;
use crate::debug_log;
use crate::error::TicTacToeError;

/// Payoff of a terminal position won by the player being maximized (+INF).
pub const WIN_PAYOFF: i32 = 10;
/// Payoff of a terminal position won by the opponent (-INF).
pub const LOSS_PAYOFF: i32 = -WIN_PAYOFF;
pub const DRAW_PAYOFF: i32 = 0;
/// What `evaluate_position` reports for a board still in play. Not on the
/// payoff scale. The search only falls back to it for a non-terminal node with
/// no moves, which a 9-cell board never produces.
pub const UNRESOLVED_POSITION_SCORE: i32 = -1;

/// Scores `board` from `player`'s side: a payoff if the game is over,
/// `UNRESOLVED_POSITION_SCORE` otherwise.
pub fn evaluate_position(board: &Board, player: Mark) -> i32 {
    terminal_payoff(evaluate(board, player), player).unwrap_or(UNRESOLVED_POSITION_SCORE)
}

/// Picks the move for `player` on a board that is still in play.
///
/// An immediate win is taken first, then an immediate win of the opponent is
/// blocked. Otherwise every legal move is scored by exhaustive minimax and the
/// lowest index among the best scores wins. `board` is never modified.
pub fn best_move(board: &Board, player: Mark) -> Result<Move, TicTacToeError> {
    let opponent = player.opponent().ok_or(TicTacToeError::InvalidMark)?;
    let available_moves = legal_moves(board, opponent)?;

    let mut scratch = *board;

    if let Some(cell) = find_winning_move(&mut scratch, player, &available_moves) {
        debug_log!("{} completes a line at {}", player, cell);
        return Ok(cell);
    }

    if let Some(cell) = find_winning_move(&mut scratch, opponent, &available_moves) {
        debug_log!("{} blocks {} at {}", player, opponent, cell);
        return Ok(cell);
    }

    let scores = search_scores(&mut scratch, player, opponent, &available_moves);
    debug_log!("minimax scores for {} on {}: {:?}", player, board.compact(), scores);

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for MoveScore { cell, score } in scores {
        if score > best_score {
            best_score = score;
            best_move = Some(cell);
        }
    }

    best_move.ok_or(TicTacToeError::NoLegalMoves)
}

/// Minimax score of every legal move for `player`, in ascending cell order.
pub fn score_moves(board: &Board, player: Mark) -> Result<Vec<MoveScore>, TicTacToeError> {
    let opponent = player.opponent().ok_or(TicTacToeError::InvalidMark)?;
    let available_moves = legal_moves(board, opponent)?;

    let mut scratch = *board;
    Ok(search_scores(&mut scratch, player, opponent, &available_moves))
}

fn legal_moves(board: &Board, last_mover: Mark) -> Result<Vec<Move>, TicTacToeError> {
    if evaluate(board, last_mover).is_terminal() {
        return Err(TicTacToeError::NoLegalMoves);
    }

    let moves = generate_moves(board);
    if moves.is_empty() {
        return Err(TicTacToeError::NoLegalMoves);
    }
    Ok(moves)
}

fn terminal_payoff(state: GameState, player: Mark) -> Option<i32> {
    match state {
        GameState::Playing => None,
        GameState::Draw => Some(DRAW_PAYOFF),
        _ if state.winner() == Some(player) => Some(WIN_PAYOFF),
        _ => Some(LOSS_PAYOFF),
    }
}

fn find_winning_move(board: &mut Board, mark: Mark, moves: &[Move]) -> Option<Move> {
    for &cell in moves {
        board.set(cell, mark);
        let state = evaluate(board, mark);
        board.clear(cell);

        if state.winner() == Some(mark) {
            return Some(cell);
        }
    }
    None
}

fn search_scores(
    board: &mut Board,
    player: Mark,
    opponent: Mark,
    moves: &[Move],
) -> Vec<MoveScore> {
    moves
        .iter()
        .map(|&cell| {
            board.set(cell, player);
            let score = min_value(board, player, opponent);
            board.clear(cell);
            MoveScore { cell, score }
        })
        .collect()
}

// `player` is the side being maximized for the whole recursion; `max_value`
// runs on plies where `player` moves, `min_value` on the opponent's.

fn max_value(board: &mut Board, player: Mark, opponent: Mark) -> i32 {
    if let Some(payoff) = terminal_payoff(evaluate(board, opponent), player) {
        return payoff;
    }

    generate_moves(board)
        .into_iter()
        .map(|cell| {
            board.set(cell, player);
            let score = min_value(board, player, opponent);
            board.clear(cell);
            score
        })
        .max()
        .unwrap_or(UNRESOLVED_POSITION_SCORE)
}

fn min_value(board: &mut Board, player: Mark, opponent: Mark) -> i32 {
    if let Some(payoff) = terminal_payoff(evaluate(board, player), player) {
        return payoff;
    }

    generate_moves(board)
        .into_iter()
        .map(|cell| {
            board.set(cell, opponent);
            let score = max_value(board, player, opponent);
            board.clear(cell);
            score
        })
        .min()
        .unwrap_or(UNRESOLVED_POSITION_SCORE)
}
