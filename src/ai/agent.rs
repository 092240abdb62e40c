use crate::error::AgentError;
use crate::game::{Board, Player};

/// Universal interface for anything that picks moves for one seat.
///
/// An agent is bound to a single [`Player`] for its whole life. The lifecycle
/// hooks default to no-ops so simple policies only implement
/// [`choose_move`](Agent::choose_move).
pub trait Agent {
    /// The seat this agent plays for.
    fn player(&self) -> Player;

    /// Return the agent's display name.
    fn name(&self) -> &str;

    /// Pick a 1-based pit location from `board.valid_moves(self.player())`.
    ///
    /// Returns [`AgentError::NoLegalMove`] when the agent's side is empty. The
    /// caller is expected to check [`is_over`](Agent::is_over) first.
    fn choose_move(&mut self, board: &Board) -> Result<usize, AgentError>;

    /// Whether the game is over from this agent's side.
    fn is_over(&self, board: &Board) -> bool {
        board.is_over(self.player())
    }

    /// Play a whole turn, following bonus turns until the turn passes or the
    /// game ends. Returns true if the game is over afterwards.
    fn execute_move(&mut self, board: &mut Board) -> Result<bool, AgentError> {
        while !self.is_over(board) {
            let location = self.choose_move(board)?;
            let again = board.execute_move(self.player(), location)?;
            self.on_after_move(board);
            if !again {
                break;
            }
        }
        Ok(self.is_over(board))
    }

    /// Called once before the first game of a session.
    fn on_before_session(&mut self) {}

    /// Called once after the last game of a session.
    fn on_after_session(&mut self) {}

    /// Called after each move this agent made.
    fn on_after_move(&mut self, _board: &Board) {}

    /// Called after every game with the final board.
    fn on_after_game(&mut self, _board: &Board) {}
}
