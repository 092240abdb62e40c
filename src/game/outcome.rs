use serde::{Deserialize, Serialize};

use super::{Board, Player};

/// Result of a completed game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// `Nobody` when the scores are tied.
    pub winner: Player,
    pub scores: [i32; 2],
}

impl GameOutcome {
    /// Read the outcome off a finished board.
    pub fn from_board(board: &Board) -> Self {
        // Both seats are real players, so neither lookup can fail.
        let score = |p: Player| board.points(p).unwrap_or_default();
        GameOutcome {
            winner: board.leader(),
            scores: [score(Player::One), score(Player::Two)],
        }
    }

    pub fn is_tie(&self) -> bool {
        self.winner == Player::Nobody
    }

    /// Final score for a real player, `None` for `Nobody`.
    pub fn score_of(&self, player: Player) -> Option<i32> {
        player.seat().map(|seat| self.scores[seat])
    }

    /// True if either player forfeited by choosing an empty pit.
    pub fn is_forfeit(&self) -> bool {
        self.scores.contains(&super::board::FORFEIT_SCORE)
    }
}
