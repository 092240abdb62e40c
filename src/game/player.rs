use std::fmt;

use serde::{Deserialize, Serialize};

/// A seat at the board. `Nobody` is a sentinel for "no player" or a tie and is
/// never a legitimate mover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    One,
    Two,
    Nobody,
}

impl Player {
    /// Both real players, in seat order.
    pub const SEATS: [Player; 2] = [Player::One, Player::Two];

    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
            Player::Nobody => Player::Nobody,
        }
    }

    /// Index into per-player arrays, `None` for `Nobody`.
    pub fn seat(self) -> Option<usize> {
        match self {
            Player::One => Some(0),
            Player::Two => Some(1),
            Player::Nobody => None,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::One => "Player1",
            Player::Two => "Player2",
            Player::Nobody => "Nobody",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
