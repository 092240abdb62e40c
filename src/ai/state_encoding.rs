use crate::error::BoardError;
use crate::game::{Board, Player, PITS, PITS_PER_PLAYER};

/// Player-relative feature vector handed to learned models.
pub type Features = [f32; PITS];

/// Encode a board as a flat [12] f32 array from `player`'s perspective.
///
/// Index 0..6: the player's own pits, clockwise from their first pit
/// Index 6..12: the opponent's pits, continuing clockwise
pub fn encode_board(board: &Board, player: Player) -> Result<Features, BoardError> {
    let view = board.perspective(player)?;
    let mut data = [0.0f32; PITS];
    for (slot, &pebbles) in data.iter_mut().zip(view.iter()) {
        *slot = pebbles as f32;
    }
    Ok(data)
}

/// Mask of the player's own pits that hold pebbles (1.0 where legal).
pub fn legal_mask(board: &Board, player: Player) -> [f32; PITS_PER_PLAYER] {
    let mut mask = [0.0f32; PITS_PER_PLAYER];
    for location in board.valid_moves(player) {
        mask[location - 1] = 1.0;
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_initial_board() {
        let board = Board::new();
        let data = encode_board(&board, Player::One).unwrap();
        assert!(data.iter().all(|&v| v == 4.0));
    }

    #[test]
    fn test_encode_is_player_relative() {
        let board = Board::with_state(0, 0, &[1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 5]).unwrap();

        let one = encode_board(&board, Player::One).unwrap();
        assert_eq!(one[0], 1.0);
        assert_eq!(one[11], 5.0);

        // Player two's last pit is their sixth own pit; player one's first pit
        // follows it clockwise.
        let two = encode_board(&board, Player::Two).unwrap();
        assert_eq!(two[5], 5.0);
        assert_eq!(two[6], 1.0);
    }

    #[test]
    fn test_encode_rejects_nobody() {
        assert!(encode_board(&Board::new(), Player::Nobody).is_err());
    }

    #[test]
    fn test_legal_mask() {
        let board = Board::with_state(0, 0, &[0, 2, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0]).unwrap();
        assert_eq!(legal_mask(&board, Player::One), [0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
        assert_eq!(legal_mask(&board, Player::Two), [0.0; 6]);
    }
}
