use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::agent::Agent;
use crate::error::AgentError;
use crate::game::{Board, Player};

/// An agent that selects uniformly at random from legal moves.
///
/// The generator is injected so tests and reproducible runs can pin choices.
pub struct RandomAgent<R: Rng = StdRng> {
    player: Player,
    rng: R,
}

impl RandomAgent<StdRng> {
    pub fn new(player: Player) -> Self {
        Self::with_rng(player, StdRng::from_os_rng())
    }

    pub fn seeded(player: Player, seed: u64) -> Self {
        Self::with_rng(player, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomAgent<R> {
    pub fn with_rng(player: Player, rng: R) -> Self {
        RandomAgent { player, rng }
    }
}

impl<R: Rng> Agent for RandomAgent<R> {
    fn player(&self) -> Player {
        self.player
    }

    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(&mut self, board: &Board) -> Result<usize, AgentError> {
        let moves = board.valid_moves(self.player);
        if moves.is_empty() {
            return Err(AgentError::NoLegalMove {
                player: self.player,
            });
        }
        let idx = self.rng.random_range(0..moves.len());
        Ok(moves[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_agent_selects_legal_move() {
        let mut agent = RandomAgent::seeded(Player::Two, 7);
        let board = Board::with_state(0, 0, &[1, 1, 1, 1, 1, 1, 0, 3, 0, 2, 0, 0]).unwrap();
        let legal = board.valid_moves(Player::Two);

        for _ in 0..100 {
            let location = agent.choose_move(&board).unwrap();
            assert!(legal.contains(&location), "Location {} is not legal", location);
        }
    }

    #[test]
    fn test_random_agent_is_reproducible_with_seed() {
        let board = Board::new();
        let mut a = RandomAgent::seeded(Player::One, 42);
        let mut b = RandomAgent::seeded(Player::One, 42);
        for _ in 0..20 {
            assert_eq!(a.choose_move(&board).unwrap(), b.choose_move(&board).unwrap());
        }
    }

    #[test]
    fn test_random_agent_without_moves_fails() {
        let mut agent = RandomAgent::new(Player::One);
        let board = Board::with_state(0, 0, &[0, 0, 0, 0, 0, 0, 4, 4, 4, 4, 4, 4]).unwrap();
        assert!(matches!(
            agent.choose_move(&board),
            Err(AgentError::NoLegalMove { player: Player::One })
        ));
    }

    #[test]
    fn test_random_agents_play_full_game() {
        let mut one = RandomAgent::seeded(Player::One, 1);
        let mut two = RandomAgent::seeded(Player::Two, 2);
        let mut board = Board::new();

        let mut turns = 0;
        loop {
            let agent: &mut dyn Agent = if turns % 2 == 0 { &mut one } else { &mut two };
            if agent.is_over(&board) || agent.execute_move(&mut board).unwrap() {
                break;
            }
            turns += 1;
        }

        assert!(!board.is_forced_end());
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new(Player::One);
        assert_eq!(agent.name(), "Random");
    }
}
