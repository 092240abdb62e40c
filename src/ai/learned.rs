use log::{debug, info};
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::ai::agent::Agent;
use crate::ai::state_encoding::{encode_board, Features};
use crate::error::AgentError;
use crate::game::{Board, Player, PITS_PER_PLAYER};

/// Learned-agent hyperparameters.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LearnerConfig {
    /// Probability of ignoring the model and playing a random legal move.
    pub epsilon: f64,
    pub win_reward: f32,
    pub lose_reward: f32,
    pub tie_reward: f32,
    /// Record moves and feed rewards back to the model after each game.
    pub trainable: bool,
}

impl Default for LearnerConfig {
    fn default() -> Self {
        LearnerConfig {
            epsilon: 0.25,
            win_reward: 10.0,
            lose_reward: -10.0,
            tie_reward: 0.0,
            trainable: true,
        }
    }
}

/// One decision recorded during a game.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayMove {
    pub features: Features,
    /// 0-based pit index within the mover's own side.
    pub action: usize,
}

/// An external action-value model. The agent only needs predictions; how the
/// model stores or updates its parameters is up to the implementation.
pub trait ActionValueModel {
    /// Estimated value of playing each of the six own pits.
    fn predict(&self, features: &Features) -> [f32; PITS_PER_PLAYER];

    /// Feed back the reward for every move of a finished game.
    fn learn(&mut self, _replay: &[ReplayMove], _reward: f32) {}
}

/// Epsilon-greedy agent backed by an [`ActionValueModel`].
pub struct LearnedAgent<M, R: Rng = StdRng> {
    player: Player,
    model: M,
    config: LearnerConfig,
    replay: Vec<ReplayMove>,
    rng: R,
}

impl<M: ActionValueModel> LearnedAgent<M, StdRng> {
    pub fn new(player: Player, model: M, config: LearnerConfig) -> Self {
        Self::with_rng(player, model, config, StdRng::from_os_rng())
    }

    pub fn seeded(player: Player, model: M, config: LearnerConfig, seed: u64) -> Self {
        Self::with_rng(player, model, config, StdRng::seed_from_u64(seed))
    }
}

impl<M: ActionValueModel, R: Rng> LearnedAgent<M, R> {
    pub fn with_rng(player: Player, model: M, config: LearnerConfig, rng: R) -> Self {
        LearnedAgent {
            player,
            model,
            config,
            replay: Vec::new(),
            rng,
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Moves recorded so far in the current game.
    pub fn replay(&self) -> &[ReplayMove] {
        &self.replay
    }

    pub fn epsilon(&self) -> f64 {
        self.config.epsilon
    }

    pub fn set_epsilon(&mut self, epsilon: f64) {
        self.config.epsilon = epsilon;
    }

    /// Reward for the finished game from this agent's point of view.
    fn reward_for(&self, board: &Board) -> f32 {
        let leader = board.leader();
        if leader == self.player {
            self.config.win_reward
        } else if leader == Player::Nobody {
            self.config.tie_reward
        } else {
            self.config.lose_reward
        }
    }
}

impl<M: ActionValueModel, R: Rng> Agent for LearnedAgent<M, R> {
    fn player(&self) -> Player {
        self.player
    }

    fn name(&self) -> &str {
        "Learned"
    }

    fn choose_move(&mut self, board: &Board) -> Result<usize, AgentError> {
        let legal = board.valid_moves(self.player);
        if legal.is_empty() {
            return Err(AgentError::NoLegalMove {
                player: self.player,
            });
        }

        let features = encode_board(board, self.player)?;
        let location = if self.rng.random_range(0.0..1.0) < self.config.epsilon {
            debug!("{} exploring with a random move", self.player);
            legal[self.rng.random_range(0..legal.len())]
        } else {
            // Pick legal pit with highest value; first one wins ties
            let values = self.model.predict(&features);
            let mut best = legal[0];
            let mut best_value = f32::NEG_INFINITY;
            for &location in &legal {
                if values[location - 1] > best_value {
                    best_value = values[location - 1];
                    best = location;
                }
            }
            best
        };

        if self.config.trainable {
            self.replay.push(ReplayMove {
                features,
                action: location - 1,
            });
        }
        debug!("{} chose move {location}", self.player);
        Ok(location)
    }

    fn on_after_game(&mut self, board: &Board) {
        if !self.config.trainable || self.replay.is_empty() {
            return;
        }
        let reward = self.reward_for(board);
        info!(
            "{} learning from {} moves with reward {reward}",
            self.player,
            self.replay.len()
        );
        self.model.learn(&self.replay, reward);
        self.replay.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed per-pit values; remembers every learn call.
    #[derive(Default)]
    struct TableModel {
        values: [f32; PITS_PER_PLAYER],
        learned: Vec<(usize, f32)>,
    }

    impl ActionValueModel for TableModel {
        fn predict(&self, _features: &Features) -> [f32; PITS_PER_PLAYER] {
            self.values
        }

        fn learn(&mut self, replay: &[ReplayMove], reward: f32) {
            self.learned.push((replay.len(), reward));
        }
    }

    fn greedy() -> LearnerConfig {
        LearnerConfig {
            epsilon: 0.0,
            ..LearnerConfig::default()
        }
    }

    #[test]
    fn test_greedy_picks_best_legal_pit() {
        let model = TableModel {
            values: [0.1, 9.0, 0.3, 0.7, 0.2, 0.5],
            ..Default::default()
        };
        let mut agent = LearnedAgent::seeded(Player::One, model, greedy(), 3);
        // Pit 2 has the best value but is empty.
        let board = Board::with_state(0, 0, &[1, 0, 1, 1, 1, 1, 4, 4, 4, 4, 4, 4]).unwrap();

        assert_eq!(agent.choose_move(&board).unwrap(), 4);
        assert_eq!(agent.replay().len(), 1);
        assert_eq!(agent.replay()[0].action, 3);
    }

    #[test]
    fn test_greedy_ties_go_to_lowest_pit() {
        let mut agent =
            LearnedAgent::seeded(Player::Two, TableModel::default(), greedy(), 3);
        let board = Board::new();
        assert_eq!(agent.choose_move(&board).unwrap(), 1);
    }

    #[test]
    fn test_full_exploration_stays_legal() {
        let config = LearnerConfig {
            epsilon: 1.0,
            ..LearnerConfig::default()
        };
        let mut agent = LearnedAgent::seeded(Player::Two, TableModel::default(), config, 11);
        let board = Board::with_state(0, 0, &[4, 4, 4, 4, 4, 4, 0, 2, 0, 0, 3, 0]).unwrap();
        for _ in 0..50 {
            let location = agent.choose_move(&board).unwrap();
            assert!(location == 2 || location == 5);
        }
    }

    #[test]
    fn test_no_legal_move() {
        let mut agent =
            LearnedAgent::seeded(Player::One, TableModel::default(), greedy(), 3);
        let board = Board::with_state(0, 0, &[0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0]).unwrap();
        assert!(matches!(
            agent.choose_move(&board),
            Err(AgentError::NoLegalMove { .. })
        ));
        assert!(agent.replay().is_empty());
    }

    #[test]
    fn test_after_game_feeds_reward_and_clears_replay() {
        let mut agent =
            LearnedAgent::seeded(Player::One, TableModel::default(), greedy(), 3);
        let board = Board::new();
        agent.choose_move(&board).unwrap();
        agent.choose_move(&board).unwrap();

        let won = Board::with_state(10, 2, &[0; 12]).unwrap();
        agent.on_after_game(&won);
        assert_eq!(agent.model().learned, vec![(2, 10.0)]);
        assert!(agent.replay().is_empty());

        agent.choose_move(&board).unwrap();
        let lost = Board::with_state(1, 2, &[0; 12]).unwrap();
        agent.on_after_game(&lost);

        agent.choose_move(&board).unwrap();
        let tied = Board::with_state(3, 3, &[0; 12]).unwrap();
        agent.on_after_game(&tied);

        assert_eq!(
            agent.model().learned,
            vec![(2, 10.0), (1, -10.0), (1, 0.0)]
        );
    }

    #[test]
    fn test_untrainable_agent_does_not_learn() {
        let config = LearnerConfig {
            trainable: false,
            ..greedy()
        };
        let mut agent = LearnedAgent::seeded(Player::One, TableModel::default(), config, 3);
        agent.choose_move(&Board::new()).unwrap();
        assert!(agent.replay().is_empty());

        agent.on_after_game(&Board::with_state(5, 0, &[0; 12]).unwrap());
        assert!(agent.model().learned.is_empty());
    }
}
