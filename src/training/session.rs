use log::{debug, info};
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::ai::Agent;
use crate::error::SessionError;
use crate::game::{Board, GameOutcome, Player};
use crate::training::stats::StatsAggregator;

/// Session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Games played by [`Session::run`].
    pub games: u64,
    /// Fixed first mover; chosen by coin flip each game when unset.
    pub first_mover: Option<Player>,
    /// Restore the default board before every game.
    pub reset_board: bool,
    /// Seed for the first-mover coin.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            games: 1000,
            first_mover: None,
            reset_board: true,
            seed: None,
        }
    }
}

/// Totals for a completed session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub games: u64,
    pub wins: [u64; 2],
    pub ties: u64,
    pub forfeits: u64,
}

impl SessionSummary {
    fn record(&mut self, outcome: &GameOutcome) {
        self.games += 1;
        match outcome.winner.seat() {
            Some(seat) => self.wins[seat] += 1,
            None => self.ties += 1,
        }
        if outcome.is_forfeit() {
            self.forfeits += 1;
        }
    }

    pub fn wins_for(&self, player: Player) -> u64 {
        player.seat().map_or(self.ties, |seat| self.wins[seat])
    }
}

/// Runs games between two agents sharing one board.
///
/// Games and the moves inside them run strictly in order on the calling
/// thread. A session owns its board and agents; running games in parallel
/// needs one session per game.
pub struct Session {
    agents: [Box<dyn Agent>; 2],
    board: Board,
    stats: Option<StatsAggregator>,
    config: SessionConfig,
    rng: StdRng,
}

impl Session {
    /// Seat `player_one` and `player_two`. Each agent must be bound to the
    /// seat it is given.
    pub fn new(
        player_one: Box<dyn Agent>,
        player_two: Box<dyn Agent>,
        config: SessionConfig,
    ) -> Result<Self, SessionError> {
        for (agent, seat) in [(&player_one, Player::One), (&player_two, Player::Two)] {
            if agent.player() != seat {
                return Err(SessionError::SeatMismatch {
                    agent: agent.name().to_string(),
                    bound: agent.player(),
                    seat,
                });
            }
        }
        if let Some(first) = config.first_mover {
            if first.seat().is_none() {
                return Err(SessionError::InvalidFirstMover(first));
            }
        }

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Session {
            agents: [player_one, player_two],
            board: Board::new(),
            stats: None,
            config,
            rng,
        })
    }

    pub fn with_stats(mut self, stats: StatsAggregator) -> Self {
        self.stats = Some(stats);
        self
    }

    /// Start from a custom board instead of the default seeding.
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn stats(&self) -> Option<&StatsAggregator> {
        self.stats.as_ref()
    }

    pub fn agent(&self, player: Player) -> Option<&dyn Agent> {
        player.seat().map(|seat| self.agents[seat].as_ref())
    }

    /// Take the agents and statistics back out of the session.
    pub fn into_parts(self) -> ([Box<dyn Agent>; 2], Option<StatsAggregator>) {
        (self.agents, self.stats)
    }

    /// Run the configured number of games with session hooks around them,
    /// then flush statistics.
    pub fn run(&mut self) -> Result<SessionSummary, SessionError> {
        for agent in self.agents.iter_mut() {
            agent.on_before_session();
        }

        let mut summary = SessionSummary::default();
        let total = self.config.games;
        for game in 1..=total {
            info!("Playing game {game} of {total}");
            if self.config.reset_board {
                self.board.reset();
            }
            let outcome = self.play_game(self.config.first_mover)?;
            summary.record(&outcome);
        }

        for agent in self.agents.iter_mut() {
            agent.on_after_session();
        }
        if let Some(stats) = self.stats.as_mut() {
            stats.output_results()?;
        }

        info!(
            "Session complete: {} games, {} wins / {} wins / {} ties",
            summary.games, summary.wins[0], summary.wins[1], summary.ties
        );
        Ok(summary)
    }

    /// Play one game to completion on the current board.
    pub fn play_game(&mut self, first_mover: Option<Player>) -> Result<GameOutcome, SessionError> {
        info!(
            "Playing game between {} ({}) and {} ({})",
            Player::One,
            self.agents[0].name(),
            Player::Two,
            self.agents[1].name()
        );

        let mut current = match first_mover {
            Some(player) if player.seat().is_some() => {
                info!("{player} selected to go first");
                player
            }
            Some(player) => return Err(SessionError::InvalidFirstMover(player)),
            None => {
                let player = if self.rng.random_bool(0.5) {
                    Player::One
                } else {
                    Player::Two
                };
                info!("{player} randomly selected to go first");
                player
            }
        };

        while !self.board.is_over(current) {
            let agent = &mut self.agents[seat_of(current)];
            let location = agent.choose_move(&self.board)?;
            debug!("{current} chooses move {location}");
            let again = self.board.execute_move(current, location)?;
            agent.on_after_move(&self.board);
            if !again {
                current = current.other();
            }
        }

        let outcome = GameOutcome::from_board(&self.board);
        info!(
            "Game is over. Winner is {} ({} to {})",
            outcome.winner, outcome.scores[0], outcome.scores[1]
        );
        debug!("Final board: {}", self.board);

        for agent in self.agents.iter_mut() {
            agent.on_after_game(&self.board);
        }
        if let Some(stats) = self.stats.as_mut() {
            stats.record_outcome(&outcome);
        }
        Ok(outcome)
    }
}

fn seat_of(player: Player) -> usize {
    match player {
        Player::Two => 1,
        _ => 0,
    }
}
