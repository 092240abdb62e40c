use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{SinkError, StatsError};
use crate::game::{GameOutcome, Player};

/// Statistics configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Games folded into one batch. Zero is treated as one.
    pub batch_size: usize,
    /// Log progress every N games; zero disables it.
    pub announce_every: usize,
}

impl Default for StatsConfig {
    fn default() -> Self {
        StatsConfig {
            batch_size: 1,
            announce_every: 0,
        }
    }
}

impl StatsConfig {
    pub fn effective_batch_size(&self) -> usize {
        self.batch_size.max(1)
    }
}

/// Averages over one window of games for one player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GameBatch {
    pub wins: f64,
    pub ties: f64,
    pub losses: f64,
    pub score: f64,
}

impl GameBatch {
    fn win(score: i32) -> Self {
        GameBatch {
            wins: 1.0,
            score: score as f64,
            ..Default::default()
        }
    }

    fn tie(score: i32) -> Self {
        GameBatch {
            ties: 1.0,
            score: score as f64,
            ..Default::default()
        }
    }

    fn loss(score: i32) -> Self {
        GameBatch {
            losses: 1.0,
            score: score as f64,
            ..Default::default()
        }
    }

    fn average(window: &[GameBatch]) -> Self {
        let n = window.len() as f64;
        let sum = window.iter().fold(GameBatch::default(), |acc, g| GameBatch {
            wins: acc.wins + g.wins,
            ties: acc.ties + g.ties,
            losses: acc.losses + g.losses,
            score: acc.score + g.score,
        });
        GameBatch {
            wins: sum.wins / n,
            ties: sum.ties / n,
            losses: sum.losses / n,
            score: sum.score / n,
        }
    }
}

/// Emitted batches for both players, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchHistory {
    batches: [Vec<GameBatch>; 2],
}

impl BatchHistory {
    /// Batches for a real player; empty for `Nobody`.
    pub fn for_player(&self, player: Player) -> &[GameBatch] {
        match player.seat() {
            Some(seat) => &self.batches[seat],
            None => &[],
        }
    }

    /// Number of batches emitted per player.
    pub fn len(&self) -> usize {
        self.batches[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rows of (player one, player two) batches.
    pub fn rows(&self) -> impl Iterator<Item = (&GameBatch, &GameBatch)> {
        self.batches[0].iter().zip(self.batches[1].iter())
    }
}

/// Receives the batch history when results are flushed.
pub trait StatsSink {
    fn output(&mut self, history: &BatchHistory) -> Result<(), SinkError>;
}

impl<F> StatsSink for F
where
    F: FnMut(&BatchHistory) -> Result<(), SinkError>,
{
    fn output(&mut self, history: &BatchHistory) -> Result<(), SinkError> {
        self(history)
    }
}

/// Writes each batch row to the log.
#[derive(Debug, Default)]
pub struct LogSink;

impl StatsSink for LogSink {
    fn output(&mut self, history: &BatchHistory) -> Result<(), SinkError> {
        info!("{} batches recorded", history.len());
        for (i, (one, two)) in history.rows().enumerate() {
            info!(
                "batch {:>4} | P1 w/t/l {:.3}/{:.3}/{:.3} score {:.2} | P2 w/t/l {:.3}/{:.3}/{:.3} score {:.2}",
                i + 1,
                one.wins,
                one.ties,
                one.losses,
                one.score,
                two.wins,
                two.ties,
                two.losses,
                two.score,
            );
        }
        Ok(())
    }
}

/// Folds game results into fixed-size per-player windows.
///
/// Every recorded game adds one entry to both players' windows, so the two
/// windows always fill and flush together.
pub struct StatsAggregator {
    batch_size: usize,
    announce_every: usize,
    total_games: u64,
    pending: [Vec<GameBatch>; 2],
    history: BatchHistory,
    sinks: Vec<Box<dyn StatsSink>>,
}

impl StatsAggregator {
    pub fn new(config: &StatsConfig) -> Self {
        let batch_size = config.effective_batch_size();
        StatsAggregator {
            batch_size,
            announce_every: config.announce_every,
            total_games: 0,
            pending: [Vec::with_capacity(batch_size), Vec::with_capacity(batch_size)],
            history: BatchHistory::default(),
            sinks: Vec::new(),
        }
    }

    pub fn with_sink(mut self, sink: impl StatsSink + 'static) -> Self {
        self.add_sink(Box::new(sink));
        self
    }

    pub fn add_sink(&mut self, sink: Box<dyn StatsSink>) {
        self.sinks.push(sink);
    }

    /// Record a tie where both players ended on `score`.
    pub fn record_tie(&mut self, score: i32) {
        self.record(GameBatch::tie(score), GameBatch::tie(score));
    }

    /// Record a decisive game. Falls back to a tie if either side is `Nobody`
    /// or the scores are equal.
    pub fn record_result(
        &mut self,
        winner: Player,
        winning_score: i32,
        loser: Player,
        losing_score: i32,
    ) {
        let (Some(winner_seat), Some(loser_seat)) = (winner.seat(), loser.seat()) else {
            return self.record_tie(winning_score);
        };
        if winning_score == losing_score || winner_seat == loser_seat {
            return self.record_tie(winning_score);
        }

        let mut entries = [GameBatch::default(); 2];
        entries[winner_seat] = GameBatch::win(winning_score);
        entries[loser_seat] = GameBatch::loss(losing_score);
        self.record(entries[0], entries[1]);
    }

    /// Record a finished game.
    pub fn record_outcome(&mut self, outcome: &GameOutcome) {
        match outcome.winner {
            Player::One => self.record_result(Player::One, outcome.scores[0], Player::Two, outcome.scores[1]),
            Player::Two => self.record_result(Player::Two, outcome.scores[1], Player::One, outcome.scores[0]),
            Player::Nobody => self.record_tie(outcome.scores[0]),
        }
    }

    /// Push the full history to every sink. Safe to call repeatedly.
    pub fn output_results(&mut self) -> Result<(), StatsError> {
        for (sink_index, sink) in self.sinks.iter_mut().enumerate() {
            sink.output(&self.history)
                .map_err(|source| StatsError::Sink { sink_index, source })?;
        }
        Ok(())
    }

    pub fn history(&self) -> &BatchHistory {
        &self.history
    }

    pub fn total_games(&self) -> u64 {
        self.total_games
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    fn record(&mut self, one: GameBatch, two: GameBatch) {
        self.total_games += 1;
        self.pending[0].push(one);
        self.pending[1].push(two);

        for seat in 0..2 {
            if self.pending[seat].len() == self.batch_size {
                let averaged = GameBatch::average(&self.pending[seat]);
                self.history.batches[seat].push(averaged);
                self.pending[seat].clear();
            }
        }

        if self.announce_every > 0 && self.total_games % self.announce_every as u64 == 0 {
            info!("Processed {} games", self.total_games);
        }
    }
}
