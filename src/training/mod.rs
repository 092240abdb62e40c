//! Running games: the session orchestrator that alternates two agents over a
//! shared board, and the statistics aggregator that windows outcomes into
//! per-player batch averages.

pub mod session;
pub mod stats;

pub use session::{Session, SessionConfig, SessionSummary};
pub use stats::{BatchHistory, GameBatch, LogSink, StatsAggregator, StatsConfig, StatsSink};
