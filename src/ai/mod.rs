mod agent;
mod learned;
mod random;
pub mod state_encoding;

pub use agent::Agent;
pub use learned::{ActionValueModel, LearnedAgent, LearnerConfig, ReplayMove};
pub use random::RandomAgent;

#[cfg(test)]
pub(crate) use agent::tests::ScriptedAgent;
