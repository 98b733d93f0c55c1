//! Drives one agent through one simulated cave until it escapes, dies or runs out of time.

use wumpus_core::{Agent, AgentError};

use crate::config::SimConfig;
use crate::transcript::Transcript;
use crate::world::{Cave, DeathCause, StepEvent, World};

#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Escaped { with_gold: bool },
    Died { cause: DeathCause },
    /// The action budget ran out before the agent climbed out.
    Stalled,
    /// The agent reported broken bookkeeping instead of choosing an action.
    AgentFault(AgentError),
}

impl Outcome {
    pub fn escaped(&self) -> bool {
        matches!(self, Outcome::Escaped { .. })
    }
}

#[derive(Clone, Debug)]
pub struct EpisodeReport {
    pub seed: u64,
    pub cave: Cave,
    pub outcome: Outcome,
    pub transcript: Transcript,
    pub final_snapshot_hash: u64,
}

impl EpisodeReport {
    pub fn actions(&self) -> usize {
        self.transcript.steps.len()
    }
}

pub fn run_episode(seed: u64, config: &SimConfig) -> EpisodeReport {
    let cave = Cave::generate(seed, config);
    let mut world = World::new(cave.clone());
    let mut agent = Agent::new();
    let mut transcript = Transcript::new(seed);

    let outcome = loop {
        if transcript.steps.len() >= config.max_actions {
            break Outcome::Stalled;
        }
        let percept = world.percept();
        let action = match agent.get_action(percept) {
            Ok(action) => action,
            Err(error) => break Outcome::AgentFault(error),
        };
        transcript.record(percept, action);
        match world.apply(action) {
            StepEvent::Continue => {}
            StepEvent::Died(cause) => break Outcome::Died { cause },
            StepEvent::Escaped { with_gold } => break Outcome::Escaped { with_gold },
        }
    };

    tracing::debug!(seed, ?outcome, actions = transcript.steps.len(), "episode finished");
    EpisodeReport { seed, cave, outcome, transcript, final_snapshot_hash: agent.snapshot_hash() }
}
