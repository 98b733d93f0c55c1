//! Episode transcripts and deterministic replay.
//!
//! A transcript is a single JSON document holding the generator seed and every
//! percept/action pair the agent saw and answered, in order. Replaying feeds the recorded
//! percepts to a fresh agent and checks that it answers with the recorded actions.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use wumpus_core::{Action, Agent, AgentError, Percept};

pub const FORMAT_VERSION: u16 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub percept: Percept,
    pub action: Action,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    pub format_version: u16,
    pub seed: u64,
    pub steps: Vec<Step>,
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptError {
    #[error("I/O error: {0}")]
    Io(io::Error),
    #[error("malformed transcript: {0}")]
    Json(serde_json::Error),
    #[error(
        "unsupported transcript format version {0} (expected {expected})",
        expected = FORMAT_VERSION
    )]
    UnsupportedVersion(u16),
}

impl Transcript {
    pub fn new(seed: u64) -> Self {
        Self { format_version: FORMAT_VERSION, seed, steps: Vec::new() }
    }

    pub fn record(&mut self, percept: Percept, action: Action) {
        self.steps.push(Step { percept, action });
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)
    }

    pub fn load(path: &Path) -> Result<Self, TranscriptError> {
        let content = fs::read_to_string(path).map_err(TranscriptError::Io)?;
        let transcript: Transcript =
            serde_json::from_str(&content).map_err(TranscriptError::Json)?;
        if transcript.format_version != FORMAT_VERSION {
            return Err(TranscriptError::UnsupportedVersion(transcript.format_version));
        }
        Ok(transcript)
    }
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ReplayError {
    /// The agent answered a recorded percept with a different action.
    #[error("step {step}: recorded {recorded:?} but replay chose {replayed:?}")]
    Diverged { step: usize, recorded: Action, replayed: Action },
    /// The agent failed a decision it made successfully when the transcript was recorded.
    #[error("step {step}: {error}")]
    Agent { step: usize, error: AgentError },
}

#[derive(Debug, PartialEq)]
pub struct ReplayResult {
    pub steps: usize,
    pub final_snapshot_hash: u64,
}

pub fn replay(transcript: &Transcript) -> Result<ReplayResult, ReplayError> {
    let mut agent = Agent::new();
    for (step, recorded) in transcript.steps.iter().enumerate() {
        let replayed =
            agent.get_action(recorded.percept).map_err(|error| ReplayError::Agent { step, error })?;
        if replayed != recorded.action {
            return Err(ReplayError::Diverged { step, recorded: recorded.action, replayed });
        }
    }
    Ok(ReplayResult { steps: transcript.steps.len(), final_snapshot_hash: agent.snapshot_hash() })
}
