//! Everything around the decision core that an actual run needs: a seeded cave to walk,
//! an episode loop, settings and transcripts.

pub mod config;
pub mod episode;
pub mod transcript;
pub mod world;

pub use config::{ConfigError, SimConfig};
pub use episode::{EpisodeReport, Outcome, run_episode};
pub use transcript::{ReplayError, ReplayResult, Step, Transcript, TranscriptError, replay};
pub use world::{Cave, DeathCause, StepEvent, World};
