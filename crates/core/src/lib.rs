//! Decision core for an agent exploring a 7x7 wumpus cave: it maps percepts, infers safe
//! cells, triangulates the wumpus and plans the cheapest way back to the entrance.

pub mod agent;
pub mod error;
pub mod map;
pub mod types;

pub use agent::{
    Agent, DEAD_END_COST, Tracker, is_inferred_safe, is_valid_return_cell, locate_wumpus,
    relational_direction, shortest_direction,
};
pub use error::{AgentError, LocalizationFailure};
pub use map::{CaveMap, Cell, GRID_SIZE};
pub use types::*;
