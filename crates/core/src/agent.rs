use std::collections::VecDeque;

use crate::error::{AgentError, LocalizationFailure};
use crate::map::{CaveMap, GRID_SIZE};
use crate::types::*;

mod hash;
mod localize;
mod policy;
mod return_path;
mod safety;
mod tracker;

#[cfg(test)]
mod test_support;

pub use localize::locate_wumpus;
pub use return_path::{DEAD_END_COST, is_valid_return_cell, shortest_direction};
pub use safety::is_inferred_safe;
pub use tracker::{Tracker, relational_direction};

/// One episode's worth of agent knowledge and intent.
///
/// The agent owns its map, its pose bookkeeping and its queue of planned actions. The
/// game loop hands it one percept per step through [`Agent::get_action`] and executes the
/// single action it returns.
#[derive(Clone, Debug)]
pub struct Agent {
    map: CaveMap,
    tracker: Tracker,
    state: AgentState,
    queue: VecDeque<Action>,
    has_gold: bool,
    has_arrow: bool,
    wumpus_alive: bool,
    wumpus_cell: Option<Pos>,
}

impl Default for Agent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent {
    pub fn new() -> Self {
        Self {
            map: CaveMap::new(),
            tracker: Tracker::new(),
            state: AgentState::Exploring,
            queue: VecDeque::new(),
            has_gold: false,
            has_arrow: true,
            wumpus_alive: true,
            wumpus_cell: None,
        }
    }

    pub fn position(&self) -> Pos {
        self.tracker.position()
    }

    pub fn facing(&self) -> Direction {
        self.tracker.facing()
    }

    pub fn state(&self) -> AgentState {
        self.state
    }

    pub fn map(&self) -> &CaveMap {
        &self.map
    }

    pub fn has_gold(&self) -> bool {
        self.has_gold
    }

    pub fn has_arrow(&self) -> bool {
        self.has_arrow
    }

    pub fn wumpus_alive(&self) -> bool {
        self.wumpus_alive
    }

    /// Cell the wumpus was triangulated to, if the evidence has pinned it down.
    pub fn wumpus_cell(&self) -> Option<Pos> {
        self.wumpus_cell
    }

    /// Actions already planned but not yet handed out.
    pub fn queued_actions(&self) -> impl Iterator<Item = Action> + '_ {
        self.queue.iter().copied()
    }
}
