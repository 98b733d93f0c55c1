//! Shared fixtures for the `agent` submodule test suites.
//! This module exists to avoid repeating map and cave setup across many tests.
//! It does not own production decision logic.

use proptest::prelude::*;

use super::*;

/// Builds a map from `(x, y, breeze, stench)` visit records.
pub(super) fn map_with_visits(visits: &[(i32, i32, bool, bool)]) -> CaveMap {
    let mut map = CaveMap::new();
    for &(x, y, breeze, stench) in visits {
        map.record_visit(Pos::new(x, y), breeze, stench);
    }
    map
}

/// Builds a map where every listed cell was visited without any cue.
pub(super) fn quiet_map(cells: &[(i32, i32)]) -> CaveMap {
    let mut map = CaveMap::new();
    for &(x, y) in cells {
        map.record_visit(Pos::new(x, y), false, false);
    }
    map
}

/// Agent placed mid-episode with a prepared map.
pub(super) fn agent_at(map: CaveMap, position: Pos, facing: Direction) -> Agent {
    let mut agent = Agent::new();
    agent.map = map;
    agent.tracker = Tracker { position, facing, ..Tracker::new() };
    agent
}

/// Ground truth for a randomly generated 7x7 cave.
#[derive(Clone, Debug)]
pub(super) struct HiddenCave {
    pub pits: Vec<Pos>,
    pub wumpus: Option<Pos>,
}

impl HiddenCave {
    pub fn is_deadly(&self, pos: Pos) -> bool {
        self.pits.contains(&pos) || self.wumpus == Some(pos)
    }

    pub fn breeze_at(&self, pos: Pos) -> bool {
        Direction::ALL.iter().any(|d| self.pits.contains(&pos.step(*d)))
    }

    pub fn stench_at(&self, pos: Pos) -> bool {
        self.wumpus
            .is_some_and(|w| w == pos || Direction::ALL.iter().any(|d| pos.step(*d) == w))
    }
}

fn grid_pos_strategy() -> impl Strategy<Value = Pos> {
    (0..GRID_SIZE as i32, 0..GRID_SIZE as i32).prop_map(|(x, y)| Pos { x, y })
}

pub(super) fn cave_strategy() -> impl Strategy<Value = HiddenCave> {
    (prop::collection::vec(grid_pos_strategy(), 0..8), prop::option::of(grid_pos_strategy()))
        .prop_map(|(pits, wumpus)| {
            let pits = pits.into_iter().filter(|p| *p != Pos::ORIGIN).collect();
            let wumpus = wumpus.filter(|w| *w != Pos::ORIGIN);
            HiddenCave { pits, wumpus }
        })
}

pub(super) fn visit_mask_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Marks every cell selected by `mask` as visited with truthful cues, skipping cells the
/// agent could not have survived.
pub(super) fn sensed_map(cave: &HiddenCave, mask: u64) -> CaveMap {
    let mut map = CaveMap::new();
    for (index, pos) in CaveMap::positions().enumerate() {
        if mask & (1 << index) == 0 || cave.is_deadly(pos) {
            continue;
        }
        map.record_visit(pos, cave.breeze_at(pos), cave.stench_at(pos));
    }
    map
}
