//! Seeded cave simulator that plays the environment side of an episode.
//! This module exists to keep ground truth (pits, wumpus, gold) out of the agent crate.
//! It does not decide anything for the agent; it only answers actions with percepts.

use std::mem;

use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use serde::{Deserialize, Serialize};
use wumpus_core::{Action, Direction, Percept, Pos};

use crate::config::SimConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    Pit,
    Wumpus,
}

/// Result of executing one action against the cave.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepEvent {
    Continue,
    Died(DeathCause),
    Escaped { with_gold: bool },
}

/// Hidden layout of one generated cave.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cave {
    pub width: i32,
    pub height: i32,
    pub pits: Vec<Pos>,
    pub wumpus: Option<Pos>,
    pub gold: Option<Pos>,
}

impl Cave {
    /// Draws a cave from `seed`. The entrance never holds a hazard or the gold.
    pub fn generate(seed: u64, config: &SimConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let (lo, hi) = config.size_bounds();
        let width = roll_between(&mut rng, lo, hi);
        let height = roll_between(&mut rng, lo, hi);

        let interior: Vec<Pos> = (0..width)
            .flat_map(|x| (0..height).map(move |y| Pos::new(x, y)))
            .filter(|pos| *pos != Pos::ORIGIN)
            .collect();
        let chance = config.pit_chance();
        let pits: Vec<Pos> =
            interior.iter().copied().filter(|_| roll_unit(&mut rng) < chance).collect();
        let wumpus = choose(&mut rng, &interior);
        let treasure_spots: Vec<Pos> = interior
            .iter()
            .copied()
            .filter(|pos| !pits.contains(pos) && Some(*pos) != wumpus)
            .collect();
        let gold = choose(&mut rng, &treasure_spots);

        tracing::trace!(seed, width, height, pits = pits.len(), ?wumpus, ?gold, "cave generated");
        Self { width, height, pits, wumpus, gold }
    }

    pub fn contains(&self, pos: Pos) -> bool {
        (0..self.width).contains(&pos.x) && (0..self.height).contains(&pos.y)
    }
}

fn adjacent(a: Pos, b: Pos) -> bool {
    a.manhattan(b) == 1
}

fn roll_between(rng: &mut ChaCha8Rng, lo: i32, hi: i32) -> i32 {
    let span = (hi - lo + 1) as u64;
    lo + (rng.next_u64() % span) as i32
}

fn roll_unit(rng: &mut ChaCha8Rng) -> f64 {
    (rng.next_u64() >> 11) as f64 / (1u64 << 53) as f64
}

fn choose(rng: &mut ChaCha8Rng, slice: &[Pos]) -> Option<Pos> {
    if slice.is_empty() {
        return None;
    }
    let p = rng.next_u64() as usize % slice.len();
    Some(slice[p])
}

/// A cave plus the true state of the explorer walking through it.
#[derive(Clone, Debug)]
pub struct World {
    cave: Cave,
    position: Pos,
    facing: Direction,
    has_arrow: bool,
    gold_taken: bool,
    wumpus_alive: bool,
    bumped: bool,
    screamed: bool,
}

impl World {
    pub fn new(cave: Cave) -> Self {
        Self {
            cave,
            position: Pos::ORIGIN,
            facing: Direction::Right,
            has_arrow: true,
            gold_taken: false,
            wumpus_alive: true,
            bumped: false,
            screamed: false,
        }
    }

    pub fn position(&self) -> Pos {
        self.position
    }

    pub fn gold_taken(&self) -> bool {
        self.gold_taken
    }

    pub fn wumpus_alive(&self) -> bool {
        self.wumpus_alive
    }

    /// What the explorer senses right now. Bump and scream are reported once.
    pub fn percept(&mut self) -> Percept {
        let here = self.position;
        let stench = self.cave.wumpus.is_some_and(|w| w == here || adjacent(here, w));
        let breeze = self.cave.pits.iter().any(|pit| adjacent(here, *pit));
        let glitter = !self.gold_taken && self.cave.gold == Some(here);
        let percept = Percept { stench, breeze, glitter, bump: self.bumped, scream: self.screamed };
        self.bumped = false;
        self.screamed = false;
        percept
    }

    pub fn apply(&mut self, action: Action) -> StepEvent {
        match action {
            Action::Forward => {
                let next = self.position.step(self.facing);
                if !self.cave.contains(next) {
                    self.bumped = true;
                    return StepEvent::Continue;
                }
                self.position = next;
                if self.cave.pits.contains(&next) {
                    return StepEvent::Died(DeathCause::Pit);
                }
                if self.wumpus_alive && self.cave.wumpus == Some(next) {
                    return StepEvent::Died(DeathCause::Wumpus);
                }
            }
            Action::TurnLeft => self.facing = self.facing.turned_left(),
            Action::TurnRight => self.facing = self.facing.turned_right(),
            Action::Grab => {
                if self.cave.gold == Some(self.position) {
                    self.gold_taken = true;
                }
            }
            Action::Shoot => {
                if mem::take(&mut self.has_arrow) && self.arrow_hits() {
                    tracing::debug!(at = ?self.cave.wumpus, "arrow killed the wumpus");
                    self.wumpus_alive = false;
                    self.screamed = true;
                }
            }
            Action::Climb => {
                if self.position == Pos::ORIGIN {
                    return StepEvent::Escaped { with_gold: self.gold_taken };
                }
            }
        }
        StepEvent::Continue
    }

    fn arrow_hits(&self) -> bool {
        let Some(wumpus) = self.cave.wumpus.filter(|_| self.wumpus_alive) else {
            return false;
        };
        let mut flight = self.position.step(self.facing);
        while self.cave.contains(flight) {
            if flight == wumpus {
                return true;
            }
            flight = flight.step(self.facing);
        }
        false
    }
}
