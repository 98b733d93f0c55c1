//! Stable snapshot hashing for deterministic verification.
//! This module exists to keep hashing concerns separate from decision code.

use std::hash::{Hash, Hasher};

use super::*;
use xxhash_rust::xxh3::Xxh3;

impl Agent {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        let position = self.tracker.position();
        hasher.write_i32(position.x);
        hasher.write_i32(position.y);
        hasher.write_u8(self.tracker.facing() as u8);
        hasher.write_u8(match self.state {
            AgentState::Exploring => 0,
            AgentState::Hunting => 1,
            AgentState::Returning => 2,
        });
        hasher.write_u8(u8::from(self.has_gold));
        hasher.write_u8(u8::from(self.has_arrow));
        hasher.write_u8(u8::from(self.wumpus_alive));
        for slot in [self.tracker.pending_step, self.wumpus_cell] {
            match slot {
                None => hasher.write_u8(0),
                Some(cell) => {
                    hasher.write_u8(1);
                    hasher.write_i32(cell.x);
                    hasher.write_i32(cell.y);
                }
            }
        }
        hasher.write_usize(self.queue.len());
        for action in &self.queue {
            action.hash(&mut hasher);
        }
        self.map.hash(&mut hasher);
        hasher.finish()
    }
}
