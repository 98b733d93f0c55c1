//! Orientation and position bookkeeping for the agent.
//! This module exists so only movement outcomes ever change where the agent thinks it is.
//! It does not decide which action to take.

use super::*;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tracker {
    pub(super) position: Pos,
    pub(super) facing: Direction,
    // Cell the agent stood on before its last forward step, until the outcome is known.
    pub(super) pending_step: Option<Pos>,
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new()
    }
}

impl Tracker {
    pub fn new() -> Self {
        Self { position: Pos::ORIGIN, facing: Direction::Right, pending_step: None }
    }

    pub fn position(&self) -> Pos {
        self.position
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    /// Books an emitted action. Forward steps are applied tentatively and confirmed or
    /// rolled back by the next percept.
    pub fn apply_action(&mut self, action: Action) {
        self.pending_step = None;
        match action {
            Action::Forward => {
                self.pending_step = Some(self.position);
                self.position = self.position.step(self.facing);
            }
            Action::TurnLeft => self.apply_rotation_outcome(true),
            Action::TurnRight => self.apply_rotation_outcome(false),
            Action::Grab | Action::Shoot | Action::Climb => {}
        }
    }

    /// Resolves the previous forward step. A failed step puts the agent back where it was
    /// and records the boundary it collided with. Nothing happens unless the previous
    /// action was a forward step.
    pub fn apply_movement_outcome(&mut self, success: bool, map: &mut CaveMap) {
        let Some(from) = self.pending_step.take() else {
            return;
        };
        if !success {
            self.position = from;
            map.mark_boundary(from, self.facing);
        }
    }

    pub fn apply_rotation_outcome(&mut self, turn_left: bool) {
        self.facing =
            if turn_left { self.facing.turned_left() } else { self.facing.turned_right() };
    }

    /// Direction from the agent's cell toward an edge-sharing `target`.
    pub fn direction_to(&self, target: Pos) -> Result<Direction, AgentError> {
        relational_direction(self.position, target)
    }
}

pub fn relational_direction(from: Pos, to: Pos) -> Result<Direction, AgentError> {
    match (to.x - from.x, to.y - from.y) {
        (0, 1) => Ok(Direction::Up),
        (0, -1) => Ok(Direction::Down),
        (-1, 0) => Ok(Direction::Left),
        (1, 0) => Ok(Direction::Right),
        _ => Err(AgentError::NonAdjacent { from, to }),
    }
}
