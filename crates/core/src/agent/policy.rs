//! Percept-to-action control loop: map upkeep, retreat triggers and move planning.
//! This module exists to keep the state machine in one readable sequence.
//! It does not own geometry, inference or route search; it calls into those modules.

use super::*;

impl Agent {
    /// Consumes one percept and returns the single action to execute next.
    ///
    /// Several actions may be planned at once (turns followed by a step); they are queued
    /// and handed out one per call. An error means the agent's own bookkeeping is
    /// inconsistent and aborts this call only.
    pub fn get_action(&mut self, percept: Percept) -> Result<Action, AgentError> {
        self.tracker.apply_movement_outcome(!percept.bump, &mut self.map);
        let here = self.tracker.position();
        self.map.record_visit(here, percept.breeze, percept.stench);

        if percept.scream {
            self.wumpus_alive = false;
            self.transition(AgentState::Exploring, "wumpus killed");
        }
        self.localize_wumpus();

        if percept.glitter && self.state != AgentState::Returning {
            self.queue.clear();
            self.has_gold = true;
            self.transition(AgentState::Returning, "gold grabbed");
            return Ok(self.emit(Action::Grab));
        }

        if percept.breeze && self.state != AgentState::Returning {
            self.queue.clear();
            self.transition(AgentState::Returning, "breeze");
        } else if percept.stench && self.wumpus_alive && self.state != AgentState::Returning {
            if self.has_arrow {
                self.has_arrow = false;
                return Ok(self.emit(Action::Shoot));
            }
            self.transition(AgentState::Returning, "stench without arrow");
        }

        if self.state == AgentState::Returning
            && !self.has_gold
            && !percept.breeze
            && (!percept.stench || !self.wumpus_alive)
            && !self.frontier_directions().is_empty()
        {
            self.transition(AgentState::Exploring, "danger cleared");
        }

        if self.queue.is_empty() {
            self.plan()?;
        }
        let action = self.queue.pop_front().expect("planning always queues an action");
        Ok(self.emit(action))
    }

    /// Adjacent cells worth exploring, as directions in right, up, left, down order.
    fn frontier_directions(&self) -> Vec<Direction> {
        let here = self.tracker.position();
        [Direction::Right, Direction::Up, Direction::Left, Direction::Down]
            .into_iter()
            .filter(|direction| self.is_explorable(here.step(*direction)))
            .collect()
    }

    fn is_explorable(&self, pos: Pos) -> bool {
        self.map.cell(pos).is_some_and(|cell| {
            !cell.visited && !cell.wall && !(cell.wumpus && self.wumpus_alive)
        })
    }

    fn plan(&mut self) -> Result<(), AgentError> {
        loop {
            match self.state {
                AgentState::Exploring => {
                    let options = self.frontier_directions();
                    let facing = self.tracker.facing();
                    let Some(&first) = options.first() else {
                        self.transition(AgentState::Returning, "frontier exhausted");
                        continue;
                    };
                    let direction = if options.contains(&facing) { facing } else { first };
                    let target = self.tracker.position().step(direction);
                    return self.enqueue_move_to(target);
                }
                // Reserved: no transition enters this state. Plan as if returning.
                AgentState::Hunting => self.transition(AgentState::Returning, "hunting reserved"),
                AgentState::Returning => {
                    let here = self.tracker.position();
                    if here == Pos::ORIGIN {
                        self.queue.push_back(Action::Climb);
                        return Ok(());
                    }
                    let route = shortest_direction(
                        &self.map,
                        here,
                        self.tracker.facing(),
                        self.wumpus_alive,
                    );
                    match route {
                        Some(direction) => self.enqueue_move(direction),
                        None => {
                            tracing::warn!(?here, "no admissible route home; holding position");
                            self.queue.push_back(Action::TurnLeft);
                        }
                    }
                    return Ok(());
                }
            }
        }
    }

    fn enqueue_move_to(&mut self, target: Pos) -> Result<(), AgentError> {
        let direction = self.tracker.direction_to(target)?;
        self.enqueue_move(direction);
        Ok(())
    }

    fn enqueue_move(&mut self, direction: Direction) {
        self.queue.extend(self.tracker.facing().turns_toward(direction));
        self.queue.push_back(Action::Forward);
    }

    fn emit(&mut self, action: Action) -> Action {
        self.tracker.apply_action(action);
        tracing::trace!(?action, position = ?self.tracker.position(), "action emitted");
        action
    }

    fn transition(&mut self, next: AgentState, trigger: &'static str) {
        if self.state != next {
            tracing::debug!(from = ?self.state, to = ?next, trigger, "agent state changed");
            self.state = next;
        }
    }

    fn localize_wumpus(&mut self) {
        if !self.wumpus_alive || self.wumpus_cell.is_some() {
            return;
        }
        if let Some(pos) = localize::infer_wumpus_cell(&self.map) {
            tracing::debug!(?pos, "wumpus localized");
            self.map.mark_wumpus(pos);
            self.wumpus_cell = Some(pos);
        }
    }
}

#[cfg(test)]
mod tests;
