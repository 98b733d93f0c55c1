//! Tests for the percept-to-action control loop.

use super::super::test_support::*;
use super::*;

mod wumpus_handling;

fn quiet() -> Percept {
    Percept::default()
}

#[test]
fn first_quiet_step_walks_forward_into_the_cave() {
    let mut agent = Agent::new();
    assert_eq!(agent.get_action(quiet()), Ok(Action::Forward));
    assert_eq!(agent.get_action(quiet()), Ok(Action::Forward));
    assert_eq!(agent.position(), Pos::new(2, 0));
    assert!(agent.map().is_visited(Pos::ORIGIN));
    assert!(agent.map().is_visited(Pos::new(1, 0)));
    assert!(!agent.map().is_visited(Pos::new(2, 0)), "visited only once the percept arrives");
}

#[test]
fn queued_actions_are_handed_out_one_per_call() {
    let mut agent = agent_at(quiet_map(&[(0, 0), (1, 0)]), Pos::new(1, 0), Direction::Right);
    agent.state = AgentState::Returning;
    agent.has_gold = true;

    assert_eq!(agent.get_action(quiet()), Ok(Action::TurnLeft));
    assert_eq!(agent.queued_actions().collect::<Vec<_>>(), vec![Action::TurnLeft, Action::Forward]);
    assert_eq!(agent.get_action(quiet()), Ok(Action::TurnLeft));
    assert_eq!(agent.facing(), Direction::Left);
    assert_eq!(agent.get_action(quiet()), Ok(Action::Forward));
    assert_eq!(agent.position(), Pos::ORIGIN);
    assert_eq!(agent.get_action(quiet()), Ok(Action::Climb));
}

#[test]
fn returning_at_origin_climbs_without_a_route() {
    // The origin has no admissible neighbour, so only the origin shortcut can answer.
    let mut agent = Agent::new();
    agent.state = AgentState::Returning;
    agent.has_gold = true;
    assert_eq!(agent.get_action(quiet()), Ok(Action::Climb));
}

#[test]
fn unreachable_home_holds_position() {
    let mut agent = agent_at(quiet_map(&[(4, 4)]), Pos::new(4, 4), Direction::Up);
    agent.state = AgentState::Returning;
    agent.has_gold = true;
    assert_eq!(agent.get_action(quiet()), Ok(Action::TurnLeft));
    assert_eq!(agent.position(), Pos::new(4, 4));
}

#[test]
fn reserved_hunting_state_plans_as_returning() {
    let mut agent = Agent::new();
    agent.state = AgentState::Hunting;
    agent.has_gold = true;
    assert_eq!(agent.get_action(quiet()), Ok(Action::Climb));
    assert_eq!(agent.state(), AgentState::Returning);
}
