use super::*;

fn stench() -> Percept {
    Percept { stench: true, ..Percept::default() }
}

#[test]
fn first_stench_spends_the_arrow() {
    let mut agent = Agent::new();
    assert_eq!(agent.get_action(stench()), Ok(Action::Shoot));
    assert!(!agent.has_arrow());
    assert_eq!(agent.state(), AgentState::Exploring);
}

#[test]
fn missed_shot_retreats() {
    let mut agent = Agent::new();
    assert_eq!(agent.get_action(stench()), Ok(Action::Shoot));
    assert_eq!(agent.get_action(stench()), Ok(Action::Climb));
    assert_eq!(agent.state(), AgentState::Returning);
}

#[test]
fn scream_clears_the_stench_threat() {
    let mut agent = Agent::new();
    assert_eq!(agent.get_action(stench()), Ok(Action::Shoot));
    let scream = Percept { stench: true, scream: true, ..Percept::default() };
    assert_eq!(agent.get_action(scream), Ok(Action::Forward));
    assert!(!agent.wumpus_alive());
    assert_eq!(agent.state(), AgentState::Exploring);

    // Stench no longer matters once the wumpus is dead.
    assert_eq!(agent.get_action(stench()), Ok(Action::Forward));
}

#[test]
fn diagonal_stench_pair_localizes_the_wumpus() {
    let map = map_with_visits(&[(0, 0, false, false), (2, 1, false, true), (2, 2, false, false)]);
    let mut agent = agent_at(map, Pos::new(1, 2), Direction::Left);

    assert_eq!(agent.get_action(stench()), Ok(Action::Shoot));
    assert_eq!(agent.wumpus_cell(), Some(Pos::new(1, 1)));
    assert!(agent.map().cell(Pos::new(1, 1)).is_some_and(|c| c.wumpus && !c.visited));
    assert!(agent.map().cell(Pos::new(2, 2)).is_some_and(|c| !c.wumpus));
}

#[test]
fn ambiguous_stench_pair_is_left_alone() {
    let map = map_with_visits(&[(0, 0, false, false), (2, 1, false, true)]);
    let mut agent = agent_at(map, Pos::new(1, 2), Direction::Left);

    assert_eq!(agent.get_action(stench()), Ok(Action::Shoot));
    assert_eq!(agent.wumpus_cell(), None);
}

#[test]
fn marked_wumpus_blocks_exploration_only_while_alive() {
    let mut map = quiet_map(&[(0, 0), (1, 0)]);
    map.mark_wumpus(Pos::new(2, 0));
    let mut agent = agent_at(map, Pos::new(1, 0), Direction::Right);
    assert_eq!(agent.frontier_directions(), vec![Direction::Up]);

    agent.wumpus_alive = false;
    assert_eq!(agent.frontier_directions(), vec![Direction::Right, Direction::Up]);
}

#[test]
fn dead_wumpus_is_not_relocalized() {
    let map = map_with_visits(&[(0, 0, false, false), (2, 1, false, true), (2, 2, false, false)]);
    let mut agent = agent_at(map, Pos::new(1, 2), Direction::Left);
    agent.wumpus_alive = false;
    agent.get_action(stench()).expect("decision");
    assert_eq!(agent.wumpus_cell(), None);
}

#[test]
fn stench_while_returning_keeps_the_arrow() {
    let mut agent = agent_at(quiet_map(&[(0, 0)]), Pos::new(1, 0), Direction::Left);
    agent.state = AgentState::Returning;

    assert_eq!(agent.get_action(stench()), Ok(Action::Forward));
    assert!(agent.has_arrow());
    assert_eq!(agent.state(), AgentState::Returning);
}
