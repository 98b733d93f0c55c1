use serde::{Deserialize, Serialize};

/// Agent-relative cave coordinate. The origin is the entrance corner; `x` grows to the
/// right and `y` grows upward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const ORIGIN: Pos = Pos { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(self, direction: Direction) -> Pos {
        match direction {
            Direction::Up => Pos { x: self.x, y: self.y + 1 },
            Direction::Down => Pos { x: self.x, y: self.y - 1 },
            Direction::Left => Pos { x: self.x - 1, y: self.y },
            Direction::Right => Pos { x: self.x + 1, y: self.y },
        }
    }

    pub fn manhattan(self, other: Pos) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Enumeration order used wherever the search walks neighbours.
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub const fn turned_left(self) -> Direction {
        match self {
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
            Direction::Right => Direction::Up,
        }
    }

    pub const fn turned_right(self) -> Direction {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    /// Rotations that turn an agent facing `self` toward `target`.
    pub fn turns_toward(self, target: Direction) -> &'static [Action] {
        if target == self {
            &[]
        } else if target == self.turned_left() {
            &[Action::TurnLeft]
        } else if target == self.turned_right() {
            &[Action::TurnRight]
        } else {
            &[Action::TurnLeft, Action::TurnLeft]
        }
    }

    pub fn turn_cost(self, target: Direction) -> u32 {
        self.turns_toward(target).len() as u32
    }
}

/// The fixed action vocabulary the agent emits, one per decision call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Forward,
    TurnLeft,
    TurnRight,
    Grab,
    Shoot,
    Climb,
}

/// Everything the agent senses at the start of a step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Percept {
    /// A wumpus occupies this cell or a neighbour.
    pub stench: bool,
    /// A pit occupies a neighbour.
    pub breeze: bool,
    pub glitter: bool,
    /// The previous forward step hit the cave boundary.
    pub bump: bool,
    /// The arrow killed the wumpus.
    pub scream: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AgentState {
    Exploring,
    /// Reserved. The policy never enters this state.
    Hunting,
    Returning,
}
