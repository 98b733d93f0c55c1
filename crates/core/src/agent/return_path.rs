//! Cheapest-route search from the agent back to the cave entrance.
//! This module exists so the exit route is a pure function of the map and the agent pose.
//! It does not queue actions or change agent state.

use super::*;

/// Cost charged for a cell with no admissible onward move.
pub const DEAD_END_COST: u32 = 100_000;

/// Set of grid cells packed into one word, indexed `x * GRID_SIZE + y`. Copied on every
/// recursion step, so each branch sees exactly its own prefix.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct CellSet(u64);

impl CellSet {
    const FULL: u64 = (1 << (GRID_SIZE * GRID_SIZE)) - 1;
    /// Cells with `y == 0`; shifting up must never wrap into them.
    const BOTTOM_ROW: u64 = {
        let mut mask = 0;
        let mut x = 0;
        while x < GRID_SIZE {
            mask |= 1 << (x * GRID_SIZE);
            x += 1;
        }
        mask
    };
    const TOP_ROW: u64 = Self::BOTTOM_ROW << (GRID_SIZE - 1);

    fn bit(pos: Pos) -> u64 {
        1 << (pos.x as usize * GRID_SIZE + pos.y as usize)
    }

    fn with(self, pos: Pos) -> Self {
        Self(self.0 | Self::bit(pos))
    }

    fn contains(self, pos: Pos) -> bool {
        self.0 & Self::bit(pos) != 0
    }

    /// Every cell sharing an edge with a member.
    fn neighbours(self) -> Self {
        let cells = self.0;
        let up = (cells << 1) & !Self::BOTTOM_ROW;
        let down = (cells >> 1) & !Self::TOP_ROW;
        let sideways = (cells << GRID_SIZE) | (cells >> GRID_SIZE);
        Self((up | down | sideways) & Self::FULL)
    }
}

/// Whether the route home may pass through `pos`: visited cells and cells proven safe.
pub fn is_valid_return_cell(map: &CaveMap, pos: Pos, wumpus_alive: bool) -> bool {
    match map.cell(pos) {
        Some(cell) if cell.wall => false,
        Some(cell) => cell.visited || is_inferred_safe(map, pos, wumpus_alive),
        None => false,
    }
}

/// First move of the cheapest simple route from `from` to the origin.
///
/// A move costs one forward step plus the turns needed to face it. Ties between first
/// moves go to the earliest in `Direction::ALL` order. Returns `None` when `from` lies off
/// the grid or no neighbour is admissible at all.
pub fn shortest_direction(
    map: &CaveMap,
    from: Pos,
    facing: Direction,
    wumpus_alive: bool,
) -> Option<Direction> {
    if !map.in_bounds(from) {
        return None;
    }
    let search = ReturnSearch::new(map, wumpus_alive);
    let path = CellSet::default().with(from);
    let mut best: Option<(u32, Direction)> = None;

    for direction in search.valid_moves(from, CellSet::default()) {
        let next = from.step(direction);
        let step = facing.turn_cost(direction) + 1;
        let bound = best.map_or(u32::MAX, |(cost, _)| cost);
        if step.saturating_add(search.lower_bound(path, next)) >= bound {
            continue;
        }
        let cost = step.saturating_add(search.cheapest(path, next, direction, bound - step));
        if cost < bound {
            best = Some((cost, direction));
        }
    }

    tracing::trace!(?from, ?facing, ?best, "return route evaluated");
    best.map(|(_, direction)| direction)
}

struct ReturnSearch {
    /// Cells a route may use, evaluated once per search.
    open: CellSet,
}

impl ReturnSearch {
    fn new(map: &CaveMap, wumpus_alive: bool) -> Self {
        let open = CaveMap::positions()
            .filter(|pos| is_valid_return_cell(map, *pos, wumpus_alive))
            .fold(CellSet::default(), CellSet::with);
        Self { open }
    }

    fn valid_moves(&self, tile: Pos, path: CellSet) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(move |direction| {
            let next = tile.step(*direction);
            let in_grid = (0..GRID_SIZE as i32).contains(&next.x)
                && (0..GRID_SIZE as i32).contains(&next.y);
            in_grid && self.open.contains(next) && !path.contains(next)
        })
    }

    /// Least possible cost from `tile` home without reusing `path`: the breadth-first step
    /// count through open cells, or the dead-end charge when the origin is cut off. Every
    /// move costs at least one and every route that never arrives ends in a dead end.
    fn lower_bound(&self, path: CellSet, tile: Pos) -> u32 {
        let home = CellSet::bit(Pos::ORIGIN);
        let allowed = self.open.0 & !path.0;
        let mut reached = CellSet::bit(tile);
        let mut frontier = reached;
        let mut steps = 0;
        while frontier & home == 0 {
            frontier = CellSet(frontier).neighbours().0 & allowed & !reached;
            if frontier == 0 {
                return DEAD_END_COST;
            }
            reached |= frontier;
            steps += 1;
        }
        steps
    }

    /// Cheapest cost from `tile` to the origin avoiding `path`. Exact whenever the answer is
    /// below `budget`; otherwise some value at or above `budget`. A branch is skipped only
    /// when its lower bound already reaches the best cost found.
    fn cheapest(&self, path: CellSet, tile: Pos, facing: Direction, budget: u32) -> u32 {
        if tile == Pos::ORIGIN {
            return 0;
        }
        let path = path.with(tile);
        let mut moves = self.valid_moves(tile, path).peekable();
        if moves.peek().is_none() {
            return DEAD_END_COST;
        }

        let mut best = budget;
        for direction in moves {
            let next = tile.step(direction);
            let step = facing.turn_cost(direction) + 1;
            if step.saturating_add(self.lower_bound(path, next)) >= best {
                continue;
            }
            let cost = step.saturating_add(self.cheapest(path, next, direction, best - step));
            best = best.min(cost);
        }
        best
    }
}
