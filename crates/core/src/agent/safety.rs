//! Two-sided elimination over opposite neighbours of an unvisited cell.

use super::*;

/// Whether an unvisited cell can be proven free of pits and of a live wumpus.
///
/// A cue on a visited cell means its source sits in one of that cell's neighbours. When
/// both opposite neighbours of `pos` (above/below or left/right) were visited and they do
/// not share a cue, `pos` cannot be the common source, so it is safe.
pub fn is_inferred_safe(map: &CaveMap, pos: Pos, wumpus_alive: bool) -> bool {
    if map.cell(pos).is_none_or(|cell| cell.visited) {
        return false;
    }
    [(Direction::Up, Direction::Down), (Direction::Left, Direction::Right)]
        .into_iter()
        .any(|(a, b)| pair_clears(map, pos.step(a), pos.step(b), wumpus_alive))
}

fn pair_clears(map: &CaveMap, a: Pos, b: Pos, wumpus_alive: bool) -> bool {
    let (Some(a), Some(b)) = (map.cell(a), map.cell(b)) else {
        return false;
    };
    a.visited
        && b.visited
        && !(a.breeze && b.breeze)
        && (!wumpus_alive || !(a.stench && b.stench))
}
