//! Per-cell knowledge the agent accumulates about the cave.
//! This module exists so every component reads the same fixed-size grid.
//! It does not own any inference; it only stores what was sensed or derived.

use crate::types::{Direction, Pos};

/// Width and height of the largest cave the agent can be dropped into.
pub const GRID_SIZE: usize = 7;

/// Knowledge about one cave cell.
///
/// `breeze` and `stench` are only meaningful once `visited` is set. `wumpus` may be set on
/// an unvisited cell once triangulation pins the wumpus down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    pub visited: bool,
    pub wall: bool,
    pub wumpus: bool,
    pub breeze: bool,
    pub stench: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CaveMap {
    // Row 0 is the top of the cave, so agent y is inverted when indexing.
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl CaveMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < GRID_SIZE && (pos.y as usize) < GRID_SIZE
    }

    pub fn cell(&self, pos: Pos) -> Option<&Cell> {
        let (row, col) = self.index(pos)?;
        Some(&self.cells[row][col])
    }

    pub fn cell_mut(&mut self, pos: Pos) -> Option<&mut Cell> {
        let (row, col) = self.index(pos)?;
        Some(&mut self.cells[row][col])
    }

    /// Overwrites a cell. Out-of-bounds writes are ignored.
    pub fn set_cell(&mut self, pos: Pos, cell: Cell) {
        if let Some(slot) = self.cell_mut(pos) {
            *slot = cell;
        }
    }

    pub fn is_visited(&self, pos: Pos) -> bool {
        self.cell(pos).is_some_and(|cell| cell.visited)
    }

    /// Records what the agent sensed while standing on `pos`.
    pub fn record_visit(&mut self, pos: Pos, breeze: bool, stench: bool) {
        if let Some(cell) = self.cell_mut(pos) {
            cell.visited = true;
            cell.breeze = breeze;
            cell.stench = stench;
        }
    }

    pub fn mark_wumpus(&mut self, pos: Pos) {
        if let Some(cell) = self.cell_mut(pos) {
            cell.wumpus = true;
        }
    }

    /// Marks the whole boundary line the agent just bumped into while standing on `from`
    /// and facing `facing`. The lower and left boundaries sit outside the grid already, so
    /// only upward and rightward bumps leave a trace.
    pub fn mark_boundary(&mut self, from: Pos, facing: Direction) {
        let line: Vec<Pos> = match facing {
            Direction::Up => (0..GRID_SIZE as i32).map(|x| Pos { x, y: from.y + 1 }).collect(),
            Direction::Right => (0..GRID_SIZE as i32).map(|y| Pos { x: from.x + 1, y }).collect(),
            Direction::Down | Direction::Left => return,
        };
        for pos in line {
            if let Some(cell) = self.cell_mut(pos) {
                cell.wall = true;
            }
        }
    }

    /// Visited cells that sensed a stench, scanned column by column from the origin.
    pub fn stench_cells(&self) -> Vec<Pos> {
        Self::positions()
            .filter(|pos| self.cell(*pos).is_some_and(|cell| cell.visited && cell.stench))
            .collect()
    }

    pub fn positions() -> impl Iterator<Item = Pos> {
        (0..GRID_SIZE as i32).flat_map(|x| (0..GRID_SIZE as i32).map(move |y| Pos { x, y }))
    }

    fn index(&self, pos: Pos) -> Option<(usize, usize)> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some((GRID_SIZE - 1 - pos.y as usize, pos.x as usize))
    }
}
