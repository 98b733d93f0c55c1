//! Wumpus triangulation from the visited cells that sensed a stench.
//! This module exists to keep the geometric argument in one place.
//! It does not decide when triangulation is worth attempting beyond its own guard.

use super::*;

/// Triangulates the wumpus from exactly two diagonally adjacent stench cells.
///
/// Both cells neighbour the wumpus, so it sits on one of the two corners obtained by
/// swapping their x coordinates. A visited corner cannot hold the wumpus, which leaves the
/// other one. Any other configuration is a caller bug and is reported as such.
pub fn locate_wumpus(map: &CaveMap) -> Result<Pos, AgentError> {
    let stench = map.stench_cells();
    let failure = |reason| AgentError::WumpusLocalization { stench_cells: stench.len(), reason };

    let [a, b] = stench[..] else {
        return Err(failure(LocalizationFailure::WrongCellCount));
    };
    if a.x.abs_diff(b.x) != 1 || a.y.abs_diff(b.y) != 1 {
        return Err(failure(LocalizationFailure::NotDiagonal));
    }

    let first = Pos { x: b.x, y: a.y };
    let second = Pos { x: a.x, y: b.y };
    match (map.is_visited(first), map.is_visited(second)) {
        (true, false) => Ok(second),
        (false, true) => Ok(first),
        (true, true) => Err(failure(LocalizationFailure::BothCandidatesVisited)),
        (false, false) => Err(failure(LocalizationFailure::NoCandidateVisited)),
    }
}

/// Guarded entry used by the policy: returns the wumpus cell when the current stench
/// evidence pins it down, and `None` for every ambiguous configuration.
pub(super) fn infer_wumpus_cell(map: &CaveMap) -> Option<Pos> {
    let stench = map.stench_cells();
    let [a, b] = stench[..] else {
        tracing::trace!(stench_cells = stench.len(), "wumpus localization needs two stench cells");
        return None;
    };

    match (a.x.abs_diff(b.x), a.y.abs_diff(b.y)) {
        (1, 1) => match locate_wumpus(map) {
            Ok(pos) => Some(pos),
            Err(err) => {
                tracing::debug!(%err, "skipping wumpus localization");
                None
            }
        },
        (2, 0) | (0, 2) => {
            // Collinear cues share exactly one neighbour: the cell between them.
            let middle = Pos { x: (a.x + b.x) / 2, y: (a.y + b.y) / 2 };
            (!map.is_visited(middle)).then_some(middle)
        }
        _ => {
            tracing::debug!(?a, ?b, "stench cells share no neighbour; skipping localization");
            None
        }
    }
}
