//! Contract violations raised by the decision core.
//!
//! Neither variant describes an expected runtime condition. Both mean the agent's map or
//! geometry bookkeeping has become inconsistent, so the decision call that hit them is
//! aborted instead of guessing a move.

use crate::types::Pos;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AgentError {
    /// A relational direction was requested between cells that do not share an edge.
    #[error("cells {from:?} and {to:?} are not adjacent")]
    NonAdjacent { from: Pos, to: Pos },

    /// Wumpus triangulation was invoked without its two-diagonal-stench precondition.
    #[error("cannot localize wumpus from {stench_cells} stench cell(s): {reason}")]
    WumpusLocalization { stench_cells: usize, reason: LocalizationFailure },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LocalizationFailure {
    #[error("exactly two stench cells are required")]
    WrongCellCount,
    #[error("stench cells are not diagonal neighbours")]
    NotDiagonal,
    #[error("both diagonal candidates are already visited")]
    BothCandidatesVisited,
    #[error("neither diagonal candidate has been visited")]
    NoCandidateVisited,
}
