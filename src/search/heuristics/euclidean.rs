//! Straight-line distance to the goal.
//!
//! With 4-directional moves that each cost at least 1, the Euclidean distance
//! never exceeds the Manhattan distance, which in turn never exceeds the true
//! remaining cost. The estimate is therefore admissible, and since it changes
//! by at most 1 per move it is also consistent.

use crate::search::{Heuristic, HeuristicValue, Position};

#[derive(Clone, Debug, Default)]
pub struct EuclideanHeuristic {}

impl EuclideanHeuristic {
    pub fn new() -> Self {
        EuclideanHeuristic {}
    }
}

impl Heuristic for EuclideanHeuristic {
    fn evaluate(&self, position: Position, goal: Position) -> HeuristicValue {
        let dr = goal.row as f64 - position.row as f64;
        let dc = goal.col as f64 - position.col as f64;
        (dr * dr + dc * dc).sqrt().into()
    }
}
