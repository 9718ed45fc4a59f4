use crate::search::{Heuristic, HeuristicValue, Position};

#[derive(Clone, Debug, Default)]
pub struct ZeroHeuristic {}

impl ZeroHeuristic {
    pub fn new() -> Self {
        ZeroHeuristic {}
    }
}

impl Heuristic for ZeroHeuristic {
    fn evaluate(&self, _position: Position, _goal: Position) -> HeuristicValue {
        (0.).into()
    }
}
