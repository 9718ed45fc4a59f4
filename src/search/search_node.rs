use crate::search::{CellKind, HeuristicValue, Position};

/// The part of a node that identifies a reachable configuration. Two nodes
/// with the same signature are interchangeable for the rest of the search, so
/// only the first one popped from the frontier is expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateSignature {
    pub position: Position,
    pub has_power_up: bool,
    pub used_power_up: bool,
}

/// A [`SearchNode`] is one candidate path through the grid together with its
/// accounting. Nodes are never modified after creation; expanding a node
/// creates new child nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    /// Sum of the move costs along the path.
    distance_traveled: u32,
    /// Whether a power-up has been collected anywhere along the path. Stays
    /// set after the power-up is spent.
    has_power_up: bool,
    /// Whether the power-up has already carried the path across a barrier.
    used_power_up: bool,
    /// Distance traveled plus the heuristic estimate, the frontier ranking
    /// key.
    estimated_total_cost: HeuristicValue,
    /// Every cell from the start to this node, both inclusive.
    path: Vec<Position>,
}

impl SearchNode {
    /// Create the node for the start cell.
    pub fn new_root(start: Position, h: HeuristicValue) -> Self {
        Self {
            distance_traveled: 0,
            has_power_up: false,
            used_power_up: false,
            estimated_total_cost: h,
            path: vec![start],
        }
    }

    /// Whether a path ending in this node may step onto a cell of the given
    /// kind.
    pub fn can_enter(&self, kind: CellKind) -> bool {
        match kind {
            CellKind::Barrier => self.has_power_up && !self.used_power_up,
            _ => true,
        }
    }

    /// Extend the path by one move onto `position`, which holds a cell of
    /// kind `kind`. Returns `None` when the move is blocked by a barrier.
    pub fn successor(
        &self,
        position: Position,
        kind: CellKind,
        h: HeuristicValue,
    ) -> Option<SearchNode> {
        if !self.can_enter(kind) {
            return None;
        }
        let distance_traveled = self.distance_traveled + kind.move_cost();
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(position);
        Some(SearchNode {
            distance_traveled,
            has_power_up: self.has_power_up || kind.is_power_up(),
            used_power_up: self.used_power_up || kind.is_barrier(),
            estimated_total_cost: h + distance_traveled as f64,
            path,
        })
    }

    pub fn signature(&self) -> StateSignature {
        StateSignature {
            position: self.position(),
            has_power_up: self.has_power_up,
            used_power_up: self.used_power_up,
        }
    }

    pub fn position(&self) -> Position {
        // The path is never empty, it always holds at least the start.
        self.path[self.path.len() - 1]
    }

    pub fn row(&self) -> usize {
        self.position().row
    }

    pub fn col(&self) -> usize {
        self.position().col
    }

    pub fn distance_traveled(&self) -> u32 {
        self.distance_traveled
    }

    pub fn has_power_up(&self) -> bool {
        self.has_power_up
    }

    pub fn used_power_up(&self) -> bool {
        self.used_power_up
    }

    pub fn estimated_total_cost(&self) -> HeuristicValue {
        self.estimated_total_cost
    }

    pub fn path(&self) -> &[Position] {
        &self.path
    }

    pub fn into_path(self) -> Vec<Position> {
        self.path
    }
}
