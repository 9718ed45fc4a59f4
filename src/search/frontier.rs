//! The open and closed sets of a search.

use crate::search::{HeuristicValue, SearchNode, StateSignature};
use priority_queue::PriorityQueue;
use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

/// Insertion ticket of a node in the frontier. Tickets increase
/// monotonically, which makes them the tie-breaker between nodes with equal
/// estimated total cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn id(&self) -> usize {
        self.0
    }
}

/// The open set. Nodes come out in order of estimated total cost, and nodes
/// with equal cost come out in the order they were pushed.
///
/// Nodes with the same [`StateSignature`] may be pushed any number of times;
/// filtering them is left to the caller, against a [`ClosedRegistry`].
#[derive(Debug, Default)]
pub struct Frontier {
    queue: PriorityQueue<NodeId, Reverse<(HeuristicValue, NodeId)>>,
    nodes: HashMap<NodeId, SearchNode>,
    next_id: usize,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: SearchNode) -> NodeId {
        let node_id = NodeId(self.next_id);
        self.next_id += 1;
        self.queue
            .push(node_id, Reverse((node.estimated_total_cost(), node_id)));
        self.nodes.insert(node_id, node);
        node_id
    }

    pub fn pop(&mut self) -> Option<SearchNode> {
        let (node_id, _) = self.queue.pop()?;
        self.nodes.remove(&node_id)
    }

    pub fn peek(&self) -> Option<&SearchNode> {
        self.queue
            .peek()
            .and_then(|(node_id, _)| self.nodes.get(node_id))
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Total number of nodes ever pushed.
    pub fn num_pushed(&self) -> usize {
        self.next_id
    }

    /// The nodes currently in the frontier, best first.
    pub fn ranked(&self) -> Vec<&SearchNode> {
        let mut entries: Vec<_> = self.queue.iter().collect();
        entries.sort_by_key(|&(_, &Reverse(key))| key);
        entries
            .into_iter()
            .filter_map(|(node_id, _)| self.nodes.get(node_id))
            .collect()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
        self.nodes.clear();
        self.next_id = 0;
    }
}

/// The closed set: signatures that have already been expanded.
#[derive(Debug, Default)]
pub struct ClosedRegistry {
    signatures: HashSet<StateSignature>,
}

impl ClosedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the signature closed. Returns `false` if it already was.
    pub fn close(&mut self, signature: StateSignature) -> bool {
        self.signatures.insert(signature)
    }

    pub fn is_closed(&self, signature: &StateSignature) -> bool {
        self.signatures.contains(signature)
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StateSignature> {
        self.signatures.iter()
    }

    pub fn clear(&mut self) {
        self.signatures.clear();
    }
}
