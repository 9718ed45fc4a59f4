mod frontier;
mod grid;
pub mod heuristics;
pub mod search_engines;
mod search_node;
mod validate;
mod verbosity;

pub use frontier::{ClosedRegistry, Frontier, NodeId};
pub use grid::{CellKind, Direction, Grid, GridError, Position};
pub use heuristics::{EuclideanHeuristic, Heuristic, HeuristicName, HeuristicValue, ZeroHeuristic};
pub use search_node::{SearchNode, StateSignature};
pub use validate::{validate_path, validate_solution, PathViolation};
pub use verbosity::Verbosity;
