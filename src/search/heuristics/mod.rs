mod euclidean;
mod heuristic;
mod zero_heuristic;

pub use euclidean::EuclideanHeuristic;
pub use heuristic::{Heuristic, HeuristicName, HeuristicValue};
pub use zero_heuristic::ZeroHeuristic;
