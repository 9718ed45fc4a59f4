use crate::search::heuristics::{EuclideanHeuristic, ZeroHeuristic};
use crate::search::{CellKind, Grid, GridError, Position};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

pub type HeuristicValue = OrderedFloat<f64>;

pub trait Heuristic: Debug {
    /// Estimate the remaining cost from `position` to `goal`.
    fn evaluate(&self, position: Position, goal: Position) -> HeuristicValue;

    /// Estimate the remaining cost from `position` to the goal cell of
    /// `grid`. Fails if the grid has no goal cell.
    fn evaluate_in(&self, grid: &Grid, position: Position) -> Result<HeuristicValue, GridError> {
        let goal = grid.find_unique(CellKind::Goal)?;
        Ok(self.evaluate(position, goal))
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum HeuristicName {
    #[default]
    #[clap(help = "Straight-line distance to the goal.")]
    Euclidean,
    #[clap(name = "zero", help = "No estimate, turns the search into uniform-cost search.")]
    #[serde(rename = "zero")]
    ZeroHeuristic,
}

impl HeuristicName {
    pub fn create(&self) -> Box<dyn Heuristic> {
        match self {
            HeuristicName::Euclidean => Box::new(EuclideanHeuristic::new()),
            HeuristicName::ZeroHeuristic => Box::new(ZeroHeuristic::new()),
        }
    }
}
