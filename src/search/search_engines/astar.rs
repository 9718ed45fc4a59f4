//! This module implements a stepwise A* search over grids with barriers and a
//! single-use power-up.

use crate::search::{
    search_engines::{
        Operation, SearchEngine, SearchError, SearchPhase, SearchStatistics, StepResult,
    },
    ClosedRegistry, Frontier, Grid, Heuristic, HeuristicName, Position, SearchNode,
};
use tracing::{debug, info, trace};

/// State owned by one search between `start` and `reset`.
#[derive(Debug)]
struct ActiveSearch {
    grid: Grid,
    goal: Position,
    frontier: Frontier,
    closed: ClosedRegistry,
    statistics: SearchStatistics,
}

/// A* search that is advanced one expansion per [`SearchEngine::step`] call.
///
/// Duplicate states are filtered when they are popped rather than when they
/// are pushed. A popped duplicate is discarded within the same `step` call,
/// so every call that returns a node has expanded exactly that node.
#[derive(Debug)]
pub struct AStar {
    heuristic: Box<dyn Heuristic>,
    phase: SearchPhase,
    search: Option<ActiveSearch>,
}

impl AStar {
    pub fn new(heuristic: Box<dyn Heuristic>) -> Self {
        Self {
            heuristic,
            phase: SearchPhase::Idle,
            search: None,
        }
    }

    pub fn with_heuristic_name(name: HeuristicName) -> Self {
        Self::new(name.create())
    }

    /// The grid of the current search, if one has been started.
    pub fn grid(&self) -> Option<&Grid> {
        self.search.as_ref().map(|search| &search.grid)
    }

    pub fn frontier(&self) -> Option<&Frontier> {
        self.search.as_ref().map(|search| &search.frontier)
    }

    pub fn closed(&self) -> Option<&ClosedRegistry> {
        self.search.as_ref().map(|search| &search.closed)
    }

    pub fn statistics(&self) -> Option<&SearchStatistics> {
        self.search.as_ref().map(|search| &search.statistics)
    }
}

impl Default for AStar {
    fn default() -> Self {
        Self::with_heuristic_name(HeuristicName::default())
    }
}

impl SearchEngine for AStar {
    fn start(&mut self, grid: Grid) -> Result<SearchNode, SearchError> {
        if self.phase != SearchPhase::Idle {
            return Err(SearchError::IllegalStateTransition {
                operation: Operation::Start,
                phase: self.phase,
            });
        }
        let (start, goal) = grid.validate()?;
        let root = SearchNode::new_root(start, self.heuristic.evaluate_in(&grid, start)?);

        info!(
            rows = grid.rows(),
            cols = grid.cols(),
            start = %start,
            goal = %goal,
            initial_estimate = root.estimated_total_cost().into_inner(),
        );
        let mut frontier = Frontier::new();
        frontier.push(root.clone());
        self.search = Some(ActiveSearch {
            grid,
            goal,
            frontier,
            closed: ClosedRegistry::new(),
            statistics: SearchStatistics::new(),
        });
        self.phase = SearchPhase::Running;
        Ok(root)
    }

    fn step(&mut self) -> Result<StepResult, SearchError> {
        let search = match (self.phase, self.search.as_mut()) {
            (SearchPhase::Running, Some(search)) => search,
            (phase, _) => {
                return Err(SearchError::IllegalStateTransition {
                    operation: Operation::Step,
                    phase,
                })
            }
        };

        let node = loop {
            let Some(node) = search.frontier.pop() else {
                info!("frontier exhausted, no path to the goal");
                search.statistics.finalise_search();
                self.phase = SearchPhase::Exhausted;
                return Ok(StepResult::Exhausted);
            };
            if search.closed.close(node.signature()) {
                break node;
            }
            search.statistics.increment_duplicate_pops();
        };
        search.statistics.increment_expanded_nodes();
        search.statistics.register_cost(node.estimated_total_cost());
        debug!(
            position = %node.position(),
            distance_traveled = node.distance_traveled(),
            has_power_up = node.has_power_up(),
            used_power_up = node.used_power_up(),
            estimated_total_cost = node.estimated_total_cost().into_inner(),
            "expanding node"
        );

        if node.position() == search.goal {
            info!(
                distance_traveled = node.distance_traveled(),
                path_length = node.path().len(),
                "goal reached"
            );
            search.statistics.finalise_search();
            self.phase = SearchPhase::Found;
            return Ok(StepResult::Found(node));
        }

        let mut num_children = 0;
        for (direction, position, kind) in search.grid.neighbours(node.position()) {
            let h = self.heuristic.evaluate(position, search.goal);
            let Some(child) = node.successor(position, kind, h) else {
                search.statistics.increment_blocked_moves();
                continue;
            };
            trace!(
                ?direction,
                position = %position,
                estimated_total_cost = child.estimated_total_cost().into_inner(),
                "pushing child"
            );
            search.frontier.push(child);
            num_children += 1;
        }
        search.statistics.increment_generated_nodes(num_children);

        Ok(StepResult::Running(node))
    }

    fn reset(&mut self) {
        if self.phase != SearchPhase::Idle {
            debug!(phase = %self.phase, "resetting search");
        }
        self.search = None;
        self.phase = SearchPhase::Idle;
    }

    fn phase(&self) -> SearchPhase {
        self.phase
    }
}
