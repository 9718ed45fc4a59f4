use crate::search::{
    search_engines::{TerminationCondition, TerminationReason},
    Grid, GridError, SearchNode,
};
use std::fmt::Debug;
use thiserror::Error;

/// Where a search is in its life cycle.
///
/// `Idle -> Running -> Found | Exhausted`, and `reset` returns to `Idle` from
/// anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
#[strum(serialize_all = "snake_case")]
pub enum SearchPhase {
    /// No search has been started since construction or the last reset.
    Idle,
    /// The frontier may still hold nodes and the goal has not been popped.
    Running,
    /// The goal was popped. Terminal.
    Found,
    /// The frontier ran dry before the goal was popped. Terminal.
    Exhausted,
}

impl SearchPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SearchPhase::Found | SearchPhase::Exhausted)
    }
}

/// Engine operations that can be refused because of the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Operation {
    Start,
    Step,
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("invalid grid: {0}")]
    InvalidGrid(#[from] GridError),
    #[error("cannot {operation} while the search is {phase}")]
    IllegalStateTransition {
        operation: Operation,
        phase: SearchPhase,
    },
}

/// What a single call to [`SearchEngine::step`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepResult {
    /// The node was expanded and the search goes on.
    Running(SearchNode),
    /// The node sits on the goal cell; its path is the result.
    Found(SearchNode),
    /// Nothing left to expand.
    Exhausted,
}

impl StepResult {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, StepResult::Running(_))
    }

    pub fn node(&self) -> Option<&SearchNode> {
        match self {
            StepResult::Running(node) | StepResult::Found(node) => Some(node),
            StepResult::Exhausted => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(SearchNode),
    Exhausted,
}

/// Every node a search expanded before it ended, in expansion order, and how
/// it ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTrace {
    pub visited: Vec<SearchNode>,
    pub outcome: SearchOutcome,
}

impl SearchTrace {
    pub fn goal_node(&self) -> Option<&SearchNode> {
        match &self.outcome {
            SearchOutcome::Found(node) => Some(node),
            SearchOutcome::Exhausted => None,
        }
    }
}

/// A search that advances one expansion at a time under the control of its
/// caller.
pub trait SearchEngine: Debug {
    /// Begin a search over `grid`. Only allowed while idle. Returns the root
    /// node, which is also the first node the next `step` will pop.
    fn start(&mut self, grid: Grid) -> Result<SearchNode, SearchError>;

    /// Expand the next node. Only allowed while running.
    fn step(&mut self) -> Result<StepResult, SearchError>;

    /// Drop all search state and return to idle. Never fails.
    fn reset(&mut self);

    fn phase(&self) -> SearchPhase;

    /// Step until the search ends. This is exactly a loop over
    /// [`SearchEngine::step`], so its trace matches what a caller stepping by
    /// hand would observe.
    fn run_to_completion(&mut self) -> Result<SearchTrace, SearchError> {
        let mut visited = Vec::new();
        loop {
            match self.step()? {
                StepResult::Running(node) => visited.push(node),
                StepResult::Found(node) => {
                    return Ok(SearchTrace {
                        visited,
                        outcome: SearchOutcome::Found(node),
                    })
                }
                StepResult::Exhausted => {
                    return Ok(SearchTrace {
                        visited,
                        outcome: SearchOutcome::Exhausted,
                    })
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunResult {
    Completed(SearchTrace),
    /// The caller's budget ran out first. The search stays running and can
    /// be resumed.
    Terminated {
        visited: Vec<SearchNode>,
        reason: TerminationReason,
    },
}

/// Step `engine` until it finishes or `condition` asks to stop.
pub fn run_until(
    engine: &mut dyn SearchEngine,
    condition: &mut TerminationCondition,
) -> Result<RunResult, SearchError> {
    let mut visited = Vec::new();
    loop {
        if let Some(reason) = condition.should_terminate() {
            condition.finalise();
            return Ok(RunResult::Terminated { visited, reason });
        }
        let result = engine.step()?;
        condition.record_step();
        match result {
            StepResult::Running(node) => visited.push(node),
            StepResult::Found(node) => {
                condition.finalise();
                return Ok(RunResult::Completed(SearchTrace {
                    visited,
                    outcome: SearchOutcome::Found(node),
                }));
            }
            StepResult::Exhausted => {
                condition.finalise();
                return Ok(RunResult::Completed(SearchTrace {
                    visited,
                    outcome: SearchOutcome::Exhausted,
                }));
            }
        }
    }
}
