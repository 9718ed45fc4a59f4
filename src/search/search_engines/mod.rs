mod astar;
mod search_engine;
mod search_statistics;
mod termination_condition;

pub use astar::AStar;
pub use search_engine::{
    run_until, Operation, RunResult, SearchEngine, SearchError, SearchOutcome, SearchPhase,
    SearchTrace, StepResult,
};
pub use search_statistics::SearchStatistics;
pub use termination_condition::{TerminationCondition, TerminationReason};
