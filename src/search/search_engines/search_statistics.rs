use crate::search::HeuristicValue;
use ordered_float::Float;
use std::time::Instant;
use tracing::info;

#[derive(Debug, Clone)]
pub struct SearchStatistics {
    /// Number of nodes expanded, one per successful step
    expanded_nodes: i64,
    /// Number of child nodes pushed onto the frontier
    generated_nodes: i64,
    /// Number of popped nodes discarded because their signature was closed
    duplicate_pops: i64,
    /// Number of barrier neighbours that could not be entered
    blocked_moves: i64,
    /// Largest estimated total cost expanded so far
    cost_bound: HeuristicValue,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatistics {
    pub fn new() -> Self {
        info!("starting search");
        Self {
            expanded_nodes: 0,
            generated_nodes: 0,
            duplicate_pops: 0,
            blocked_moves: 0,
            cost_bound: HeuristicValue::neg_infinity(),
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    /// Record the estimated total cost of an expanded node, logging whenever
    /// the search moves on to a higher cost layer.
    pub fn register_cost(&mut self, cost: HeuristicValue) {
        if cost > self.cost_bound {
            self.cost_bound = cost;
            info!(cost_bound = self.cost_bound.into_inner());
        }
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.generated_nodes += num_nodes as i64;
        self.log_if_needed();
    }

    pub fn increment_duplicate_pops(&mut self) {
        self.duplicate_pops += 1;
        self.log_if_needed();
    }

    pub fn increment_blocked_moves(&mut self) {
        self.blocked_moves += 1;
    }

    pub fn expanded_nodes(&self) -> i64 {
        self.expanded_nodes
    }

    pub fn generated_nodes(&self) -> i64 {
        self.generated_nodes
    }

    pub fn duplicate_pops(&self) -> i64 {
        self.duplicate_pops
    }

    pub fn blocked_moves(&self) -> i64 {
        self.blocked_moves
    }

    pub fn cost_bound(&self) -> Option<f64> {
        (self.expanded_nodes > 0).then(|| self.cost_bound.into_inner())
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    fn log(&self) {
        info!(
            expanded_nodes = self.expanded_nodes,
            generated_nodes = self.generated_nodes,
            duplicate_pops = self.duplicate_pops,
            blocked_moves = self.blocked_moves,
            cost_bound = self.cost_bound.into_inner(),
        );
    }

    pub fn finalise_search(&self) {
        info!("finalising search");
        self.log();
        info!(search_duration = self.search_start_time.elapsed().as_secs_f64());
    }
}
