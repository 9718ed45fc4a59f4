//! Work budgets for callers that drive a search in a loop. The engine itself
//! never stops on its own; a driver checks a [`TerminationCondition`] between
//! steps.

use std::time::{Duration, Instant};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "snake_case")]
pub enum TerminationReason {
    StepLimitReached,
    TimeLimitExceeded,
}

#[derive(Debug)]
pub struct TerminationCondition {
    step_limit: Option<usize>,
    time_limit: Option<Duration>,
    steps: usize,
    start_time: Instant,
}

impl TerminationCondition {
    pub fn new(step_limit: Option<usize>, time_limit: Option<Duration>) -> Self {
        info!(
            step_limit = step_limit,
            time_limit = time_limit.map(|d| d.as_secs_f64()),
        );
        Self {
            step_limit,
            time_limit,
            steps: 0,
            start_time: Instant::now(),
        }
    }

    pub fn unlimited() -> Self {
        Self::new(None, None)
    }

    pub fn record_step(&mut self) {
        self.steps += 1;
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn should_terminate(&self) -> Option<TerminationReason> {
        if let Some(step_limit) = self.step_limit {
            if self.steps >= step_limit {
                return Some(TerminationReason::StepLimitReached);
            }
        }
        if let Some(time_limit) = self.time_limit {
            if self.start_time.elapsed() > time_limit {
                return Some(TerminationReason::TimeLimitExceeded);
            }
        }
        None
    }

    pub fn finalise(&self) {
        info!(
            steps_taken = self.steps,
            total_time_used = self.start_time.elapsed().as_secs_f64(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_never_stops() {
        let mut condition = TerminationCondition::unlimited();
        for _ in 0..1000 {
            condition.record_step();
        }
        assert_eq!(condition.should_terminate(), None);
    }

    #[test]
    fn step_limit() {
        let mut condition = TerminationCondition::new(Some(2), None);
        assert_eq!(condition.should_terminate(), None);
        condition.record_step();
        condition.record_step();
        assert_eq!(
            condition.should_terminate(),
            Some(TerminationReason::StepLimitReached)
        );
        assert_eq!(condition.steps(), 2);
    }

    #[test]
    fn zero_time_limit_expires() {
        let condition = TerminationCondition::new(None, Some(Duration::ZERO));
        std::thread::sleep(Duration::from_millis(2));
        assert_eq!(
            condition.should_terminate(),
            Some(TerminationReason::TimeLimitExceeded)
        );
    }
}
