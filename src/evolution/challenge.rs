use crate::constraints::FitnessEvaluator;
use crate::schedule::Schedule;

/// Scores schedules; lower is better and zero is perfect.
pub trait Challenge: Send + Sync {
    fn score(&self, schedule: &Schedule) -> u64;

    /// Human-readable detail of a score, used by verbose logging.
    fn describe(&self, _schedule: &Schedule) -> Option<String> {
        None
    }
}

impl Challenge for FitnessEvaluator<'_> {
    fn score(&self, schedule: &Schedule) -> u64 {
        FitnessEvaluator::score(self, schedule)
    }

    fn describe(&self, schedule: &Schedule) -> Option<String> {
        Some(self.breakdown(schedule).to_string())
    }
}
