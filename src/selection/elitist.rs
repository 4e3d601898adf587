use crate::error::{Result, ScheduleError};
use crate::rng::RandomNumberGenerator;
use crate::schedule::ScoredSchedule;
use crate::selection::selection_strategy::SelectionStrategy;

/// A selection strategy that selects the best individuals based on fitness.
///
/// This strategy orders individuals by penalty and takes the top N, keeping
/// population order among equal scores. It implements elitism: the best
/// schedules are carried into the next generation unchanged, so the best
/// score found never gets worse. Asking for more individuals than exist
/// returns the whole population.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElitistSelection;

impl ElitistSelection {
    pub fn new() -> Self {
        Self
    }
}

impl SelectionStrategy for ElitistSelection {
    fn select<'a>(
        &self,
        population: &'a [ScoredSchedule],
        num_to_select: usize,
        _rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<&'a ScoredSchedule>> {
        if population.is_empty() {
            return Err(ScheduleError::EmptyPopulation);
        }

        let mut ranked: Vec<&ScoredSchedule> = population.iter().collect();
        ranked.sort_by_key(|s| s.score);
        ranked.truncate(num_to_select);

        Ok(ranked)
    }
}
