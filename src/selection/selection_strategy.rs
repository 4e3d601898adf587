use std::fmt::Debug;

use crate::error::Result;
use crate::rng::RandomNumberGenerator;
use crate::schedule::ScoredSchedule;

/// Trait for selection strategies.
///
/// Selection strategies choose individuals from a scored population. Scores
/// are penalties, so lower is always better.
///
/// # Examples
///
/// ```
/// use hotdesk::selection::{ElitistSelection, SelectionStrategy};
/// use hotdesk::schedule::{Schedule, ScoredSchedule};
/// use hotdesk::rng::RandomNumberGenerator;
///
/// let scored: Vec<ScoredSchedule> = [30, 10, 20]
///     .into_iter()
///     .map(|score| ScoredSchedule { schedule: Schedule::new(), score })
///     .collect();
///
/// let mut rng = RandomNumberGenerator::from_seed(1);
/// let selected = ElitistSelection::new().select(&scored, 2, &mut rng).unwrap();
///
/// assert_eq!(selected.len(), 2);
/// assert_eq!(selected[0].score, 10);
/// assert_eq!(selected[1].score, 20);
/// ```
pub trait SelectionStrategy: Debug + Send + Sync {
    /// Selects `num_to_select` individuals from `population`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The population is empty
    /// - The population cannot support the strategy's configuration
    fn select<'a>(
        &self,
        population: &'a [ScoredSchedule],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<&'a ScoredSchedule>>;

    /// Checks once, before a run starts, that populations of
    /// `population_size` can support the strategy's configuration.
    fn validate(&self, _population_size: usize) -> Result<()> {
        Ok(())
    }
}
