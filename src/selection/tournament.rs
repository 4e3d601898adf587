use crate::error::{Result, ScheduleError};
use crate::rng::RandomNumberGenerator;
use crate::schedule::ScoredSchedule;
use crate::selection::selection_strategy::SelectionStrategy;

/// A selection strategy that selects individuals through tournament selection.
///
/// Each tournament draws `tournament_size` distinct individuals uniformly at
/// random and returns the one with the lowest penalty. Ties go to the
/// participant drawn first. Separate tournaments are independent, so the same
/// individual can win several of them.
///
/// - Smaller tournament sizes lead to more exploration (more random selection)
/// - Larger tournament sizes lead to more exploitation (more focus on the best individuals)
///
/// # Examples
///
/// ```
/// use hotdesk::selection::{SelectionStrategy, TournamentSelection};
/// use hotdesk::schedule::{Schedule, ScoredSchedule};
/// use hotdesk::rng::RandomNumberGenerator;
///
/// let scored: Vec<ScoredSchedule> = (0..10)
///     .map(|score| ScoredSchedule { schedule: Schedule::new(), score })
///     .collect();
///
/// // A tournament over the whole population always finds the best
/// let selection = TournamentSelection::new(10).unwrap();
/// let mut rng = RandomNumberGenerator::from_seed(3);
/// let winners = selection.select(&scored, 4, &mut rng).unwrap();
/// assert!(winners.iter().all(|w| w.score == 0));
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TournamentSelection {
    tournament_size: usize,
}

impl TournamentSelection {
    /// Creates a new TournamentSelection strategy with the specified tournament size.
    ///
    /// # Errors
    ///
    /// Returns an error if `tournament_size` is 0.
    pub fn new(tournament_size: usize) -> Result<Self> {
        if tournament_size < 1 {
            return Err(ScheduleError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }

        Ok(Self { tournament_size })
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Runs a single tournament and returns the index of the winner.
    ///
    /// # Errors
    ///
    /// Returns an error if the population is empty or smaller than the tournament.
    pub fn run_tournament(
        &self,
        population: &[ScoredSchedule],
        rng: &mut RandomNumberGenerator,
    ) -> Result<usize> {
        if population.is_empty() {
            return Err(ScheduleError::EmptyPopulation);
        }

        if population.len() < self.tournament_size {
            return Err(ScheduleError::Selection(format!(
                "Tournament size ({}) exceeds population size ({})",
                self.tournament_size,
                population.len()
            )));
        }

        let participants = rng.sample_indices(population.len(), self.tournament_size);

        let (&first, rest) = participants.split_first().ok_or_else(|| {
            ScheduleError::Selection("Tournament has no participants".to_string())
        })?;
        let mut best_idx = first;
        for &idx in rest {
            if population[idx].score < population[best_idx].score {
                best_idx = idx;
            }
        }

        Ok(best_idx)
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self { tournament_size: 15 }
    }
}

impl SelectionStrategy for TournamentSelection {
    fn select<'a>(
        &self,
        population: &'a [ScoredSchedule],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<&'a ScoredSchedule>> {
        (0..num_to_select)
            .map(|_| {
                self.run_tournament(population, rng)
                    .map(|idx| &population[idx])
            })
            .collect()
    }

    fn validate(&self, population_size: usize) -> Result<()> {
        if self.tournament_size < 1 {
            return Err(ScheduleError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }
        if self.tournament_size > population_size {
            return Err(ScheduleError::Configuration(format!(
                "Tournament size ({}) exceeds population size ({})",
                self.tournament_size, population_size
            )));
        }
        Ok(())
    }
}
