//! # BreedStrategy
//!
//! The `BreedStrategy` trait defines the interface for strategies responsible for breeding
//! the next population of schedules from the scored current one.
pub mod generational;

use std::fmt::Debug;

use crate::{
    error::Result,
    evolution::options::EvolutionOptions,
    problem::ProblemData,
    rng::RandomNumberGenerator,
    schedule::{Schedule, ScoredSchedule},
};

/// # BreedStrategy
///
/// Implementations pick parents, vary them and hand back a full population.
/// Every schedule they return must be free of double bookings.
pub trait BreedStrategy
where
    Self: Debug + Send + Sync,
{
    /// Breeds the next population.
    ///
    /// ## Parameters
    ///
    /// - `scored`: The current population with its penalties, best first.
    /// - `problem`: The problem the schedules belong to.
    /// - `evol_options`: The evolution options specifying algorithm parameters.
    /// - `rng`: The random number generator used for every random choice.
    ///
    /// ## Errors
    ///
    /// This method can fail if the population is empty or parent selection fails.
    fn breed(
        &self,
        scored: &[ScoredSchedule],
        problem: &ProblemData,
        evol_options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Schedule>>;

    /// Checks the strategy's own settings against the run's options. Called
    /// once by the launcher before the first population is built.
    fn validate(&self, _evol_options: &EvolutionOptions) -> Result<()> {
        Ok(())
    }
}

pub use generational::GenerationalStrategy;
