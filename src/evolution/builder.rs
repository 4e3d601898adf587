use crate::{
    error::{Result, ScheduleError},
    problem::ProblemData,
    strategy::BreedStrategy,
};

use super::{Challenge, EvolutionLauncher};

pub struct EvolutionLauncherBuilder<'a, B, F>
where
    B: BreedStrategy,
    F: Challenge,
{
    problem: &'a ProblemData,
    breed_strategy: Option<B>,
    challenge: Option<F>,
}

impl<'a, B, F> EvolutionLauncherBuilder<'a, B, F>
where
    B: BreedStrategy,
    F: Challenge,
{
    pub fn new(problem: &'a ProblemData) -> Self {
        Self {
            problem,
            breed_strategy: None,
            challenge: None,
        }
    }

    pub fn with_breed_strategy(mut self, breed_strategy: B) -> Self {
        self.breed_strategy = Some(breed_strategy);
        self
    }

    pub fn with_challenge(mut self, challenge: F) -> Self {
        self.challenge = Some(challenge);
        self
    }

    pub fn build(self) -> Result<EvolutionLauncher<'a, B, F>> {
        let breed_strategy = self.breed_strategy.ok_or_else(|| {
            ScheduleError::Configuration("Breeding strategy not specified".to_string())
        })?;

        let challenge = self
            .challenge
            .ok_or_else(|| ScheduleError::Configuration("Challenge not specified".to_string()))?;

        Ok(EvolutionLauncher::new(self.problem, breed_strategy, challenge))
    }
}
