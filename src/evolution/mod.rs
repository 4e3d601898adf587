pub mod builder;
pub mod challenge;
pub mod launcher;
pub mod options;

pub use builder::EvolutionLauncherBuilder;
pub use challenge::Challenge;
pub use launcher::{EvolutionLauncher, EvolutionResult, GenerationStats};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, LogLevel};

use crate::{
    constraints::FitnessEvaluator, error::Result, problem::ProblemData,
    rng::RandomNumberGenerator, selection::TournamentSelection, strategy::GenerationalStrategy,
};

/// Runs the standard search: generational breeding with tournament parents,
/// scored by the standard penalty rules weighted by `options`.
///
/// # Errors
///
/// Returns [`crate::error::ScheduleError::Configuration`] if `options` are
/// invalid.
///
/// # Examples
///
/// ```
/// use hotdesk::evolution::{optimize, EvolutionOptions};
/// use hotdesk::problem::{ProblemData, ProblemInput};
/// use hotdesk::rng::RandomNumberGenerator;
///
/// let mut input = ProblemInput::default();
/// input.employees = vec!["Ana".to_string()];
/// input.desks = vec!["D1".to_string()];
/// input.days = vec!["Mon".to_string()];
/// input.eligible_desks.insert("Ana".to_string(), vec!["D1".to_string()]);
/// input.preferred_days.insert("Ana".to_string(), vec!["Mon".to_string()]);
/// let problem = ProblemData::from_input(input).unwrap();
///
/// let options = EvolutionOptions::builder()
///     .population_size(4)
///     .num_generations(3)
///     .tournament_size(2)
///     .elitism_count(1)
///     .build();
/// let mut rng = RandomNumberGenerator::from_seed(1);
/// let result = optimize(&problem, &options, &mut rng).unwrap();
/// assert_eq!(result.score, 0);
/// ```
pub fn optimize(
    problem: &ProblemData,
    options: &EvolutionOptions,
    rng: &mut RandomNumberGenerator,
) -> Result<EvolutionResult> {
    options.validate()?;
    let launcher = EvolutionLauncherBuilder::new(problem)
        .with_breed_strategy(GenerationalStrategy::new(TournamentSelection::new(
            options.get_tournament_size(),
        )?))
        .with_challenge(FitnessEvaluator::standard(
            problem,
            options.get_penalty_weights(),
        ))
        .build()?;
    launcher.evolve(options, rng)
}
