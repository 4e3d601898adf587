use super::{
    challenge::Challenge,
    options::{EvolutionOptions, LogLevel},
};
use crate::{
    error::{OptionExt, Result, ScheduleError},
    operators::random_schedule,
    problem::ProblemData,
    rng::RandomNumberGenerator,
    schedule::{Schedule, ScoredSchedule},
    strategy::BreedStrategy,
};
use rayon::prelude::*;
use tracing::{debug, info};

/// Best scores of one generation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationStats {
    pub generation: usize,
    /// Lowest penalty in this generation.
    pub best_score: u64,
    /// Lowest penalty seen so far, this generation included.
    pub global_best_score: u64,
}

/// Represents the result of an evolution: the best schedule ever scored and
/// its penalty.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult {
    /// The best schedule found.
    pub schedule: Schedule,
    /// The penalty of the schedule.
    pub score: u64,
    /// One entry per scored generation.
    pub generations: Vec<GenerationStats>,
}

/// Manages the evolution process using a specified breeding strategy and challenge.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<'a, Strategy, Chall>
where
    Strategy: BreedStrategy,
    Chall: Challenge,
{
    problem: &'a ProblemData,
    strategy: Strategy,
    challenge: Chall,
}

impl<'a, Strategy, Chall> EvolutionLauncher<'a, Strategy, Chall>
where
    Strategy: BreedStrategy,
    Chall: Challenge,
{
    /// Creates a new `EvolutionLauncher` instance.
    ///
    /// # Arguments
    ///
    /// * `problem` - The problem whose schedules are evolved.
    /// * `strategy` - The breeding strategy used for generating offspring during evolution.
    /// * `challenge` - The challenge used to score schedules.
    pub fn new(problem: &'a ProblemData, strategy: Strategy, challenge: Chall) -> Self {
        Self {
            problem,
            strategy,
            challenge,
        }
    }

    pub fn problem(&self) -> &'a ProblemData {
        self.problem
    }

    /// Evolves a random population for the configured number of generations.
    ///
    /// Each generation is scored, and its best schedule replaces the overall
    /// best only when strictly better, so the earliest of equally good
    /// schedules is kept. The population bred after the last generation is
    /// never scored, so it is not built at all.
    ///
    /// # Returns
    ///
    /// A `Result` containing the best schedule ever scored, its penalty and
    /// the per-generation history.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The options are invalid (see [`EvolutionOptions::validate`])
    /// - The breeding strategy does not fit the options, e.g. its parent
    ///   tournament is larger than the population
    /// - The breeding process fails
    ///
    /// # Performance
    ///
    /// Populations of at least `parallel_threshold` schedules are scored in
    /// parallel with Rayon. Results do not depend on the thread count.
    pub fn evolve(
        &self,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult> {
        options.validate()?;
        self.strategy.validate(options)?;

        let num_generations = options.get_num_generations();
        info!(
            employees = self.problem.num_employees(),
            desks = self.problem.num_desks(),
            days = self.problem.num_days(),
            population = options.get_population_size(),
            generations = num_generations,
            "starting evolution"
        );

        let mut population: Vec<Schedule> = (0..options.get_population_size())
            .map(|_| random_schedule(self.problem, rng))
            .collect();
        let mut best: Option<ScoredSchedule> = None;
        let mut history: Vec<GenerationStats> = Vec::with_capacity(num_generations);
        let mut stalled = 0usize;

        for generation in 0..num_generations {
            let scored = self.evaluate(population, options);
            let current = scored.first().ok_or_else_schedule(|| {
                ScheduleError::Evolution(format!(
                    "No schedules to score in generation {}",
                    generation
                ))
            })?;

            let improved = best.as_ref().map_or(true, |b| current.score < b.score);
            if improved {
                debug!(generation, score = current.score, "new best schedule");
                best = Some(current.clone());
                stalled = 0;
            } else {
                stalled += 1;
            }
            let global_best_score = best.as_ref().map_or(current.score, |b| b.score);

            history.push(GenerationStats {
                generation,
                best_score: current.score,
                global_best_score,
            });

            match options.get_log_level() {
                LogLevel::Minimal => {
                    info!(generation, best = current.score, global_best = global_best_score);
                }
                LogLevel::Verbose => {
                    info!(generation, best = current.score, global_best = global_best_score);
                    if let Some(detail) = self.challenge.describe(&current.schedule) {
                        debug!(generation, penalties = %detail);
                    }
                }
                LogLevel::None => {}
            }

            if let Some(limit) = options.get_stall_limit() {
                if stalled >= limit {
                    debug!(generation, stalled, "no improvement, stopping early");
                    break;
                }
            }
            if generation + 1 == num_generations {
                break;
            }

            population = self
                .strategy
                .breed(&scored, self.problem, options, rng)
                .map_err(|e| {
                    ScheduleError::Evolution(format!(
                        "Failed to breed generation {}: {}",
                        generation + 1,
                        e
                    ))
                })?;
        }

        let best = best.ok_or_else_schedule(|| {
            ScheduleError::Evolution("Evolution completed without scoring any schedule".to_string())
        })?;
        info!(
            score = best.score,
            assignments = best.schedule.len(),
            generations = history.len(),
            "evolution finished"
        );

        Ok(EvolutionResult {
            schedule: best.schedule,
            score: best.score,
            generations: history,
        })
    }

    /// Scores every schedule and sorts best first. Equal scores keep
    /// population order.
    fn evaluate(&self, population: Vec<Schedule>, options: &EvolutionOptions) -> Vec<ScoredSchedule> {
        let mut scored: Vec<ScoredSchedule> = if population.len() >= options.get_parallel_threshold() {
            population
                .into_par_iter()
                .map(|schedule| {
                    let score = self.challenge.score(&schedule);
                    ScoredSchedule { schedule, score }
                })
                .collect()
        } else {
            population
                .into_iter()
                .map(|schedule| {
                    let score = self.challenge.score(&schedule);
                    ScoredSchedule { schedule, score }
                })
                .collect()
        };
        scored.sort_by_key(|s| s.score);
        scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::{FitnessEvaluator, PenaltyWeights};
    use crate::problem::ProblemInput;
    use crate::selection::TournamentSelection;
    use crate::strategy::GenerationalStrategy;

    fn problem() -> ProblemData {
        let names = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        let mut input = ProblemInput {
            employees: names(&["Ana", "Bo", "Cy"]),
            desks: names(&["D1", "D2"]),
            days: names(&["Mon", "Tue"]),
            groups: names(&["G1"]),
            zones: names(&["Z1"]),
            ..Default::default()
        };
        input.desks_by_zone.insert("Z1".into(), names(&["D1", "D2"]));
        for employee in ["Ana", "Bo", "Cy"] {
            input.eligible_desks.insert(employee.into(), names(&["D1", "D2"]));
        }
        input.preferred_days.insert("Ana".into(), names(&["Mon"]));
        input.preferred_days.insert("Bo".into(), names(&["Mon"]));
        input.preferred_days.insert("Cy".into(), names(&["Tue"]));
        input.group_members.insert("G1".into(), names(&["Ana", "Bo"]));
        ProblemData::from_input(input).unwrap()
    }

    fn launcher(
        problem: &ProblemData,
    ) -> EvolutionLauncher<'_, GenerationalStrategy, FitnessEvaluator<'_>> {
        EvolutionLauncher::new(
            problem,
            GenerationalStrategy::new(TournamentSelection::new(3).unwrap()),
            FitnessEvaluator::standard(problem, &PenaltyWeights::default()),
        )
    }

    fn options() -> EvolutionOptions {
        EvolutionOptions::builder()
            .population_size(20)
            .num_generations(15)
            .tournament_size(3)
            .elitism_count(2)
            .build()
    }

    #[test]
    fn test_global_best_never_worsens() {
        let problem = problem();
        let mut rng = RandomNumberGenerator::from_seed(42);
        let result = launcher(&problem).evolve(&options(), &mut rng).unwrap();

        assert_eq!(result.generations.len(), 15);
        for pair in result.generations.windows(2) {
            assert!(pair[1].global_best_score <= pair[0].global_best_score);
        }
        // With elites carried over, each generation's best is the global best
        for stats in &result.generations {
            assert_eq!(stats.best_score, stats.global_best_score);
        }
        let last = result.generations.last().unwrap();
        assert_eq!(result.score, last.global_best_score);
    }

    #[test]
    fn test_result_score_matches_schedule() {
        let problem = problem();
        let mut rng = RandomNumberGenerator::from_seed(3);
        let launcher = launcher(&problem);
        let result = launcher.evolve(&options(), &mut rng).unwrap();

        let evaluator = FitnessEvaluator::standard(&problem, &PenaltyWeights::default());
        assert_eq!(evaluator.score(&result.schedule), result.score);
        assert!(!result.schedule.has_conflicts());
    }

    #[test]
    fn test_parallel_and_sequential_agree() {
        let problem = problem();
        let sequential = options();
        let parallel = EvolutionOptions::builder()
            .population_size(20)
            .num_generations(15)
            .tournament_size(3)
            .elitism_count(2)
            .parallel_threshold(1)
            .build();

        let first = launcher(&problem)
            .evolve(&sequential, &mut RandomNumberGenerator::from_seed(8))
            .unwrap();
        let second = launcher(&problem)
            .evolve(&parallel, &mut RandomNumberGenerator::from_seed(8))
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_stall_limit_stops_early() {
        let problem = problem();
        let options = EvolutionOptions::builder()
            .population_size(20)
            .num_generations(200)
            .tournament_size(3)
            .elitism_count(2)
            .stall_limit(5)
            .build();
        let mut rng = RandomNumberGenerator::from_seed(17);
        let result = launcher(&problem).evolve(&options, &mut rng).unwrap();
        assert!(result.generations.len() < 200);
    }

    #[test]
    fn test_invalid_options() {
        let problem = problem();
        let options = EvolutionOptions::builder()
            .population_size(2)
            .tournament_size(3)
            .elitism_count(1)
            .build();
        let mut rng = RandomNumberGenerator::from_seed(1);
        assert!(matches!(
            launcher(&problem).evolve(&options, &mut rng),
            Err(ScheduleError::Configuration(_))
        ));
    }

    #[test]
    fn test_strategy_is_validated_before_the_first_generation() {
        let problem = problem();
        let options = EvolutionOptions::builder()
            .population_size(5)
            .tournament_size(2)
            .elitism_count(1)
            .build();
        assert!(options.validate().is_ok());

        let launcher = EvolutionLauncher::new(
            &problem,
            GenerationalStrategy::new(TournamentSelection::new(10).unwrap()),
            FitnessEvaluator::standard(&problem, &PenaltyWeights::default()),
        );
        let mut rng = RandomNumberGenerator::from_seed(1);
        assert!(matches!(
            launcher.evolve(&options, &mut rng),
            Err(ScheduleError::Configuration(_))
        ));
    }
}
