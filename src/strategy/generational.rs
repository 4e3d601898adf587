use super::BreedStrategy;
use crate::{
    error::{Result, ScheduleError},
    evolution::options::EvolutionOptions,
    operators::{repair, uniform_crossover, Mutator},
    problem::ProblemData,
    rng::RandomNumberGenerator,
    schedule::{Schedule, ScoredSchedule},
    selection::{ElitistSelection, SelectionStrategy, TournamentSelection},
};

/// # GenerationalStrategy
///
/// Replaces the whole population each generation.
///
/// The `elitism_count` best schedules are copied over unchanged. Every other
/// slot is filled by a child: two parents are picked with `parent_selection`,
/// then with probability `crossover_rate` they are recombined by uniform
/// crossover, otherwise one of them is taken as is. The child is then mutated.
/// Repair runs after both variation steps, so every child is free of double
/// bookings.
#[derive(Debug, Clone)]
pub struct GenerationalStrategy<S = TournamentSelection>
where
    S: SelectionStrategy,
{
    parent_selection: S,
    elite_selection: ElitistSelection,
}

impl<S: SelectionStrategy> GenerationalStrategy<S> {
    pub fn new(parent_selection: S) -> Self {
        Self {
            parent_selection,
            elite_selection: ElitistSelection::new(),
        }
    }

    pub fn parent_selection(&self) -> &S {
        &self.parent_selection
    }
}

impl Default for GenerationalStrategy<TournamentSelection> {
    fn default() -> Self {
        Self::new(TournamentSelection::default())
    }
}

impl<S: SelectionStrategy> BreedStrategy for GenerationalStrategy<S> {
    fn breed(
        &self,
        scored: &[ScoredSchedule],
        problem: &ProblemData,
        evol_options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Schedule>> {
        if scored.is_empty() {
            return Err(ScheduleError::EmptyPopulation);
        }

        let population_size = evol_options.get_population_size();
        let mutator = Mutator::new(
            evol_options.get_mutation_rate(),
            *evol_options.get_mutation_kinds(),
            evol_options.get_addition_rate(),
        );

        let mut children: Vec<Schedule> = Vec::with_capacity(population_size);
        let elites_count = evol_options.get_elitism_count().min(population_size);
        children.extend(
            self.elite_selection
                .select(scored, elites_count, rng)?
                .into_iter()
                .map(|elite| elite.schedule.clone()),
        );

        while children.len() < population_size {
            let parents = self.parent_selection.select(scored, 2, rng)?;
            let (first, second) = match parents.as_slice() {
                [first, second] => (&first.schedule, &second.schedule),
                _ => {
                    return Err(ScheduleError::Selection(format!(
                        "Expected two parents, got {}",
                        parents.len()
                    )))
                }
            };

            let mut child = if rng.chance(evol_options.get_crossover_rate()) {
                let mut offspring = uniform_crossover(first, second, rng);
                repair(&mut offspring, problem, rng);
                mutator.mutate(&offspring, problem, rng)
            } else {
                let parent = if rng.chance(0.5) { first } else { second };
                mutator.mutate(parent, problem, rng)
            };
            repair(&mut child, problem, rng);
            children.push(child);
        }

        Ok(children)
    }

    fn validate(&self, evol_options: &EvolutionOptions) -> Result<()> {
        self.parent_selection
            .validate(evol_options.get_population_size())
    }
}
