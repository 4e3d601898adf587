//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds every tunable of a search run: the
//! population and generation budget, the variation probabilities, the
//! selection pressure, the penalty weights and the logging level.
//!
//! ## Example
//!
//! ```rust
//! use hotdesk::evolution::options::{EvolutionOptions, LogLevel};
//!
//! // Defaults: 300 schedules for 300 generations
//! let default_options = EvolutionOptions::default();
//! assert_eq!(default_options.get_population_size(), 300);
//!
//! let options = EvolutionOptions::builder()
//!     .population_size(60)
//!     .num_generations(40)
//!     .tournament_size(5)
//!     .elitism_count(3)
//!     .log_level(LogLevel::Minimal)
//!     .build();
//! assert!(options.validate().is_ok());
//! ```
//!
//! ## Defaults
//!
//! | Option | Default |
//! |---|---|
//! | population size | 300 |
//! | generations | 300 |
//! | crossover rate | 0.65 |
//! | mutation rate (per assignment) | 0.01 |
//! | elitism count | 15 |
//! | tournament size | 15 |
//! | mutation kinds | reroll 0.75, day move 0.20, delete 0.05 |
//! | addition rate | 0.10 |
//! | parallel threshold | 128 |
//! | stall limit | none |

use crate::constraints::PenaltyWeights;
use crate::error::{Result, ScheduleError};
use crate::operators::MutationRates;

/// How much the launcher reports per generation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Best scores and the penalty breakdown of the generation's best.
    Verbose,
    /// Best scores only.
    Minimal,
    #[default]
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    population_size: usize,
    num_generations: usize,
    crossover_rate: f64,
    mutation_rate: f64,
    elitism_count: usize,
    tournament_size: usize,
    mutation_kinds: MutationRates,
    addition_rate: f64,
    /// Weights used by [`optimize`](crate::evolution::optimize). A launcher
    /// built by hand scores with whatever challenge it was given.
    penalty_weights: PenaltyWeights,
    /// Minimum population size evaluated in parallel
    parallel_threshold: usize,
    log_level: LogLevel,
    /// Stop after this many generations without improvement. Must be at
    /// least 1 when set.
    stall_limit: Option<usize>,
}

impl EvolutionOptions {
    /// Returns a builder for creating an `EvolutionOptions` instance, starting
    /// from the defaults.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }

    /// Checks the options once before a run.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::Configuration`] if a size is zero, the
    /// tournament does not fit in the population, more elites than
    /// individuals are requested, a probability lies outside `[0, 1]`, the
    /// mutation kinds have no weight at all, or the stall limit is zero.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(config("Population size cannot be zero"));
        }
        if self.num_generations == 0 {
            return Err(config("Number of generations cannot be zero"));
        }
        if self.tournament_size == 0 {
            return Err(config("Tournament size must be at least 1"));
        }
        if self.population_size < self.tournament_size {
            return Err(config(format!(
                "Population size ({}) must be at least the tournament size ({})",
                self.population_size, self.tournament_size
            )));
        }
        if self.elitism_count > self.population_size {
            return Err(config(format!(
                "Elitism count ({}) exceeds population size ({})",
                self.elitism_count, self.population_size
            )));
        }
        for (name, value) in [
            ("crossover rate", self.crossover_rate),
            ("mutation rate", self.mutation_rate),
            ("addition rate", self.addition_rate),
            ("desk reroll share", self.mutation_kinds.desk_reroll),
            ("day move share", self.mutation_kinds.day_move),
            ("delete share", self.mutation_kinds.delete),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(config(format!("{} must lie in [0, 1], got {}", name, value)));
            }
        }
        if self.mutation_kinds.total() <= 0.0 {
            return Err(config("Mutation kind shares cannot all be zero"));
        }
        if self.stall_limit == Some(0) {
            return Err(config("Stall limit must be at least 1"));
        }
        Ok(())
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_crossover_rate(&self) -> f64 {
        self.crossover_rate
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn get_elitism_count(&self) -> usize {
        self.elitism_count
    }

    pub fn get_tournament_size(&self) -> usize {
        self.tournament_size
    }

    pub fn get_mutation_kinds(&self) -> &MutationRates {
        &self.mutation_kinds
    }

    pub fn get_addition_rate(&self) -> f64 {
        self.addition_rate
    }

    pub fn get_penalty_weights(&self) -> &PenaltyWeights {
        &self.penalty_weights
    }

    /// Returns the minimum population size evaluated in parallel.
    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn get_stall_limit(&self) -> Option<usize> {
        self.stall_limit
    }

    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    pub fn set_num_generations(&mut self, num_generations: usize) {
        self.num_generations = num_generations;
    }

    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    pub fn set_penalty_weights(&mut self, weights: PenaltyWeights) {
        self.penalty_weights = weights;
    }

    pub fn set_stall_limit(&mut self, stall_limit: Option<usize>) {
        self.stall_limit = stall_limit;
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            population_size: 300,
            num_generations: 300,
            crossover_rate: 0.65,
            mutation_rate: 0.01,
            elitism_count: 15,
            tournament_size: 15,
            mutation_kinds: MutationRates::default(),
            addition_rate: 0.10,
            penalty_weights: PenaltyWeights::default(),
            parallel_threshold: 128,
            log_level: LogLevel::None,
            stall_limit: None,
        }
    }
}

fn config(message: impl Into<String>) -> ScheduleError {
    ScheduleError::Configuration(message.into())
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface; anything not set keeps its default.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    options: EvolutionOptions,
}

impl EvolutionOptionsBuilder {
    pub fn population_size(mut self, value: usize) -> Self {
        self.options.population_size = value;
        self
    }

    pub fn num_generations(mut self, value: usize) -> Self {
        self.options.num_generations = value;
        self
    }

    pub fn crossover_rate(mut self, value: f64) -> Self {
        self.options.crossover_rate = value;
        self
    }

    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.options.mutation_rate = value;
        self
    }

    pub fn elitism_count(mut self, value: usize) -> Self {
        self.options.elitism_count = value;
        self
    }

    pub fn tournament_size(mut self, value: usize) -> Self {
        self.options.tournament_size = value;
        self
    }

    pub fn mutation_kinds(mut self, value: MutationRates) -> Self {
        self.options.mutation_kinds = value;
        self
    }

    pub fn addition_rate(mut self, value: f64) -> Self {
        self.options.addition_rate = value;
        self
    }

    pub fn penalty_weights(mut self, value: PenaltyWeights) -> Self {
        self.options.penalty_weights = value;
        self
    }

    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.options.parallel_threshold = value;
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.options.log_level = value;
        self
    }

    pub fn stall_limit(mut self, value: usize) -> Self {
        self.options.stall_limit = Some(value);
        self
    }

    pub fn build(self) -> EvolutionOptions {
        self.options
    }
}
