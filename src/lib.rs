pub mod constraints;
pub mod error;
pub mod evolution;
pub mod kpi;
pub mod operators;
pub mod problem;
pub mod rng;
pub mod schedule;
pub mod selection;
pub mod strategy;

// Re-export commonly used types for convenience
pub use constraints::{FitnessEvaluator, PenaltyWeights};
pub use error::{OptionExt, Result, ScheduleError};
pub use evolution::{optimize, EvolutionOptions, EvolutionResult, LogLevel};
pub use kpi::ScheduleKpi;
pub use problem::{ProblemData, ProblemInput};
pub use rng::RandomNumberGenerator;
pub use schedule::{Assignment, Schedule};
