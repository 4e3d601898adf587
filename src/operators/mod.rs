//! # Operators
//!
//! The building blocks the generational search composes: building a random
//! starting schedule, repairing desk double-bookings, uniform crossover and
//! mutation. Crossover and mutation may leave conflicts behind; the breeding
//! strategy repairs every child before it joins the population.

pub mod construction;
pub mod crossover;
pub mod mutation;
pub mod repair;

pub use construction::random_schedule;
pub use crossover::uniform_crossover;
pub use mutation::{MutationKind, MutationRates, Mutator};
pub use repair::repair;
