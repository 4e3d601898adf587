use crate::rng::RandomNumberGenerator;
use crate::schedule::Schedule;

/// Chance that a single key of a parent is passed on to the child.
pub const INHERIT_PROBABILITY: f64 = 0.5;

/// Uniform, gene-wise crossover.
///
/// Every key of `first` is inherited with probability one half, then every
/// key of `second` the same way. A key drawn from both parents ends up with
/// the second parent's desk at the position the first parent's entry took.
///
/// The child may double-book desks; the caller repairs it.
pub fn uniform_crossover(
    first: &Schedule,
    second: &Schedule,
    rng: &mut RandomNumberGenerator,
) -> Schedule {
    let mut child = Schedule::with_capacity(first.len().max(second.len()));
    for parent in [first, second] {
        for a in parent {
            if rng.chance(INHERIT_PROBABILITY) {
                child.insert(a.employee, a.day, a.desk);
            }
        }
    }
    child
}
