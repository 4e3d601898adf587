use crate::problem::{DayId, DeskId, EmployeeId, ProblemData};
use crate::rng::RandomNumberGenerator;
use crate::schedule::Schedule;

/// The three kinds of per-assignment mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    /// Same day, another free eligible desk.
    DeskReroll,
    /// Same desk, another day on which it is free.
    DayMove,
    /// Drop the assignment.
    Delete,
}

/// Relative shares of the mutation kinds, given that an assignment mutates.
///
/// The shares need not sum to one; they are scaled by their total.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MutationRates {
    pub desk_reroll: f64,
    pub day_move: f64,
    pub delete: f64,
}

impl MutationRates {
    pub fn total(&self) -> f64 {
        self.desk_reroll + self.day_move + self.delete
    }

    /// Maps a uniform draw in `[0, 1)` onto a kind via cumulative thresholds.
    pub fn pick(&self, draw: f64) -> MutationKind {
        let scaled = draw * self.total();
        if scaled < self.desk_reroll {
            MutationKind::DeskReroll
        } else if scaled < self.desk_reroll + self.day_move {
            MutationKind::DayMove
        } else {
            MutationKind::Delete
        }
    }
}

impl Default for MutationRates {
    fn default() -> Self {
        Self {
            desk_reroll: 0.75,
            day_move: 0.20,
            delete: 0.05,
        }
    }
}

/// Produces mutated copies of schedules.
///
/// Every assignment mutates independently with probability `rate`; the kind
/// is drawn from `kinds`. Afterwards, with probability `addition_rate`, one
/// random employee gains a seat on one random day they do not have yet.
///
/// Every desk a mutant gains is drawn from the employee's eligible desks.
/// Mutants may still need repair; the caller takes care of that.
#[derive(Debug, Clone, PartialEq)]
pub struct Mutator {
    rate: f64,
    kinds: MutationRates,
    addition_rate: f64,
}

impl Mutator {
    pub fn new(rate: f64, kinds: MutationRates, addition_rate: f64) -> Self {
        Self {
            rate,
            kinds,
            addition_rate,
        }
    }

    /// Returns a mutated copy; `schedule` itself is never touched.
    pub fn mutate(
        &self,
        schedule: &Schedule,
        problem: &ProblemData,
        rng: &mut RandomNumberGenerator,
    ) -> Schedule {
        let mut mutant = schedule.clone();

        for (employee, day) in schedule.keys() {
            if !mutant.contains(employee, day) {
                continue;
            }
            if !rng.chance(self.rate) {
                continue;
            }
            match self.kinds.pick(rng.uniform()) {
                MutationKind::DeskReroll => reroll_desk(&mut mutant, problem, employee, day, rng),
                MutationKind::DayMove => move_day(&mut mutant, problem, employee, day, rng),
                MutationKind::Delete => {
                    mutant.remove(employee, day);
                }
            }
        }

        if rng.chance(self.addition_rate) {
            add_assignment(&mut mutant, problem, rng);
        }

        mutant
    }
}

impl Default for Mutator {
    fn default() -> Self {
        Self::new(0.01, MutationRates::default(), 0.10)
    }
}

fn free_eligible_desks(
    schedule: &Schedule,
    problem: &ProblemData,
    employee: EmployeeId,
    day: DayId,
) -> Vec<DeskId> {
    let taken = schedule.desks_taken_by_others(employee, day);
    problem
        .eligible_desks(employee)
        .iter()
        .copied()
        .filter(|desk| !taken.contains(desk))
        .collect()
}

fn reroll_desk(
    mutant: &mut Schedule,
    problem: &ProblemData,
    employee: EmployeeId,
    day: DayId,
    rng: &mut RandomNumberGenerator,
) {
    let options = free_eligible_desks(mutant, problem, employee, day);
    if let Some(&desk) = rng.choose(&options) {
        mutant.insert(employee, day, desk);
    }
}

/// Moves the assignment to the first day (in random order) on which the desk
/// is free and the employee has no seat yet. Restores it when there is none.
fn move_day(
    mutant: &mut Schedule,
    problem: &ProblemData,
    employee: EmployeeId,
    day: DayId,
    rng: &mut RandomNumberGenerator,
) {
    let Some(desk) = mutant.remove(employee, day) else {
        return;
    };

    let mut days: Vec<DayId> = problem.days().filter(|&other| other != day).collect();
    rng.shuffle(&mut days);
    let target = days.into_iter().find(|&other| {
        !mutant.contains(employee, other) && !mutant.desks_taken_on(other).contains(&desk)
    });

    mutant.insert(employee, target.unwrap_or(day), desk);
}

fn add_assignment(mutant: &mut Schedule, problem: &ProblemData, rng: &mut RandomNumberGenerator) {
    let employees: Vec<EmployeeId> = problem.employees().collect();
    let Some(&employee) = rng.choose(&employees) else {
        return;
    };

    let assigned = mutant.days_of(employee);
    let free_days: Vec<DayId> = problem.days().filter(|day| !assigned.contains(day)).collect();
    let Some(&day) = rng.choose(&free_days) else {
        return;
    };

    let options = free_eligible_desks(mutant, problem, employee, day);
    if let Some(&desk) = rng.choose(&options) {
        mutant.insert(employee, day, desk);
    }
}
