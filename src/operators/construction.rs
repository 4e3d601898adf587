use std::collections::HashSet;

use crate::problem::{DayId, DeskId, EmployeeId, ProblemData};
use crate::rng::RandomNumberGenerator;
use crate::schedule::Schedule;

/// Builds a randomized, conflict-free starting schedule.
///
/// Employees are visited in shuffled order. Each one is seated on every
/// preferred day (in shuffled order) that still has a free eligible desk. An
/// employee left without any seat then gets one non-preferred day: the first
/// of their shuffled non-preferred days with a free eligible desk. Employees
/// with no free eligible desk on any day stay unassigned.
pub fn random_schedule(problem: &ProblemData, rng: &mut RandomNumberGenerator) -> Schedule {
    let mut schedule = Schedule::with_capacity(problem.num_employees() * problem.num_days());
    let mut taken: HashSet<(DayId, DeskId)> = HashSet::new();

    let mut order: Vec<EmployeeId> = problem.employees().collect();
    rng.shuffle(&mut order);

    for &employee in &order {
        let mut days = problem.preferred_days(employee).to_vec();
        rng.shuffle(&mut days);
        for day in days {
            seat(&mut schedule, &mut taken, problem, employee, day, rng);
        }
    }

    for &employee in &order {
        if !schedule.days_of(employee).is_empty() {
            continue;
        }
        let mut days: Vec<DayId> = problem
            .days()
            .filter(|&day| !problem.is_preferred(employee, day))
            .collect();
        rng.shuffle(&mut days);
        for day in days {
            if seat(&mut schedule, &mut taken, problem, employee, day, rng) {
                break;
            }
        }
    }

    schedule
}

/// Seats `employee` on `day` at a random free eligible desk. Returns whether a desk was found.
fn seat(
    schedule: &mut Schedule,
    taken: &mut HashSet<(DayId, DeskId)>,
    problem: &ProblemData,
    employee: EmployeeId,
    day: DayId,
    rng: &mut RandomNumberGenerator,
) -> bool {
    let options: Vec<DeskId> = problem
        .eligible_desks(employee)
        .iter()
        .copied()
        .filter(|&desk| !taken.contains(&(day, desk)))
        .collect();

    match rng.choose(&options) {
        Some(&desk) => {
            schedule.insert(employee, day, desk);
            taken.insert((day, desk));
            true
        }
        None => false,
    }
}
