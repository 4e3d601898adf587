use std::collections::HashMap;

use tracing::trace;

use crate::problem::{DayId, DeskId, EmployeeId, ProblemData};
use crate::rng::RandomNumberGenerator;
use crate::schedule::Schedule;

/// Removes desk double-bookings from `schedule` in place.
///
/// For every `(day, desk)` held by several employees the earliest entry in
/// schedule order keeps the desk. Every other occupant loses that day's seat
/// and is moved to a random eligible desk still free that day; when none is
/// free the employee simply goes without a seat that day.
///
/// A schedule without conflicts is left untouched and no randomness is drawn,
/// so repairing twice is the same as repairing once.
pub fn repair(schedule: &mut Schedule, problem: &ProblemData, rng: &mut RandomNumberGenerator) {
    if !schedule.has_conflicts() {
        return;
    }

    // Occupants per (day, desk), in order of first appearance
    let mut slots: Vec<((DayId, DeskId), Vec<EmployeeId>)> = Vec::new();
    let mut slot_index: HashMap<(DayId, DeskId), usize> = HashMap::new();
    for a in schedule.iter() {
        let idx = *slot_index.entry((a.day, a.desk)).or_insert_with(|| {
            slots.push(((a.day, a.desk), Vec::new()));
            slots.len() - 1
        });
        slots[idx].1.push(a.employee);
    }

    for ((day, desk), occupants) in slots {
        for &employee in occupants.iter().skip(1) {
            schedule.remove(employee, day);

            let taken = schedule.desks_taken_on(day);
            let options: Vec<DeskId> = problem
                .eligible_desks(employee)
                .iter()
                .copied()
                .filter(|d| !taken.contains(d))
                .collect();

            match rng.choose(&options) {
                Some(&new_desk) => {
                    schedule.insert(employee, day, new_desk);
                }
                None => trace!(
                    employee = employee.index(),
                    day = day.index(),
                    desk = desk.index(),
                    "no free eligible desk, dropping assignment"
                ),
            }
        }
    }
}
