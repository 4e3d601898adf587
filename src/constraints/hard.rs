//! Rules weighted as hard constraints: feasibility of the seating itself and
//! full attendance of every group on one common day.

use super::{Occupancy, PenaltyRule};
use crate::problem::ProblemData;
use crate::schedule::Schedule;

/// Penalizes every extra occupant of a desk on a day: `weight * (k - 1)`.
#[derive(Debug, Clone)]
pub struct DoubleBookingRule {
    weight: u64,
}

impl DoubleBookingRule {
    pub fn new(weight: u64) -> Self {
        Self { weight }
    }
}

impl PenaltyRule for DoubleBookingRule {
    fn name(&self) -> &'static str {
        "double_booking"
    }

    fn penalty(&self, _schedule: &Schedule, occupancy: &Occupancy, _problem: &ProblemData) -> u64 {
        occupancy
            .by_desk_day
            .values()
            .map(|occupants| self.weight * occupants.len().saturating_sub(1) as u64)
            .sum()
    }
}

/// Penalizes every assignment on a desk outside the employee's eligible set.
#[derive(Debug, Clone)]
pub struct IneligibleDeskRule {
    weight: u64,
}

impl IneligibleDeskRule {
    pub fn new(weight: u64) -> Self {
        Self { weight }
    }
}

impl PenaltyRule for IneligibleDeskRule {
    fn name(&self) -> &'static str {
        "ineligible_desk"
    }

    fn penalty(&self, schedule: &Schedule, _occupancy: &Occupancy, problem: &ProblemData) -> u64 {
        let violations = schedule
            .iter()
            .filter(|a| !problem.is_eligible(a.employee, a.desk))
            .count();
        self.weight * violations as u64
    }
}

/// Penalizes every employee without a single assigned day.
#[derive(Debug, Clone)]
pub struct MissingCoverageRule {
    weight: u64,
}

impl MissingCoverageRule {
    pub fn new(weight: u64) -> Self {
        Self { weight }
    }
}

impl PenaltyRule for MissingCoverageRule {
    fn name(&self) -> &'static str {
        "missing_coverage"
    }

    fn penalty(&self, _schedule: &Schedule, occupancy: &Occupancy, problem: &ProblemData) -> u64 {
        let uncovered = problem
            .employees()
            .filter(|&e| !occupancy.is_covered(e))
            .count();
        self.weight * uncovered as u64
    }
}

/// Penalizes, per group, the members missing from the group's best-attended day.
#[derive(Debug, Clone)]
pub struct GroupCoPresenceRule {
    weight: u64,
}

impl GroupCoPresenceRule {
    pub fn new(weight: u64) -> Self {
        Self { weight }
    }
}

impl PenaltyRule for GroupCoPresenceRule {
    fn name(&self) -> &'static str {
        "group_co_presence"
    }

    fn penalty(&self, _schedule: &Schedule, occupancy: &Occupancy, problem: &ProblemData) -> u64 {
        problem
            .groups()
            .map(|g| {
                let size = problem.group_members(g).len();
                let present = occupancy
                    .best_meeting_day(g, problem)
                    .map_or(0, |(_, count)| count);
                self.weight * size.saturating_sub(present) as u64
            })
            .sum()
    }
}
