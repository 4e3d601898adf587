//! Preference and collaboration rules, weighted well below the hard rules.

use super::{Occupancy, PenaltyRule};
use crate::problem::ProblemData;
use crate::schedule::Schedule;

/// Penalizes lone group members: for every `(day, zone)` and every group
/// represented there by exactly one employee.
#[derive(Debug, Clone)]
pub struct ZoneIsolationRule {
    weight: u64,
}

impl ZoneIsolationRule {
    pub fn new(weight: u64) -> Self {
        Self { weight }
    }
}

impl PenaltyRule for ZoneIsolationRule {
    fn name(&self) -> &'static str {
        "zone_isolation"
    }

    fn penalty(&self, _schedule: &Schedule, occupancy: &Occupancy, problem: &ProblemData) -> u64 {
        self.weight * occupancy.isolation_instances(problem) as u64
    }
}

/// Penalizes preferred days left unassigned and assigned days that were not preferred.
#[derive(Debug, Clone)]
pub struct PreferredDayRule {
    unmet_weight: u64,
    non_preferred_weight: u64,
}

impl PreferredDayRule {
    pub fn new(unmet_weight: u64, non_preferred_weight: u64) -> Self {
        Self {
            unmet_weight,
            non_preferred_weight,
        }
    }
}

impl PenaltyRule for PreferredDayRule {
    fn name(&self) -> &'static str {
        "preferred_days"
    }

    fn penalty(&self, _schedule: &Schedule, occupancy: &Occupancy, problem: &ProblemData) -> u64 {
        problem
            .employees()
            .map(|e| {
                let assigned = occupancy.assigned_days(e);
                let unmet = problem
                    .preferred_days(e)
                    .iter()
                    .filter(|&day| !assigned.contains(day))
                    .count();
                let unwanted = assigned
                    .iter()
                    .filter(|&&day| !problem.is_preferred(e, day))
                    .count();
                self.unmet_weight * unmet as u64 + self.non_preferred_weight * unwanted as u64
            })
            .sum()
    }
}

/// Penalizes every distinct desk beyond the first an employee uses during the week.
#[derive(Debug, Clone)]
pub struct DeskConsistencyRule {
    weight: u64,
}

impl DeskConsistencyRule {
    pub fn new(weight: u64) -> Self {
        Self { weight }
    }
}

impl PenaltyRule for DeskConsistencyRule {
    fn name(&self) -> &'static str {
        "desk_consistency"
    }

    fn penalty(&self, _schedule: &Schedule, occupancy: &Occupancy, _problem: &ProblemData) -> u64 {
        occupancy
            .desks_by_employee
            .iter()
            .map(|desks| self.weight * desks.len().saturating_sub(1) as u64)
            .sum()
    }
}
