//! Aggregated views of a schedule shared by the penalty rules and the KPI summary.

use std::collections::{HashMap, HashSet};

use crate::problem::{DayId, DeskId, EmployeeId, GroupId, ProblemData, ZoneId};
use crate::schedule::Schedule;

/// Who sits where, indexed several ways. Built once per evaluation.
#[derive(Debug, Clone, Default)]
pub struct Occupancy {
    /// Occupants of every used `(day, desk)`, in schedule order.
    pub by_desk_day: HashMap<(DayId, DeskId), Vec<EmployeeId>>,
    /// Occupants of every `(day, zone)`; desks without a zone are not counted.
    pub by_zone_day: HashMap<(DayId, ZoneId), Vec<EmployeeId>>,
    /// Assigned days per employee, indexed by employee id.
    pub days_by_employee: Vec<HashSet<DayId>>,
    /// Distinct desks used across the week per employee.
    pub desks_by_employee: Vec<HashSet<DeskId>>,
}

impl Occupancy {
    pub fn build(schedule: &Schedule, problem: &ProblemData) -> Self {
        let mut occupancy = Self {
            by_desk_day: HashMap::with_capacity(schedule.len()),
            by_zone_day: HashMap::new(),
            days_by_employee: vec![HashSet::new(); problem.num_employees()],
            desks_by_employee: vec![HashSet::new(); problem.num_employees()],
        };

        for a in schedule {
            occupancy
                .by_desk_day
                .entry((a.day, a.desk))
                .or_default()
                .push(a.employee);
            if let Some(zone) = problem.zone_of_desk(a.desk) {
                occupancy
                    .by_zone_day
                    .entry((a.day, zone))
                    .or_default()
                    .push(a.employee);
            }
            occupancy.days_by_employee[a.employee.index()].insert(a.day);
            occupancy.desks_by_employee[a.employee.index()].insert(a.desk);
        }

        occupancy
    }

    pub fn assigned_days(&self, employee: EmployeeId) -> &HashSet<DayId> {
        &self.days_by_employee[employee.index()]
    }

    pub fn is_covered(&self, employee: EmployeeId) -> bool {
        !self.days_by_employee[employee.index()].is_empty()
    }

    /// Number of `(day, desk)` pairs held by more than one employee.
    pub fn overbooked_desk_days(&self) -> usize {
        self.by_desk_day.values().filter(|v| v.len() > 1).count()
    }

    /// Lone group members: for every `(day, zone)`, each group represented
    /// there by exactly one employee counts once.
    pub fn isolation_instances(&self, problem: &ProblemData) -> usize {
        self.by_zone_day
            .values()
            .map(|occupants| {
                let mut per_group: HashMap<GroupId, usize> = HashMap::new();
                for &e in occupants {
                    if let Some(g) = problem.group_of_employee(e) {
                        *per_group.entry(g).or_default() += 1;
                    }
                }
                per_group.values().filter(|&&count| count == 1).count()
            })
            .sum()
    }

    /// The day most members of `group` are present, with that head count.
    ///
    /// Ties go to the earliest day of the week. `None` when no member has any
    /// assignment.
    pub fn best_meeting_day(&self, group: GroupId, problem: &ProblemData) -> Option<(DayId, usize)> {
        let mut present = vec![0usize; problem.num_days()];
        for &member in problem.group_members(group) {
            for day in self.assigned_days(member) {
                present[day.index()] += 1;
            }
        }
        present
            .into_iter()
            .enumerate()
            .filter(|&(_, count)| count > 0)
            .fold(None, |best: Option<(DayId, usize)>, (idx, count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((DayId(idx), count)),
            })
    }
}
