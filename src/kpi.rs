//! Schedule quality metrics (KPIs).
//!
//! Summarizes a finished desk assignment into descriptive figures for
//! reports. The figures reuse the aggregations of the penalty rules, so a
//! schedule that scores well also reads well here.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Assigned employees | Employees with at least one seat / all employees |
//! | Overbooked desk-days | `(day, desk)` pairs held by more than one employee |
//! | Eligible assignments | Assignments on an allowed desk / all assignments |
//! | Preferred-day compliance | Mean share of each employee's preferred days that were assigned |
//! | Non-preferred days | Mean number of assigned days that were not preferred |
//! | Single-desk employees | Employees using exactly one desk all week |
//! | Isolated assignments | Lone group members in a zone on a day / all assignments |
//! | Full-meeting groups | Groups with every member present on one day |
//! | Utilization | Occupied desk-days / (desks × days), overall and per day |
//!
//! Percentages are on a 0..100 scale. Every ratio is 0 when its denominator is 0.

use crate::constraints::Occupancy;
use crate::problem::ProblemData;
use crate::schedule::Schedule;

/// How close a group came to meeting in full.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeetingStatus {
    /// The group has no members.
    NoMembers,
    /// Every member is present on the best day.
    Complete,
    /// Some, but not all, members share the best day.
    Partial,
    /// No member has any assignment.
    NeverMet,
}

/// Attendance of one group on its best day.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GroupMeeting {
    pub group: String,
    pub members: usize,
    /// Day with the most members present; earliest day on ties.
    pub best_day: Option<String>,
    pub present: usize,
    pub status: MeetingStatus,
}

impl GroupMeeting {
    /// Share of members present on the best day (0..100).
    pub fn attendance_pct(&self) -> f64 {
        percentage(self.present, self.members)
    }
}

/// Desk usage on one day.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct DayUtilization {
    pub day: String,
    pub occupied_desks: usize,
    pub total_desks: usize,
    pub utilization_pct: f64,
}

/// Schedule quality indicators.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleKpi {
    /// Employees with at least one assignment (%).
    pub assigned_employees_pct: f64,
    /// `(day, desk)` pairs with more than one occupant.
    pub overbooked_desk_days: usize,
    /// Assignments on an eligible desk (%).
    pub eligible_assignments_pct: f64,
    /// Mean fraction of preferred days honored, over all employees (%).
    pub preferred_day_compliance_pct: f64,
    /// Mean number of non-preferred days assigned per employee.
    pub avg_non_preferred_days: f64,
    /// Employees sitting at exactly one desk all week (%).
    pub single_desk_employees_pct: f64,
    /// Isolation instances relative to the number of assignments (%).
    pub isolated_assignments_pct: f64,
    /// Per group, in declaration order.
    pub group_meetings: Vec<GroupMeeting>,
    /// Groups meeting in full on some day (%).
    pub full_meeting_groups_pct: f64,
    /// Per day, in week order. Empty without desks or days.
    pub daily_utilization: Vec<DayUtilization>,
    /// Occupied desk-days over all desk-days (%).
    pub global_utilization_pct: f64,
}

impl ScheduleKpi {
    /// Computes KPIs for `schedule`.
    ///
    /// # Arguments
    /// * `schedule` - The schedule to summarize, usually the best one found.
    /// * `problem` - The problem the schedule was built for.
    pub fn calculate(schedule: &Schedule, problem: &ProblemData) -> Self {
        let occupancy = Occupancy::build(schedule, problem);
        let num_employees = problem.num_employees();
        let num_assignments = schedule.len();

        let assigned_employees = problem
            .employees()
            .filter(|&e| occupancy.is_covered(e))
            .count();

        let eligible_assignments = schedule
            .iter()
            .filter(|a| problem.is_eligible(a.employee, a.desk))
            .count();

        let mut compliance_sum = 0.0;
        let mut non_preferred_days = 0usize;
        let mut single_desk = 0usize;
        for employee in problem.employees() {
            let preferred = problem.preferred_days(employee);
            let assigned = occupancy.assigned_days(employee);
            if !preferred.is_empty() {
                let honored = preferred.iter().filter(|&day| assigned.contains(day)).count();
                compliance_sum += honored as f64 / preferred.len() as f64;
            }
            non_preferred_days += assigned
                .iter()
                .filter(|&&day| !problem.is_preferred(employee, day))
                .count();
            if occupancy.desks_by_employee[employee.index()].len() == 1 {
                single_desk += 1;
            }
        }

        let group_meetings: Vec<GroupMeeting> = problem
            .groups()
            .map(|group| {
                let members = problem.group_members(group).len();
                let best = occupancy.best_meeting_day(group, problem);
                let present = best.map_or(0, |(_, count)| count);
                let status = if members == 0 {
                    MeetingStatus::NoMembers
                } else if present == members {
                    MeetingStatus::Complete
                } else if best.is_some() {
                    MeetingStatus::Partial
                } else {
                    MeetingStatus::NeverMet
                };
                GroupMeeting {
                    group: problem.group_name(group).to_string(),
                    members,
                    best_day: best.map(|(day, _)| problem.day_name(day).to_string()),
                    present,
                    status,
                }
            })
            .collect();
        let full_meetings = group_meetings
            .iter()
            .filter(|m| m.status == MeetingStatus::Complete)
            .count();

        let total_desks = problem.num_desks();
        let mut daily_utilization = Vec::new();
        let mut occupied_desk_days = 0usize;
        if total_desks > 0 {
            for day in problem.days() {
                let occupied_desks = schedule.desks_taken_on(day).len();
                occupied_desk_days += occupied_desks;
                daily_utilization.push(DayUtilization {
                    day: problem.day_name(day).to_string(),
                    occupied_desks,
                    total_desks,
                    utilization_pct: percentage(occupied_desks, total_desks),
                });
            }
        }

        Self {
            assigned_employees_pct: percentage(assigned_employees, num_employees),
            overbooked_desk_days: occupancy.overbooked_desk_days(),
            eligible_assignments_pct: percentage(eligible_assignments, num_assignments),
            preferred_day_compliance_pct: if num_employees > 0 {
                compliance_sum / num_employees as f64 * 100.0
            } else {
                0.0
            },
            avg_non_preferred_days: ratio(non_preferred_days, num_employees),
            single_desk_employees_pct: percentage(single_desk, num_employees),
            isolated_assignments_pct: percentage(
                occupancy.isolation_instances(problem),
                num_assignments,
            ),
            group_meetings,
            full_meeting_groups_pct: percentage(full_meetings, problem.num_groups()),
            daily_utilization,
            global_utilization_pct: percentage(
                occupied_desk_days,
                total_desks * problem.num_days(),
            ),
        }
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

fn percentage(numerator: usize, denominator: usize) -> f64 {
    ratio(numerator, denominator) * 100.0
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::problem::{DayId, DeskId, EmployeeId, ProblemInput};

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn problem() -> ProblemData {
        ProblemData::from_input(ProblemInput {
            employees: names(&["A", "B", "C", "D"]),
            desks: names(&["D1", "D2"]),
            days: names(&["Mon", "Tue"]),
            groups: names(&["G1", "G2", "G3"]),
            zones: names(&["Z1"]),
            desks_by_zone: HashMap::from([("Z1".to_string(), names(&["D1", "D2"]))]),
            eligible_desks: HashMap::from([
                ("A".to_string(), names(&["D1"])),
                ("B".to_string(), names(&["D1", "D2"])),
                ("C".to_string(), names(&["D2"])),
            ]),
            group_members: HashMap::from([
                ("G1".to_string(), names(&["A", "B"])),
                ("G2".to_string(), names(&["C", "D"])),
            ]),
            preferred_days: HashMap::from([
                ("A".to_string(), names(&["Mon", "Tue"])),
                ("B".to_string(), names(&["Mon"])),
            ]),
        })
        .unwrap()
    }

    #[test]
    fn test_calculate() {
        let p = problem();
        let (a, b, c) = (EmployeeId(0), EmployeeId(1), EmployeeId(2));
        let (mon, tue) = (DayId(0), DayId(1));
        let (d1, d2) = (DeskId(0), DeskId(1));

        let mut schedule = Schedule::new();
        schedule.insert(a, mon, d1);
        schedule.insert(b, mon, d2);
        schedule.insert(b, tue, d1);
        schedule.insert(c, tue, d1);

        let kpi = ScheduleKpi::calculate(&schedule, &p);

        // A, B, C seated out of four
        assert_eq!(kpi.assigned_employees_pct, 75.0);
        // B and C share D1 on Tuesday
        assert_eq!(kpi.overbooked_desk_days, 1);
        // C may not use D1
        assert_eq!(kpi.eligible_assignments_pct, 75.0);
        // A honors 1/2, B honors 1/1, over four employees
        assert_eq!(kpi.preferred_day_compliance_pct, 1.5 / 4.0 * 100.0);
        // B on Tuesday and C on Tuesday
        assert_eq!(kpi.avg_non_preferred_days, 0.5);
        // A and C use one desk, B uses two
        assert_eq!(kpi.single_desk_employees_pct, 50.0);
        // Monday: G1 has two members. Tuesday: B alone for G1, C alone for G2.
        assert_eq!(kpi.isolated_assignments_pct, 50.0);

        assert_eq!(kpi.group_meetings.len(), 3);
        let g1 = &kpi.group_meetings[0];
        assert_eq!(g1.status, MeetingStatus::Complete);
        assert_eq!(g1.best_day.as_deref(), Some("Mon"));
        assert_eq!(g1.attendance_pct(), 100.0);
        let g2 = &kpi.group_meetings[1];
        assert_eq!(g2.status, MeetingStatus::Partial);
        assert_eq!(g2.present, 1);
        assert_eq!(kpi.group_meetings[2].status, MeetingStatus::NoMembers);
        assert!((kpi.full_meeting_groups_pct - 100.0 / 3.0).abs() < 1e-9);

        assert_eq!(kpi.daily_utilization.len(), 2);
        assert_eq!(kpi.daily_utilization[0].occupied_desks, 2);
        assert_eq!(kpi.daily_utilization[0].utilization_pct, 100.0);
        assert_eq!(kpi.daily_utilization[1].occupied_desks, 1);
        assert_eq!(kpi.global_utilization_pct, 75.0);
    }

    #[test]
    fn test_never_met() {
        let p = problem();
        let kpi = ScheduleKpi::calculate(&Schedule::new(), &p);
        assert_eq!(kpi.group_meetings[0].status, MeetingStatus::NeverMet);
        assert_eq!(kpi.group_meetings[0].best_day, None);
        assert_eq!(kpi.eligible_assignments_pct, 0.0);
        assert_eq!(kpi.global_utilization_pct, 0.0);
    }

    #[test]
    fn test_empty_problem_is_all_zero() {
        let p = ProblemData::from_input(ProblemInput::default()).unwrap();
        let kpi = ScheduleKpi::calculate(&Schedule::new(), &p);
        assert_eq!(kpi.assigned_employees_pct, 0.0);
        assert_eq!(kpi.preferred_day_compliance_pct, 0.0);
        assert_eq!(kpi.avg_non_preferred_days, 0.0);
        assert_eq!(kpi.full_meeting_groups_pct, 0.0);
        assert!(kpi.group_meetings.is_empty());
        assert!(kpi.daily_utilization.is_empty());
        assert_eq!(kpi.global_utilization_pct, 0.0);
    }
}
