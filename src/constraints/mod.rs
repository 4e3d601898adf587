//! # Constraints Module
//!
//! Fitness of a schedule is a weighted penalty sum: zero is a perfect schedule,
//! lower is better. Each constraint class is an independent [`PenaltyRule`];
//! the [`FitnessEvaluator`] runs an ordered list of rules and adds up what they
//! report.
//!
//! The weights are not normalized. Hard rules (double booking,
//! ineligible desks, group co-presence) weigh 10000 and missing coverage 5000,
//! while soft rules weigh 50 to 500, so a single hard violation outranks a
//! pile of soft ones.
//!
//! ## Key Components
//!
//! - `PenaltyRule` trait: one constraint class, scored against a schedule
//! - `PenaltyWeights`: the tunable weight of every rule
//! - `FitnessEvaluator`: the ordered rule list, also usable as a `Challenge`
//! - `Occupancy`: the aggregation all rules read from, built once per score
//!
//! ## Basic Usage
//!
//! ```rust
//! use hotdesk::constraints::{FitnessEvaluator, PenaltyWeights};
//! use hotdesk::problem::{ProblemData, ProblemInput};
//! use hotdesk::schedule::Schedule;
//!
//! let problem = ProblemData::from_input(ProblemInput {
//!     employees: vec!["A".into()],
//!     ..Default::default()
//! })
//! .unwrap();
//!
//! let evaluator = FitnessEvaluator::standard(&problem, &PenaltyWeights::default());
//! // Nobody is seated: one missing-coverage penalty
//! assert_eq!(evaluator.score(&Schedule::new()), 5000);
//! ```

use std::fmt::{self, Debug, Display};
use std::sync::Arc;

use crate::problem::ProblemData;
use crate::schedule::Schedule;

pub mod hard;
pub mod occupancy;
pub mod soft;

pub use hard::{DoubleBookingRule, GroupCoPresenceRule, IneligibleDeskRule, MissingCoverageRule};
pub use occupancy::Occupancy;
pub use soft::{DeskConsistencyRule, PreferredDayRule, ZoneIsolationRule};

/// One class of constraint, scored as a non-negative penalty.
///
/// Rules are pure: the same schedule and problem always give the same penalty.
pub trait PenaltyRule: Debug + Send + Sync {
    /// A short stable name, used in breakdowns and logs.
    fn name(&self) -> &'static str;

    /// Penalty of `schedule`. `occupancy` is the aggregation of the same schedule.
    fn penalty(&self, schedule: &Schedule, occupancy: &Occupancy, problem: &ProblemData) -> u64;
}

/// Weights of the penalty rules.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PenaltyWeights {
    /// Per extra occupant of a desk on a day.
    pub double_booking: u64,
    /// Per assignment on a desk the employee may not use.
    pub ineligible_desk: u64,
    /// Per employee with no assignment at all.
    pub missing_coverage: u64,
    /// Per group member absent from the group's best day.
    pub group_co_presence: u64,
    /// Per lone group member in a zone on a day.
    pub zone_isolation: u64,
    /// Per preferred day not assigned.
    pub unmet_preferred_day: u64,
    /// Per assigned day that was not preferred.
    pub non_preferred_day: u64,
    /// Per distinct desk beyond the first used in the week.
    pub desk_inconsistency: u64,
}

impl Default for PenaltyWeights {
    fn default() -> Self {
        Self {
            double_booking: 10_000,
            ineligible_desk: 10_000,
            missing_coverage: 5_000,
            group_co_presence: 10_000,
            zone_isolation: 500,
            unmet_preferred_day: 200,
            non_preferred_day: 100,
            desk_inconsistency: 50,
        }
    }
}

/// Penalty contributed by every rule, in evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PenaltyBreakdown {
    entries: Vec<(&'static str, u64)>,
}

impl PenaltyBreakdown {
    pub fn entries(&self) -> &[(&'static str, u64)] {
        &self.entries
    }

    /// Penalty of the named rule, if it was evaluated.
    pub fn get(&self, name: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(rule, _)| *rule == name)
            .map(|&(_, penalty)| penalty)
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|&(_, penalty)| penalty).sum()
    }
}

impl Display for PenaltyBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, penalty) in &self.entries {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", name, penalty)?;
            first = false;
        }
        Ok(())
    }
}

/// Scores schedules of one problem against an ordered list of rules.
#[derive(Debug, Clone)]
pub struct FitnessEvaluator<'a> {
    problem: &'a ProblemData,
    rules: Vec<Arc<dyn PenaltyRule>>,
}

impl<'a> FitnessEvaluator<'a> {
    /// Creates an evaluator without any rule; every schedule scores 0.
    pub fn new(problem: &'a ProblemData) -> Self {
        Self {
            problem,
            rules: Vec::new(),
        }
    }

    /// Creates an evaluator with the seven standard rules.
    pub fn standard(problem: &'a ProblemData, weights: &PenaltyWeights) -> Self {
        Self::new(problem)
            .with_rule(DoubleBookingRule::new(weights.double_booking))
            .with_rule(IneligibleDeskRule::new(weights.ineligible_desk))
            .with_rule(MissingCoverageRule::new(weights.missing_coverage))
            .with_rule(GroupCoPresenceRule::new(weights.group_co_presence))
            .with_rule(ZoneIsolationRule::new(weights.zone_isolation))
            .with_rule(PreferredDayRule::new(
                weights.unmet_preferred_day,
                weights.non_preferred_day,
            ))
            .with_rule(DeskConsistencyRule::new(weights.desk_inconsistency))
    }

    /// Appends a rule.
    pub fn with_rule<R>(mut self, rule: R) -> Self
    where
        R: PenaltyRule + 'static,
    {
        self.rules.push(Arc::new(rule));
        self
    }

    pub fn problem(&self) -> &'a ProblemData {
        self.problem
    }

    /// Total penalty of `schedule`.
    pub fn score(&self, schedule: &Schedule) -> u64 {
        let occupancy = Occupancy::build(schedule, self.problem);
        self.rules
            .iter()
            .map(|rule| rule.penalty(schedule, &occupancy, self.problem))
            .sum()
    }

    /// Penalty of `schedule` per rule.
    pub fn breakdown(&self, schedule: &Schedule) -> PenaltyBreakdown {
        let occupancy = Occupancy::build(schedule, self.problem);
        PenaltyBreakdown {
            entries: self
                .rules
                .iter()
                .map(|rule| (rule.name(), rule.penalty(schedule, &occupancy, self.problem)))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
