//! # Schedule
//!
//! A `Schedule` is one candidate solution: a map from `(employee, day)` to the
//! desk the employee sits at that day. Keys are unique. The map remembers
//! insertion order; repair keeps the earliest-inserted occupant of a
//! double-booked desk, so the order is part of the value.
//!
//! Overwriting an existing key keeps its position, removing a key shifts the
//! later entries down, and a new key is always appended.
//!
//! ```rust
//! use hotdesk::problem::{DayId, DeskId, EmployeeId};
//! use hotdesk::schedule::Schedule;
//!
//! let mut schedule = Schedule::new();
//! schedule.insert(EmployeeId(0), DayId(0), DeskId(3));
//! schedule.insert(EmployeeId(1), DayId(0), DeskId(3));
//! assert!(schedule.has_conflicts());
//!
//! schedule.remove(EmployeeId(0), DayId(0));
//! assert_eq!(schedule.len(), 1);
//! assert!(!schedule.has_conflicts());
//! ```

use std::collections::{HashMap, HashSet};

use crate::problem::{DayId, DeskId, EmployeeId};

/// One `(employee, day) -> desk` entry of a schedule.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Assignment {
    pub employee: EmployeeId,
    pub day: DayId,
    pub desk: DeskId,
}

impl Assignment {
    pub fn key(&self) -> (EmployeeId, DayId) {
        (self.employee, self.day)
    }
}

/// An insertion-ordered weekly desk assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    entries: Vec<Assignment>,
    positions: HashMap<(EmployeeId, DayId), usize>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, employee: EmployeeId, day: DayId) -> Option<DeskId> {
        self.positions
            .get(&(employee, day))
            .map(|&pos| self.entries[pos].desk)
    }

    pub fn contains(&self, employee: EmployeeId, day: DayId) -> bool {
        self.positions.contains_key(&(employee, day))
    }

    /// Sets the desk for `(employee, day)`, returning the previous desk.
    ///
    /// An existing key keeps its position; a new key is appended.
    pub fn insert(&mut self, employee: EmployeeId, day: DayId, desk: DeskId) -> Option<DeskId> {
        match self.positions.get(&(employee, day)) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].desk, desk)),
            None => {
                self.positions.insert((employee, day), self.entries.len());
                self.entries.push(Assignment {
                    employee,
                    day,
                    desk,
                });
                None
            }
        }
    }

    /// Removes `(employee, day)`, preserving the order of the remaining entries.
    pub fn remove(&mut self, employee: EmployeeId, day: DayId) -> Option<DeskId> {
        let pos = self.positions.remove(&(employee, day))?;
        let removed = self.entries.remove(pos);
        for entry in &self.entries[pos..] {
            if let Some(slot) = self.positions.get_mut(&entry.key()) {
                *slot -= 1;
            }
        }
        Some(removed.desk)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Assignment> {
        self.entries.iter()
    }

    /// Snapshot of the keys in insertion order.
    pub fn keys(&self) -> Vec<(EmployeeId, DayId)> {
        self.entries.iter().map(Assignment::key).collect()
    }

    /// Desks occupied by anyone on `day`.
    pub fn desks_taken_on(&self, day: DayId) -> HashSet<DeskId> {
        self.entries
            .iter()
            .filter(|a| a.day == day)
            .map(|a| a.desk)
            .collect()
    }

    /// Desks occupied on `day` by employees other than `employee`.
    pub fn desks_taken_by_others(&self, employee: EmployeeId, day: DayId) -> HashSet<DeskId> {
        self.entries
            .iter()
            .filter(|a| a.day == day && a.employee != employee)
            .map(|a| a.desk)
            .collect()
    }

    /// Days on which `employee` has an assignment.
    pub fn days_of(&self, employee: EmployeeId) -> HashSet<DayId> {
        self.entries
            .iter()
            .filter(|a| a.employee == employee)
            .map(|a| a.day)
            .collect()
    }

    /// Whether any desk is held by more than one employee on the same day.
    pub fn has_conflicts(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.entries.len());
        !self.entries.iter().all(|a| seen.insert((a.day, a.desk)))
    }
}

/// A schedule paired with its penalty score (lower is better).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredSchedule {
    pub schedule: Schedule,
    pub score: u64,
}

impl FromIterator<Assignment> for Schedule {
    fn from_iter<I: IntoIterator<Item = Assignment>>(iter: I) -> Self {
        let mut schedule = Schedule::new();
        for a in iter {
            schedule.insert(a.employee, a.day, a.desk);
        }
        schedule
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a Assignment;
    type IntoIter = std::slice::Iter<'a, Assignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
