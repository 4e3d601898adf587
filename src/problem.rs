//! # Problem Data
//!
//! `ProblemInput` is the raw record handed over by an external loader: plain
//! string identifiers and the maps between them. `ProblemData` is the immutable
//! view the search reads from. It is built once with [`ProblemData::from_input`],
//! which interns every identifier into a dense typed id and derives the inverse
//! lookups (desk -> zone, employee -> group).
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use hotdesk::problem::{ProblemData, ProblemInput};
//!
//! let input = ProblemInput {
//!     employees: vec!["ana".into(), "bo".into()],
//!     desks: vec!["D1".into(), "D2".into()],
//!     days: vec!["Mon".into(), "Tue".into()],
//!     groups: vec!["g1".into()],
//!     zones: vec!["north".into()],
//!     desks_by_zone: HashMap::from([("north".into(), vec!["D1".into(), "D2".into()])]),
//!     eligible_desks: HashMap::from([
//!         ("ana".into(), vec!["D1".into()]),
//!         ("bo".into(), vec!["D1".into(), "D2".into()]),
//!     ]),
//!     group_members: HashMap::from([("g1".into(), vec!["ana".into(), "bo".into()])]),
//!     preferred_days: HashMap::from([("ana".into(), vec!["Mon".into()])]),
//! };
//!
//! let problem = ProblemData::from_input(input).unwrap();
//! let ana = problem.employee_id("ana").unwrap();
//! assert_eq!(problem.eligible_desks(ana).len(), 1);
//! assert_eq!(problem.group_of_employee(ana), problem.group_id("g1"));
//! ```

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::error::{Result, ScheduleError};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub usize);

        impl $name {
            /// Position of the identifier in its declaration list.
            pub fn index(self) -> usize {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}#{}", stringify!($name), self.0)
            }
        }
    };
}

define_id!(
    /// Dense id of an employee.
    EmployeeId
);
define_id!(
    /// Dense id of a desk.
    DeskId
);
define_id!(
    /// Dense id of a day; ordered as the work week was declared.
    DayId
);
define_id!(
    /// Dense id of a collaboration group.
    GroupId
);
define_id!(
    /// Dense id of an office zone.
    ZoneId
);

/// The raw problem record, as read from the input file by an external loader.
///
/// With the `serde` feature the field names match the input data file
/// (`Employees`, `Desks_E`, `Days_E`, ...). Missing fields default to empty.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProblemInput {
    #[cfg_attr(feature = "serde", serde(rename = "Employees", default))]
    pub employees: Vec<String>,
    #[cfg_attr(feature = "serde", serde(rename = "Desks", default))]
    pub desks: Vec<String>,
    #[cfg_attr(feature = "serde", serde(rename = "Days", default))]
    pub days: Vec<String>,
    #[cfg_attr(feature = "serde", serde(rename = "Groups", default))]
    pub groups: Vec<String>,
    #[cfg_attr(feature = "serde", serde(rename = "Zones", default))]
    pub zones: Vec<String>,
    /// zone -> desks in that zone
    #[cfg_attr(feature = "serde", serde(rename = "Desks_Z", default))]
    pub desks_by_zone: HashMap<String, Vec<String>>,
    /// employee -> desks the employee may use
    #[cfg_attr(feature = "serde", serde(rename = "Desks_E", default))]
    pub eligible_desks: HashMap<String, Vec<String>>,
    /// group -> members
    #[cfg_attr(feature = "serde", serde(rename = "Employees_G", default))]
    pub group_members: HashMap<String, Vec<String>>,
    /// employee -> preferred days
    #[cfg_attr(feature = "serde", serde(rename = "Days_E", default))]
    pub preferred_days: HashMap<String, Vec<String>>,
}

/// Interned names of one identifier kind.
#[derive(Debug, Clone, Default)]
struct Catalog {
    kind: &'static str,
    names: Vec<String>,
    lookup: HashMap<String, usize>,
}

impl Catalog {
    fn build(kind: &'static str, names: Vec<String>) -> Result<Self> {
        let mut lookup = HashMap::with_capacity(names.len());
        for (idx, name) in names.iter().enumerate() {
            if lookup.insert(name.clone(), idx).is_some() {
                return Err(ScheduleError::DuplicateIdentifier {
                    kind,
                    name: name.clone(),
                });
            }
        }
        Ok(Self {
            kind,
            names,
            lookup,
        })
    }

    fn resolve(&self, name: &str) -> Result<usize> {
        self.lookup
            .get(name)
            .copied()
            .ok_or_else(|| ScheduleError::UnknownIdentifier {
                kind: self.kind,
                name: name.to_string(),
            })
    }

    /// Resolves a list of names, dropping repeats while keeping first-seen order.
    fn resolve_all(&self, names: &[String]) -> Result<Vec<usize>> {
        let mut seen = HashSet::with_capacity(names.len());
        let mut resolved = Vec::with_capacity(names.len());
        for name in names {
            let idx = self.resolve(name)?;
            if seen.insert(idx) {
                resolved.push(idx);
            }
        }
        Ok(resolved)
    }

    fn len(&self) -> usize {
        self.names.len()
    }
}

/// Immutable lookup tables for one desk-assignment problem.
///
/// All per-entity tables are indexed by the dense id, so lookups are plain
/// vector indexing. Nothing in the search mutates this value.
#[derive(Debug, Clone, Default)]
pub struct ProblemData {
    employees: Catalog,
    desks: Catalog,
    days: Catalog,
    groups: Catalog,
    zones: Catalog,
    eligible_desks: Vec<Vec<DeskId>>,
    eligible_lookup: Vec<HashSet<DeskId>>,
    preferred_days: Vec<Vec<DayId>>,
    preferred_lookup: Vec<HashSet<DayId>>,
    group_members: Vec<Vec<EmployeeId>>,
    group_of_employee: Vec<Option<GroupId>>,
    zone_of_desk: Vec<Option<ZoneId>>,
}

impl ProblemData {
    /// Builds the view from a raw record.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::DuplicateIdentifier`] if a declaration list
    /// repeats a name or a desk is listed under more than one zone, and [`ScheduleError::UnknownIdentifier`] if any map
    /// refers to an undeclared employee, desk, day, group or zone.
    pub fn from_input(input: ProblemInput) -> Result<Self> {
        let employees = Catalog::build("employee", input.employees)?;
        let desks = Catalog::build("desk", input.desks)?;
        let days = Catalog::build("day", input.days)?;
        let groups = Catalog::build("group", input.groups)?;
        let zones = Catalog::build("zone", input.zones)?;

        let mut eligible_desks = vec![Vec::new(); employees.len()];
        for (employee, desk_names) in &input.eligible_desks {
            let e = employees.resolve(employee)?;
            eligible_desks[e] = desks.resolve_all(desk_names)?.into_iter().map(DeskId).collect();
        }

        let mut preferred_days = vec![Vec::new(); employees.len()];
        for (employee, day_names) in &input.preferred_days {
            let e = employees.resolve(employee)?;
            let mut resolved: Vec<DayId> =
                days.resolve_all(day_names)?.into_iter().map(DayId).collect();
            resolved.sort();
            preferred_days[e] = resolved;
        }

        let mut zone_of_desk = vec![None; desks.len()];
        for (zone, desk_names) in &input.desks_by_zone {
            let z = ZoneId(zones.resolve(zone)?);
            for d in desks.resolve_all(desk_names)? {
                if zone_of_desk[d].replace(z).is_some() {
                    return Err(ScheduleError::DuplicateIdentifier {
                        kind: "zone membership",
                        name: desks.names[d].clone(),
                    });
                }
            }
        }

        // Groups are walked in declaration order so an employee listed in
        // several groups deterministically ends up in the last one.
        let mut group_members = vec![Vec::new(); groups.len()];
        for (group, member_names) in &input.group_members {
            let g = groups.resolve(group)?;
            group_members[g] = employees
                .resolve_all(member_names)?
                .into_iter()
                .map(EmployeeId)
                .collect();
        }
        let mut group_of_employee = vec![None; employees.len()];
        for (g, members) in group_members.iter().enumerate() {
            for member in members {
                group_of_employee[member.index()] = Some(GroupId(g));
            }
        }

        let eligible_lookup = eligible_desks
            .iter()
            .map(|desks| desks.iter().copied().collect())
            .collect();
        let preferred_lookup = preferred_days
            .iter()
            .map(|days| days.iter().copied().collect())
            .collect();

        Ok(Self {
            employees,
            desks,
            days,
            groups,
            zones,
            eligible_desks,
            eligible_lookup,
            preferred_days,
            preferred_lookup,
            group_members,
            group_of_employee,
            zone_of_desk,
        })
    }

    pub fn employees(&self) -> impl ExactSizeIterator<Item = EmployeeId> + Clone {
        (0..self.employees.len()).map(EmployeeId)
    }

    pub fn desks(&self) -> impl ExactSizeIterator<Item = DeskId> + Clone {
        (0..self.desks.len()).map(DeskId)
    }

    /// Days in week order.
    pub fn days(&self) -> impl ExactSizeIterator<Item = DayId> + Clone {
        (0..self.days.len()).map(DayId)
    }

    pub fn groups(&self) -> impl ExactSizeIterator<Item = GroupId> + Clone {
        (0..self.groups.len()).map(GroupId)
    }

    pub fn zones(&self) -> impl ExactSizeIterator<Item = ZoneId> + Clone {
        (0..self.zones.len()).map(ZoneId)
    }

    pub fn num_employees(&self) -> usize {
        self.employees.len()
    }

    pub fn num_desks(&self) -> usize {
        self.desks.len()
    }

    pub fn num_days(&self) -> usize {
        self.days.len()
    }

    pub fn num_groups(&self) -> usize {
        self.groups.len()
    }

    /// Desks the employee may use, in declaration order.
    pub fn eligible_desks(&self, employee: EmployeeId) -> &[DeskId] {
        &self.eligible_desks[employee.index()]
    }

    pub fn is_eligible(&self, employee: EmployeeId, desk: DeskId) -> bool {
        self.eligible_lookup[employee.index()].contains(&desk)
    }

    /// Preferred days of the employee, in week order.
    pub fn preferred_days(&self, employee: EmployeeId) -> &[DayId] {
        &self.preferred_days[employee.index()]
    }

    pub fn is_preferred(&self, employee: EmployeeId, day: DayId) -> bool {
        self.preferred_lookup[employee.index()].contains(&day)
    }

    pub fn group_members(&self, group: GroupId) -> &[EmployeeId] {
        &self.group_members[group.index()]
    }

    pub fn group_of_employee(&self, employee: EmployeeId) -> Option<GroupId> {
        self.group_of_employee[employee.index()]
    }

    pub fn zone_of_desk(&self, desk: DeskId) -> Option<ZoneId> {
        self.zone_of_desk[desk.index()]
    }

    pub fn employee_name(&self, employee: EmployeeId) -> &str {
        &self.employees.names[employee.index()]
    }

    pub fn desk_name(&self, desk: DeskId) -> &str {
        &self.desks.names[desk.index()]
    }

    pub fn day_name(&self, day: DayId) -> &str {
        &self.days.names[day.index()]
    }

    pub fn group_name(&self, group: GroupId) -> &str {
        &self.groups.names[group.index()]
    }

    pub fn zone_name(&self, zone: ZoneId) -> &str {
        &self.zones.names[zone.index()]
    }

    pub fn employee_id(&self, name: &str) -> Option<EmployeeId> {
        self.employees.lookup.get(name).copied().map(EmployeeId)
    }

    pub fn desk_id(&self, name: &str) -> Option<DeskId> {
        self.desks.lookup.get(name).copied().map(DeskId)
    }

    pub fn day_id(&self, name: &str) -> Option<DayId> {
        self.days.lookup.get(name).copied().map(DayId)
    }

    pub fn group_id(&self, name: &str) -> Option<GroupId> {
        self.groups.lookup.get(name).copied().map(GroupId)
    }

    pub fn zone_id(&self, name: &str) -> Option<ZoneId> {
        self.zones.lookup.get(name).copied().map(ZoneId)
    }
}
