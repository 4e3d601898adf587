use std::collections::HashMap;

use hotdesk::problem::{ProblemData, ProblemInput};

/// An office of `employees` people in groups of eight, with one desk per
/// two employees spread over four zones and a five-day week.
pub fn office(employees: usize) -> ProblemData {
    let days: Vec<String> = ["Mon", "Tue", "Wed", "Thu", "Fri"]
        .iter()
        .map(|d| d.to_string())
        .collect();
    let employee_names: Vec<String> = (0..employees).map(|i| format!("E{}", i)).collect();
    let desk_names: Vec<String> = (0..(employees / 2).max(1)).map(|i| format!("D{}", i)).collect();
    let zone_names: Vec<String> = (0..4).map(|i| format!("Z{}", i)).collect();
    let group_names: Vec<String> = (0..employees.div_ceil(8)).map(|i| format!("G{}", i)).collect();

    let mut desks_by_zone: HashMap<String, Vec<String>> = HashMap::new();
    for (i, desk) in desk_names.iter().enumerate() {
        desks_by_zone
            .entry(zone_names[i % zone_names.len()].clone())
            .or_default()
            .push(desk.clone());
    }

    let mut eligible_desks = HashMap::new();
    let mut preferred_days = HashMap::new();
    let mut group_members: HashMap<String, Vec<String>> = HashMap::new();
    for (i, employee) in employee_names.iter().enumerate() {
        let zone = &zone_names[(i / 8) % zone_names.len()];
        eligible_desks.insert(employee.clone(), desks_by_zone[zone].clone());
        preferred_days.insert(
            employee.clone(),
            vec![days[i % days.len()].clone(), days[(i + 2) % days.len()].clone()],
        );
        group_members
            .entry(group_names[i / 8].clone())
            .or_default()
            .push(employee.clone());
    }

    ProblemData::from_input(ProblemInput {
        employees: employee_names,
        desks: desk_names,
        days,
        groups: group_names,
        zones: zone_names,
        desks_by_zone,
        eligible_desks,
        group_members,
        preferred_days,
    })
    .unwrap()
}
