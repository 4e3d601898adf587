use std::collections::{HashMap, HashSet};

use hotdesk::{
    constraints::{FitnessEvaluator, PenaltyWeights},
    operators::{random_schedule, repair, uniform_crossover, MutationRates, Mutator},
    problem::{DayId, DeskId, EmployeeId, ProblemData, ProblemInput},
    rng::RandomNumberGenerator,
    schedule::Schedule,
};

fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn evaluator(problem: &ProblemData) -> FitnessEvaluator<'_> {
    FitnessEvaluator::standard(problem, &PenaltyWeights::default())
}

/// Eight employees in two groups, two zones, five days.
fn office() -> ProblemData {
    let employees = ["E0", "E1", "E2", "E3", "E4", "E5", "E6", "E7"];
    let mut input = ProblemInput {
        employees: names(&employees),
        desks: names(&["D0", "D1", "D2", "D3", "D4", "D5"]),
        days: names(&["Mon", "Tue", "Wed", "Thu", "Fri"]),
        groups: names(&["Red", "Blue"]),
        zones: names(&["North", "South"]),
        ..Default::default()
    };
    input
        .desks_by_zone
        .insert("North".into(), names(&["D0", "D1", "D2"]));
    input
        .desks_by_zone
        .insert("South".into(), names(&["D3", "D4", "D5"]));
    input
        .group_members
        .insert("Red".into(), names(&["E0", "E1", "E2", "E3"]));
    input
        .group_members
        .insert("Blue".into(), names(&["E4", "E5", "E6", "E7"]));
    let preferences = [
        names(&["Mon", "Tue"]),
        names(&["Tue", "Wed"]),
        names(&["Mon", "Thu"]),
        names(&["Fri"]),
    ];
    for (i, employee) in employees.iter().enumerate() {
        let desks = if i < 4 {
            names(&["D0", "D1", "D2", "D3"])
        } else {
            names(&["D2", "D3", "D4", "D5"])
        };
        input.eligible_desks.insert(employee.to_string(), desks);
        input
            .preferred_days
            .insert(employee.to_string(), preferences[i % 4].clone());
    }
    ProblemData::from_input(input).unwrap()
}

/// A schedule that ignores desk conflicts: every employee sits at a random
/// eligible desk on each preferred day.
fn crowded_schedule(problem: &ProblemData, rng: &mut RandomNumberGenerator) -> Schedule {
    let mut schedule = Schedule::new();
    for employee in problem.employees() {
        for &day in problem.preferred_days(employee) {
            if let Some(&desk) = rng.choose(problem.eligible_desks(employee)) {
                schedule.insert(employee, day, desk);
            }
        }
    }
    schedule
}

#[test]
fn test_two_employees_one_desk() {
    let problem = ProblemData::from_input(ProblemInput {
        employees: names(&["A", "B"]),
        desks: names(&["D1"]),
        days: names(&["Mon"]),
        eligible_desks: HashMap::from([
            ("A".to_string(), names(&["D1"])),
            ("B".to_string(), names(&["D1"])),
        ]),
        preferred_days: HashMap::from([
            ("A".to_string(), names(&["Mon"])),
            ("B".to_string(), names(&["Mon"])),
        ]),
        ..Default::default()
    })
    .unwrap();
    let (a, b) = (EmployeeId(0), EmployeeId(1));
    let (mon, d1) = (DayId(0), DeskId(0));

    let mut schedule = Schedule::new();
    schedule.insert(a, mon, d1);
    schedule.insert(b, mon, d1);
    let evaluator = evaluator(&problem);
    assert!(evaluator.score(&schedule) >= 10_000);

    let mut rng = RandomNumberGenerator::from_seed(1);
    repair(&mut schedule, &problem, &mut rng);

    assert_eq!(schedule.len(), 1);
    assert_eq!(schedule.get(a, mon), Some(d1));
    assert_eq!(schedule.get(b, mon), None);

    let breakdown = evaluator.breakdown(&schedule);
    assert_eq!(breakdown.get("missing_coverage"), Some(5_000));
    assert_eq!(breakdown.get("preferred_days"), Some(200));
    assert_eq!(breakdown.total(), 5_200);
}

#[test]
fn test_group_penalty_matches_hand_computed_presence() {
    let problem = ProblemData::from_input(ProblemInput {
        employees: names(&["X", "Y", "Z"]),
        desks: names(&["D1", "D2", "D3"]),
        days: names(&["Mon", "Tue", "Wed"]),
        groups: names(&["Team"]),
        eligible_desks: HashMap::from([
            ("X".to_string(), names(&["D1"])),
            ("Y".to_string(), names(&["D2"])),
            ("Z".to_string(), names(&["D3"])),
        ]),
        group_members: HashMap::from([("Team".to_string(), names(&["X", "Y", "Z"]))]),
        preferred_days: HashMap::from([
            ("X".to_string(), names(&["Mon"])),
            ("Y".to_string(), names(&["Tue"])),
            ("Z".to_string(), names(&["Wed"])),
        ]),
        ..Default::default()
    })
    .unwrap();
    let evaluator = evaluator(&problem);
    let (x, y, z) = (EmployeeId(0), EmployeeId(1), EmployeeId(2));
    let (mon, tue, wed) = (DayId(0), DayId(1), DayId(2));

    // Nobody overlaps: at most one member present on any day
    let mut apart = Schedule::new();
    apart.insert(x, mon, DeskId(0));
    apart.insert(y, tue, DeskId(1));
    apart.insert(z, wed, DeskId(2));
    assert_eq!(
        evaluator.breakdown(&apart).get("group_co_presence"),
        Some(10_000 * (3 - 1))
    );

    // Y joins X on Monday: two present
    let mut pair = apart.clone();
    pair.insert(y, mon, DeskId(1));
    assert_eq!(
        evaluator.breakdown(&pair).get("group_co_presence"),
        Some(10_000 * (3 - 2))
    );

    // Everyone on Monday
    let mut full = pair.clone();
    full.insert(z, mon, DeskId(2));
    assert_eq!(evaluator.breakdown(&full).get("group_co_presence"), Some(0));
}

#[test]
fn test_construction_falls_back_to_non_preferred_day() {
    let problem = ProblemData::from_input(ProblemInput {
        employees: names(&["Solo"]),
        desks: names(&["D1"]),
        days: names(&["Mon"]),
        eligible_desks: HashMap::from([("Solo".to_string(), names(&["D1"]))]),
        ..Default::default()
    })
    .unwrap();

    let mut rng = RandomNumberGenerator::from_seed(4);
    let schedule = random_schedule(&problem, &mut rng);

    assert_eq!(schedule.get(EmployeeId(0), DayId(0)), Some(DeskId(0)));
    let breakdown = evaluator(&problem).breakdown(&schedule);
    assert_eq!(breakdown.get("missing_coverage"), Some(0));
    assert_eq!(breakdown.total(), 100);
}

#[test]
fn test_perfect_schedule_scores_zero() {
    let problem = ProblemData::from_input(ProblemInput {
        employees: names(&["A", "B"]),
        desks: names(&["D1", "D2"]),
        days: names(&["Mon", "Tue"]),
        groups: names(&["Pair"]),
        zones: names(&["Zone"]),
        desks_by_zone: HashMap::from([("Zone".to_string(), names(&["D1", "D2"]))]),
        eligible_desks: HashMap::from([
            ("A".to_string(), names(&["D1"])),
            ("B".to_string(), names(&["D2"])),
        ]),
        group_members: HashMap::from([("Pair".to_string(), names(&["A", "B"]))]),
        preferred_days: HashMap::from([
            ("A".to_string(), names(&["Mon", "Tue"])),
            ("B".to_string(), names(&["Mon", "Tue"])),
        ]),
    })
    .unwrap();

    let mut schedule = Schedule::new();
    for day in [DayId(0), DayId(1)] {
        schedule.insert(EmployeeId(0), day, DeskId(0));
        schedule.insert(EmployeeId(1), day, DeskId(1));
    }

    let evaluator = evaluator(&problem);
    assert_eq!(evaluator.score(&schedule), 0);
    assert!(evaluator.breakdown(&schedule).entries().iter().all(|&(_, p)| p == 0));
}

#[test]
fn test_repair_is_idempotent() {
    let problem = office();
    for seed in 0..20 {
        let mut rng = RandomNumberGenerator::from_seed(seed);
        let mut schedule = crowded_schedule(&problem, &mut rng);

        repair(&mut schedule, &problem, &mut rng);
        assert!(!schedule.has_conflicts());

        let once = schedule.clone();
        repair(&mut schedule, &problem, &mut rng);
        assert_eq!(schedule, once);
    }
}

#[test]
fn test_crossover_closure() {
    let problem = office();
    for seed in 0..20 {
        let mut rng = RandomNumberGenerator::from_seed(seed);
        let first = random_schedule(&problem, &mut rng);
        let second = random_schedule(&problem, &mut rng);

        let mut child = uniform_crossover(&first, &second, &mut rng);
        let union: HashSet<(EmployeeId, DayId)> =
            first.keys().into_iter().chain(second.keys()).collect();
        assert!(child.keys().iter().all(|key| union.contains(key)));

        repair(&mut child, &problem, &mut rng);
        assert!(!child.has_conflicts());
    }
}

#[test]
fn test_mutation_only_uses_eligible_desks() {
    let problem = office();
    let mutator = Mutator::new(
        0.5,
        MutationRates {
            desk_reroll: 0.4,
            day_move: 0.4,
            delete: 0.2,
        },
        1.0,
    );
    let mut rng = RandomNumberGenerator::from_seed(99);
    let mut schedule = random_schedule(&problem, &mut rng);

    for _ in 0..200 {
        schedule = mutator.mutate(&schedule, &problem, &mut rng);
        for assignment in &schedule {
            assert!(problem.is_eligible(assignment.employee, assignment.desk));
        }
        repair(&mut schedule, &problem, &mut rng);
    }
}
