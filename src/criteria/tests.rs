use super::*;
use crate::population::ArgosPopulation;
use crate::xml::AttrChange;

fn criteria(s: &str) -> BatchCriteria {
    build(s, parse(s), &ArgosPopulation)
}

#[test]
fn parse_recognizes_entities_with_population() {
    let intent = parse("oracle.entities.Z64");
    assert_eq!(intent.category, Category::Entities);
    assert_eq!(intent.name, "entities_oracle");
    assert_eq!(intent.population, Some(64));
}

#[test]
fn parse_recognizes_tasking() {
    let intent = parse("oracle.tasking");
    assert_eq!(intent.category, Category::Tasking);
    assert_eq!(intent.name, "tasking_oracle");
    assert_eq!(intent.population, None);
}

#[test]
fn parse_without_population_suffix() {
    let intent = parse("oracle.entities");
    assert_eq!(intent.population, None);
}

#[test]
fn parse_unrecognized_category_is_not_an_error() {
    let intent = parse("oracle.Z32");
    assert_eq!(intent.category, Category::Unrecognized);
    assert_eq!(intent.name, "");
    assert_eq!(intent.population, Some(32));
}

#[test]
fn parse_malformed_suffix_treated_as_absent() {
    assert_eq!(parse("oracle.entities.Z").population, None);
    assert_eq!(parse("oracle.entities.Zabc").population, None);
}

#[test]
fn expansion_is_full_factorial_over_flags() {
    let bc = criteria("oracle.entities");
    let plan = bc.expansion().unwrap();

    // 2 flags -> 2^2 experiments, all flag tuples distinct
    assert_eq!(plan.len(), 4);
    for i in 0..plan.len() {
        for j in i + 1..plan.len() {
            assert_ne!(plan[i], plan[j]);
        }
    }

    // lexicographic enumeration, false before true, first flag slowest
    let path = ".//oracle_manager/entities_oracle";
    assert!(plan[0].contains(&AttrChange::new(path, "caches", "false")));
    assert!(plan[0].contains(&AttrChange::new(path, "blocks", "false")));
    assert!(plan[1].contains(&AttrChange::new(path, "caches", "false")));
    assert!(plan[1].contains(&AttrChange::new(path, "blocks", "true")));
    assert!(plan[2].contains(&AttrChange::new(path, "caches", "true")));
    assert!(plan[2].contains(&AttrChange::new(path, "blocks", "false")));
    assert!(plan[3].contains(&AttrChange::new(path, "caches", "true")));
    assert!(plan[3].contains(&AttrChange::new(path, "blocks", "true")));
}

#[test]
fn expansion_is_deterministic() {
    let a = criteria("oracle.entities.Z64");
    let b = criteria("oracle.entities.Z64");
    assert_eq!(a.expansion().unwrap(), b.expansion().unwrap());
}

#[test]
fn expansion_is_cached_and_idempotent() {
    let bc = criteria("oracle.entities");
    let first = bc.expansion().unwrap() as *const ExpansionPlan;
    let second = bc.expansion().unwrap() as *const ExpansionPlan;
    assert_eq!(first, second);
}

#[test]
fn population_override_is_broadcast_into_every_entry() {
    let bc = criteria("oracle.entities.Z64");
    let plan = bc.expansion().unwrap();
    assert_eq!(plan.len(), 4);

    let pop_edit = AttrChange::new(".//arena/distribute/entity", "quantity", "64");
    for changes in plan {
        // 2 flag edits + 1 population edit
        assert_eq!(changes.len(), 3);
        assert!(changes.contains(&pop_edit));
    }
}

#[test]
fn no_population_means_two_edits_per_entry() {
    let bc = criteria("oracle.entities");
    for changes in bc.expansion().unwrap() {
        assert_eq!(changes.len(), 2);
        assert!(!changes.iter().any(|c| c.path.contains("distribute")));
    }
}

#[test]
fn unrecognized_category_degenerates_to_single_noop_experiment() {
    let bc = criteria("oracle.Z16");
    let plan = bc.expansion().unwrap();
    assert_eq!(plan.len(), 2usize.pow(0));
    // population still applies to the lone experiment
    assert_eq!(plan[0].len(), 1);
}

#[test]
fn experiment_names_follow_plan_order() {
    let bc = criteria("oracle.entities");
    assert_eq!(
        bc.experiment_names().unwrap(),
        vec!["exp0", "exp1", "exp2", "exp3"]
    );
}

#[test]
fn tick_positions_are_unit_steps_from_zero() {
    let bc = criteria("oracle.entities");
    assert_eq!(
        bc.axis_tick_positions(None).unwrap(),
        vec![0.0, 1.0, 2.0, 3.0]
    );

    let names = vec!["exp0".to_string(), "exp1".to_string()];
    assert_eq!(bc.axis_tick_positions(Some(&names)).unwrap(), vec![0.0, 1.0]);
}

#[test]
fn tick_labels_fail_loudly() {
    let bc = criteria("oracle.entities");
    match bc.axis_tick_labels(None) {
        Err(crate::error::Error::TickLabelsUnsupported(s)) => {
            assert_eq!(s, "oracle.entities")
        }
        other => panic!("expected TickLabelsUnsupported, got {:?}", other),
    }
}

#[test]
fn axis_label_is_fixed_for_the_family() {
    assert_eq!(
        criteria("oracle.entities").axis_label(),
        "Oracular Information Type"
    );
}

#[test]
fn only_raw_measure_applies() {
    let bc = criteria("oracle.entities");
    assert!(bc.pm_query("raw"));
    assert!(!bc.pm_query("scalability"));
    assert!(!bc.exclude_baseline_experiment());
}
