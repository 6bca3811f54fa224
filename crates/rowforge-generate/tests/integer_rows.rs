use std::collections::HashSet;

use rowforge_core::{Catalog, Error, LogicalType, ScalarValue};
use rowforge_engine::{Executor, FunctionRegistry, Query};
use rowforge_generate::register_all;
use serde_json::json;

fn executor(seed: u64) -> Executor {
    let mut registry = FunctionRegistry::new();
    register_all(&mut registry);
    Executor::with_seed(registry, Catalog::new(), seed)
}

fn values(rows: &[Vec<ScalarValue>]) -> Vec<i32> {
    rows.iter().map(|row| row[0].as_i32().unwrap()).collect()
}

#[test]
fn produces_a_single_integer_value_column() {
    let mut executor = executor(1);
    let result = executor.run(&Query::new("random_int").limit(8)).unwrap();
    assert_eq!(result.columns.len(), 1);
    assert_eq!(result.columns[0].name, "value");
    assert_eq!(result.columns[0].column_type, LogicalType::Integer);
}

#[test]
fn bounds_are_inclusive_and_respected() {
    for (seed, min, max) in [(2_u64, -1_000, 42), (3, 42, 1_000), (4, -42, 42)] {
        let mut executor = executor(seed);
        let query = Query::new("random_int")
            .with_args(json!({"min": min, "max": max}))
            .limit(10_000);
        let result = executor.run(&query).unwrap();
        assert!(values(&result.rows)
            .iter()
            .all(|value| (min..=max).contains(value)));
    }
}

#[test]
fn a_degenerate_range_is_constant() {
    let mut executor = executor(5);
    let query = Query::new("random_int")
        .with_args(json!({"min": 7, "max": 7}))
        .limit(1_000);
    let result = executor.run(&query).unwrap();
    assert!(values(&result.rows).iter().all(|value| *value == 7));
}

#[test]
fn each_bound_may_stand_alone() {
    let mut executor = executor(6);

    let floor = executor
        .run(
            &Query::new("random_int")
                .with_args(json!({"min": 2_000_000_000}))
                .limit(2_000),
        )
        .unwrap();
    assert!(values(&floor.rows)
        .iter()
        .all(|value| *value >= 2_000_000_000));

    let ceiling = executor
        .run(
            &Query::new("random_int")
                .with_args(json!({"max": -2_000_000_000}))
                .limit(2_000),
        )
        .unwrap();
    assert!(values(&ceiling.rows)
        .iter()
        .all(|value| *value <= -2_000_000_000));
}

#[test]
fn the_default_range_spans_the_full_domain() {
    let mut executor = executor(7);
    let result = executor
        .run(&Query::new("random_int").limit(1_000))
        .unwrap();
    let values = values(&result.rows);
    let distinct: HashSet<i32> = values.iter().copied().collect();
    assert!(distinct.len() > 990, "only {} distinct values", distinct.len());
    assert!(values.iter().any(|value| *value < 0));
    assert!(values.iter().any(|value| *value > 0));
}

#[test]
fn draws_are_roughly_uniform() {
    let mut executor = executor(8);
    let query = Query::new("random_int")
        .with_args(json!({"min": 1, "max": 4}))
        .limit(10_000);
    let result = executor.run(&query).unwrap();
    let mut counts = [0_u32; 4];
    for value in values(&result.rows) {
        counts[(value - 1) as usize] += 1;
    }
    for count in counts {
        assert!(
            (2_250..=2_750).contains(&count),
            "bucket count {count} outside tolerance"
        );
    }
}

#[test]
fn inverted_bounds_are_rejected() {
    let mut executor = executor(9);
    for (min, max) in [(1, 0), (-5, -6)] {
        let query = Query::new("random_int").with_args(json!({"min": min, "max": max}));
        let err = executor.run(&query).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(err
            .to_string()
            .contains("min must be less than or equal to max"));
    }
}

#[test]
fn bounds_must_fit_a_32_bit_integer() {
    let mut executor = executor(10);
    let query = Query::new("random_int").with_args(json!({"min": 3_000_000_000_i64}));
    let err = executor.run(&query).unwrap_err();
    assert!(err.to_string().contains("min does not fit a 32-bit integer"));
}

#[test]
fn the_distribution_tag_is_case_insensitive() {
    let mut executor = executor(11);
    for tag in ["uniform", "UNIFORM", "Uniform"] {
        let query = Query::new("random_int")
            .with_args(json!({"distribution": tag}))
            .limit(4);
        assert!(executor.run(&query).is_ok(), "tag {tag} failed");
    }

    let query = Query::new("random_int").with_args(json!({"distribution": "zipf"}));
    let err = executor.run(&query).unwrap_err();
    assert!(err
        .to_string()
        .contains("unknown probability distribution \"zipf\""));
}
