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

fn lengths(rows: &[Vec<ScalarValue>]) -> Vec<usize> {
    rows.iter()
        .map(|row| row[0].as_str().unwrap().len())
        .collect()
}

#[test]
fn produces_a_single_varchar_value_column() {
    let mut executor = executor(1);
    let result = executor.run(&Query::new("random_string").limit(8)).unwrap();
    assert_eq!(result.columns.len(), 1);
    assert_eq!(result.columns[0].name, "value");
    assert_eq!(result.columns[0].column_type, LogicalType::Varchar);
}

#[test]
fn exact_lengths_are_respected() {
    for (seed, length) in [(2_u64, 1_usize), (3, 10), (4, 100), (5, 1_000)] {
        let mut executor = executor(seed);
        let query = Query::new("random_string")
            .with_args(json!({"length": length}))
            .limit(500);
        let result = executor.run(&query).unwrap();
        assert!(lengths(&result.rows).iter().all(|got| *got == length));
    }
}

#[test]
fn default_lengths_fall_in_the_heuristic_window() {
    let mut executor = executor(6);
    let result = executor
        .run(&Query::new("random_string").limit(10_000))
        .unwrap();
    assert!(lengths(&result.rows)
        .iter()
        .all(|length| (1..=20).contains(length)));
}

#[test]
fn a_minimum_widens_the_window() {
    let mut executor = executor(7);

    let short = executor
        .run(
            &Query::new("random_string")
                .with_args(json!({"min_length": 5}))
                .limit(5_000),
        )
        .unwrap();
    assert!(lengths(&short.rows)
        .iter()
        .all(|length| (5..=20).contains(length)));

    let long = executor
        .run(
            &Query::new("random_string")
                .with_args(json!({"min_length": 50}))
                .limit(5_000),
        )
        .unwrap();
    assert!(lengths(&long.rows)
        .iter()
        .all(|length| (50..=100).contains(length)));
}

#[test]
fn an_explicit_window_covers_every_length() {
    let mut executor = executor(8);
    let query = Query::new("random_string")
        .with_args(json!({"min_length": 10, "max_length": 49}))
        .limit(10_000);
    let result = executor.run(&query).unwrap();
    let lengths = lengths(&result.rows);
    assert!(lengths.iter().all(|length| (10..=49).contains(length)));
    let distinct: HashSet<usize> = lengths.into_iter().collect();
    assert_eq!(distinct.len(), 40);
}

#[test]
fn casing_selects_the_alphabet() {
    let mut executor = executor(9);

    let lower = executor
        .run(&Query::new("random_string").limit(200))
        .unwrap();
    assert!(lower.rows.iter().all(|row| row[0]
        .as_str()
        .unwrap()
        .chars()
        .all(|ch| ch.is_ascii_lowercase())));

    let upper = executor
        .run(
            &Query::new("random_string")
                .with_args(json!({"casing": "upper"}))
                .limit(200),
        )
        .unwrap();
    assert!(upper.rows.iter().all(|row| row[0]
        .as_str()
        .unwrap()
        .chars()
        .all(|ch| ch.is_ascii_uppercase())));

    let mixed = executor
        .run(
            &Query::new("random_string")
                .with_args(json!({"casing": "mixed", "length": 250}))
                .limit(100),
        )
        .unwrap();
    for row in &mixed.rows {
        let value = row[0].as_str().unwrap();
        assert!(value.chars().all(|ch| ch.is_ascii_alphabetic()));
        assert!(value.chars().any(|ch| ch.is_ascii_lowercase()));
        assert!(value.chars().any(|ch| ch.is_ascii_uppercase()));
    }
}

#[test]
fn conflicting_length_parameters_are_rejected() {
    let mut executor = executor(10);
    let query = Query::new("random_string").with_args(json!({"length": 5, "min_length": 2}));
    let err = executor.run(&query).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
    assert!(err
        .to_string()
        .contains("length cannot be combined with min_length or max_length"));
}

#[test]
fn inverted_length_bounds_are_rejected() {
    let mut executor = executor(11);
    let query = Query::new("random_string").with_args(json!({"min_length": 30, "max_length": 10}));
    let err = executor.run(&query).unwrap_err();
    assert!(err
        .to_string()
        .contains("min_length cannot be greater than max_length"));
}

#[test]
fn casing_tags_are_exact_and_closed() {
    let mut executor = executor(12);
    for bad in ["Lower", "UPPER", "title"] {
        let query = Query::new("random_string").with_args(json!({"casing": bad}));
        let err = executor.run(&query).unwrap_err();
        assert!(
            err.to_string()
                .contains("casing must be one of: lower, upper, mixed"),
            "unexpected message for {bad}: {err}"
        );
    }
}

#[test]
fn negative_lengths_are_rejected_by_kind() {
    let mut executor = executor(13);
    let query = Query::new("random_string").with_args(json!({"length": -5}));
    let err = executor.run(&query).unwrap_err();
    assert!(err.to_string().contains("invalid value for param 'length'"));
}
