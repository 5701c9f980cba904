//! Functional tests for column name matching

use crate::common::{sample_data, CliTestRunner};
use csvdiff::align::{best_pairings, exact_alignment};
use csvdiff::stats::Classification;

#[test]
fn test_exact_mode_suggests_renamed_columns() {
    let runner = CliTestRunner::new().unwrap();
    let reference = runner.fixture().create_csv("ref.csv", &sample_data::reference_data()).unwrap();
    let data = runner.fixture().create_csv("data.csv", &sample_data::renamed_data()).unwrap();

    let outcome = runner.expect_success(&[reference.to_str().unwrap(), data.to_str().unwrap()]);

    // only "flow" matches exactly
    assert_eq!(outcome.results.len(), 1);
    assert_eq!(outcome.results[0].column_label, "flow");

    let suggested: Vec<(&str, Option<&str>)> = outcome
        .suggestions
        .iter()
        .map(|s| {
            (
                s.unmatched_reference_name.as_str(),
                s.best_effort_data_name.as_deref(),
            )
        })
        .collect();
    assert_eq!(
        suggested,
        vec![
            ("TK", Some("TK")),
            ("pbar", Some("pbar")),
            ("time", Some("Time")),
        ]
    );
}

#[test]
fn test_match_mode_compares_renamed_columns() {
    let runner = CliTestRunner::new().unwrap();
    let reference = runner.fixture().create_csv("ref.csv", &sample_data::reference_data()).unwrap();
    let data = runner.fixture().create_csv("data.csv", &sample_data::renamed_data()).unwrap();

    let outcome = runner.expect_success(&[
        reference.to_str().unwrap(),
        data.to_str().unwrap(),
        "--match",
    ]);

    // reference header order, reference names
    let labels: Vec<&str> = outcome.results.iter().map(|r| r.column_label.as_str()).collect();
    assert_eq!(labels, vec!["time", "T[K]", "p[bar]", "flow"]);
    assert_eq!(outcome.same_count(), 4);
    assert!(outcome.suggestions.is_empty());
    assert!(outcome.missing_columns.is_empty());
}

#[test]
fn test_match_mode_with_data_side_names() {
    let runner = CliTestRunner::new().unwrap();
    let reference = runner.fixture().create_csv("ref.csv", &sample_data::reference_data()).unwrap();
    let data = runner.fixture().create_csv("data.csv", &sample_data::renamed_data()).unwrap();

    let outcome = runner.expect_success(&[
        reference.to_str().unwrap(),
        data.to_str().unwrap(),
        "-m",
        "--use-data-names",
    ]);

    let labels: Vec<&str> = outcome.results.iter().map(|r| r.column_label.as_str()).collect();
    assert_eq!(labels, vec!["Time", "TK", "pbar", "flow"]);
}

#[test]
fn test_match_mode_many_to_one_reports_missing() {
    let runner = CliTestRunner::new().unwrap();
    let reference = runner
        .fixture()
        .create_csv_raw("ref.csv", "speed1,speed2\n1,2\n3,4\n")
        .unwrap();
    let data = runner
        .fixture()
        .create_csv_raw("data.csv", "speed,zzzzzzzzzz\n1,2\n3,4\n")
        .unwrap();

    let outcome = runner.expect_success(&[
        reference.to_str().unwrap(),
        data.to_str().unwrap(),
        "--match",
    ]);

    assert_eq!(outcome.missing_columns, vec!["speed1".to_string()]);
    assert_eq!(outcome.results.len(), 1);
    assert_eq!(outcome.results[0].column_label, "speed2");
    assert_eq!(outcome.results[0].classification, Classification::Normal);
}

#[test]
fn test_alignment_properties() {
    let names = |list: &[&str]| list.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    let alignment = exact_alignment(&names(&["x", "y", "z"]), &names(&["y", "z", "w"]));
    assert_eq!(alignment.matched, names(&["y", "z"]));
    assert_eq!(alignment.reference_only, names(&["x"]));
    assert_eq!(alignment.data_only, names(&["w"]));

    let pairings = best_pairings(&names(&["Alpha"]), &names(&["Alpa", "Beta"]));
    assert_eq!(pairings.len(), 1);
    assert_eq!(pairings[0].data_name, "Alpa");
}
