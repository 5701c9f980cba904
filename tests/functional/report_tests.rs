//! Functional tests for the text report

use crate::common::TestFixture;
use csvdiff::report::TextReport;
use csvdiff::{ComparisonRun, DiffConfig};

fn run_report(reference: &str, data: &str, config: DiffConfig) -> (String, Option<String>) {
    let fixture = TestFixture::new().unwrap();
    let reference = fixture.create_csv_raw("ref.csv", reference).unwrap();
    let data = fixture.create_csv_raw("data.csv", data).unwrap();

    let run = ComparisonRun::new(config);
    let outcome = run.run_files(&reference, &data).unwrap();
    let report = TextReport::new(&outcome, run.config());
    (report.render(), report.mismatch_warning())
}

const REFERENCE: &str = "same,diff,broken,extra\n1,1,1,0\n2,2,2,0\n";
const DATA: &str = "same,diff,broken,extre\n1,1.5,x,0\n2,2.5,2,0\n";

#[test]
fn test_full_report_layout() {
    let (text, warning) = run_report(REFERENCE, DATA, DiffConfig::default());
    assert!(warning.is_none());

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "");
    assert_eq!(
        lines[1],
        "== Non-matching reference columns /w suggested (--match) data columns =="
    );
    assert_eq!(lines[2], format!("{:<30} --> {:<30}", "extra", "extre"));
    assert_eq!(lines[3], "");
    assert_eq!(lines[4], "Epsilon = 1e-08");
    assert_eq!(lines[5], "");
    assert!(lines[6].starts_with(&format!("{:<32} :", "Variable (ref)")));
    assert!(lines[6].ends_with(&format!("{:>20}", "SD (abs)")));

    // exact alignment sorts names: broken, diff, same
    assert_eq!(lines[7], format!("{:<32} : NaN values in column!", "broken"));
    assert_eq!(
        lines[8],
        format!(
            "{:<32} : {:>20} {:>20} {:>20} {:>20} {:>20} {:>20}",
            "diff", "0.5", "0.5", "-0.5", "0", "0.5", "0"
        )
    );
    assert_eq!(lines[9], format!("{:<32} : Values are same", "same"));
}

#[test]
fn test_grouped_report_with_hidden_rows() {
    let config = DiffConfig {
        group_results_by_classification: true,
        hide_same_columns: true,
        ..Default::default()
    };
    let (text, _) = run_report(REFERENCE, DATA, config);

    let diff_pos = text.find("diff ").unwrap();
    let broken_pos = text.find("broken ").unwrap();
    assert!(diff_pos < broken_pos);
    assert!(!text.contains("Values are same"));
    assert!(text.contains("Number of same columns: 1"));
    assert!(!text.contains("Number of NaN columns"));
}

#[test]
fn test_brief_report() {
    let config = DiffConfig {
        brief: true,
        ..Default::default()
    };
    let (text, warning) = run_report(REFERENCE, "same,diff,broken,extra\n1,1,x,0\n", config);
    assert_eq!(text, "\nNaN : 1/4 Same : 3/4 @ eps = 1e-08\n");
    assert!(warning.is_none());
}

#[test]
fn test_mismatch_warning() {
    let (_, warning) = run_report("a\n1\n2\n3\n", "a\n1\n", DiffConfig::default());
    assert_eq!(
        warning.as_deref(),
        Some("\n== Line count mismatch; Ref(3) != Data(1). Smaller one will be used for comparison. ==")
    );
}
