#![cfg(feature = "serde")]

use sigcga::{
    benchmarks::Problem,
    history::{HistoryKind, HistorySummary},
    optimizer::{RunResult, SigCgaOptions},
    significance::Decision,
};

#[test]
fn test_options_serialize() {
    let options = SigCgaOptions::new(100, 5.0, HistoryKind::Simple);
    let json = serde_json::to_string(&options).unwrap();
    assert!(json.contains("\"epsilon\":5.0"));
    let back: SigCgaOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(back, options);
}

#[test]
fn test_result_and_summary_serialize() {
    let result = RunResult {
        evaluations: 120,
        best_fitness: 30.0,
    };
    let value = serde_json::to_value(result).unwrap();
    assert_eq!(value["evaluations"], 120);

    let summary = HistorySummary::new(3, 1);
    let value = serde_json::to_value(summary).unwrap();
    assert_eq!(value["span"], 4);

    assert_eq!(
        serde_json::to_string(&Decision::Increase).unwrap(),
        "\"Increase\""
    );
    assert_eq!(serde_json::to_string(&Problem::JumpK3).unwrap(), "\"JumpK3\"");
}
