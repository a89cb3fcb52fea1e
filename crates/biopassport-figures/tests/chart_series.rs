//! Integration tests for the data each figure is drawn from.

use std::path::PathBuf;

use biopassport_figures::data_handling::{BenchmarkReport, ScalingRow, ScalingTable};
use biopassport_figures::error::FigureError;
use biopassport_figures::io::load_report;
use biopassport_figures::report::ablation::{ablation_series, delta_label};
use biopassport_figures::report::baselines::{
    bar_color, baseline_series, latency_label, security_label, short_name,
};
use biopassport_figures::report::confusion::{bar_label, confusion_series};
use biopassport_figures::report::latency::{display_name, latency_series};
use biopassport_figures::report::scaling::{linear_reference, scaling_series};
use biopassport_figures::report::style::{self, BASELINE_PALETTE};
use biopassport_figures::report::throughput::{first_max_index, peak_label, throughput_series};

fn fixture_report() -> BenchmarkReport {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join("benchmark-report.json");
    load_report(path).unwrap()
}

fn report_from(json: &str) -> BenchmarkReport {
    serde_json::from_str(json).unwrap()
}

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
}

// ---------------------------------------------------------------------------
// Confusion
// ---------------------------------------------------------------------------

#[test]
fn confusion_bars_are_f1_percentages() {
    let series = confusion_series(&fixture_report()).unwrap();
    assert_eq!(
        series.anomaly_types,
        vec!["EXPIRED_CREDENTIAL", "TAMPERED_QC", "REVOKED_ISSUER"]
    );
    assert_eq!(series.on_chain_f1.len(), 3);
    assert_eq!(series.full_f1.len(), 3);
    assert_close(series.on_chain_f1[0], 100.0);
    assert_close(series.on_chain_f1[1], 0.0);
    assert_close(series.on_chain_f1[2], 89.96);
    assert_close(series.full_f1[1], 97.0);
    assert_eq!(series.labels()[1], "TAMPERED QC");
}

#[test]
fn confusion_joins_full_results_by_anomaly_type() {
    let report = report_from(
        r#"{ "confusionMatrices": {
            "onChain": [
                { "anomalyType": "A", "confusionMatrix": { "f1Score": 0.5 } },
                { "anomalyType": "B", "confusionMatrix": { "f1Score": 0.25 } }
            ],
            "full": [
                { "anomalyType": "B", "confusionMatrix": { "f1Score": 0.75 } },
                { "anomalyType": "A", "confusionMatrix": { "f1Score": 1.0 } },
                { "anomalyType": "C", "confusionMatrix": { "f1Score": 0.1 } }
            ]
        } }"#,
    );
    let series = confusion_series(&report).unwrap();
    assert_eq!(series.anomaly_types, vec!["A", "B"]);
    assert_close(series.full_f1[0], 100.0);
    assert_close(series.full_f1[1], 75.0);
}

#[test]
fn confusion_unmatched_anomaly_errors() {
    let report = report_from(
        r#"{ "confusionMatrices": {
            "onChain": [ { "anomalyType": "A", "confusionMatrix": { "f1Score": 0.5 } } ],
            "full": [ { "anomalyType": "B", "confusionMatrix": { "f1Score": 0.5 } } ]
        } }"#,
    );
    assert_eq!(
        confusion_series(&report).unwrap_err(),
        FigureError::UnmatchedAnomaly("A".to_string())
    );
}

#[test]
fn confusion_missing_section_errors() {
    assert_eq!(
        confusion_series(&BenchmarkReport::default()).unwrap_err(),
        FigureError::MissingSection("confusionMatrices")
    );
}

#[test]
fn confusion_bar_labels_round_and_skip_zero() {
    assert_eq!(bar_label(89.96).as_deref(), Some("90"));
    assert_eq!(bar_label(100.0).as_deref(), Some("100"));
    assert_eq!(bar_label(0.0), None);
}

// ---------------------------------------------------------------------------
// Scaling
// ---------------------------------------------------------------------------

fn table(rows: &[(u64, f64, f64)]) -> ScalingTable {
    ScalingTable::from_rows(rows.iter().map(|&(materials, verify, query)| ScalingRow {
        materials,
        verify_latency_ms: verify,
        query_latency_ms: query,
    }))
}

#[test]
fn scaling_reference_is_linear_from_first_verify_sample() {
    let series =
        scaling_series(&table(&[(10, 5.0, 3.0), (100, 5.2, 3.1), (1000, 5.5, 3.3)])).unwrap();
    assert_eq!(series.linear_reference_ms.len(), 3);
    assert_close(series.linear_reference_ms[0], 5.0);
    assert_close(series.linear_reference_ms[1], 50.0);
    assert_close(series.linear_reference_ms[2], 500.0);
    assert_eq!(series.materials, vec![10.0, 100.0, 1000.0]);
}

#[test]
fn scaling_reference_scales_with_material_ratio() {
    let reference = linear_reference(&[4, 6, 40], 2.0);
    assert_close(reference[0], 2.0);
    assert_close(reference[1], 3.0);
    assert_close(reference[2], 20.0);
    assert!(linear_reference(&[], 2.0).is_empty());
}

#[test]
fn scaling_axis_bounds_cover_every_line() {
    let series =
        scaling_series(&table(&[(10, 5.0, 3.0), (100, 5.2, 3.1), (1000, 5.5, 3.3)])).unwrap();
    assert_close(series.y_max(), 550.0);
    let x = series.x_range();
    assert!(x.start > 0.0 && x.start < 10.0);
    assert!(x.end > 1000.0);
}

#[test]
fn scaling_empty_table_errors() {
    assert_eq!(
        scaling_series(&ScalingTable::default()).unwrap_err(),
        FigureError::EmptySeries("scaling")
    );
}

#[test]
fn scaling_zero_materials_errors() {
    assert_eq!(
        scaling_series(&table(&[(0, 5.0, 3.0), (10, 5.0, 3.0)])).unwrap_err(),
        FigureError::NonPositiveMaterials(0)
    );
}

// ---------------------------------------------------------------------------
// Latency
// ---------------------------------------------------------------------------

#[test]
fn latency_includes_only_percentile_mappings() {
    let series = latency_series(&fixture_report()).unwrap();
    assert_eq!(
        series.operations,
        vec![
            "Register",
            "Issue Cred",
            "Init Transfer",
            "Accept Transfer",
            "Verify (Chain)",
            "Verify (Full)",
        ]
    );
    assert_eq!(series.p50()[0], 12.4);
    assert_eq!(series.p95()[4], 7.2);
    assert_eq!(series.p99()[5], 66.4);
}

#[test]
fn latency_display_name_applies_substitutions() {
    assert_eq!(display_name("registerMaterial"), "Register");
    assert_eq!(display_name("verifyMaterialOnChain"), "Verify (Chain)");
    assert_eq!(display_name("registerMaterialBatch"), "RegisterBatch");
    assert_eq!(display_name("revokeCredential"), "revokeCredential");
}

#[test]
fn latency_mapping_without_p50_is_skipped() {
    let report = report_from(
        r#"{ "latency": {
            "custom": { "p95": 3.0, "p99": 4.0 },
            "query": { "p50": 1.0, "p95": 2.0, "p99": 3.0 }
        } }"#,
    );
    let series = latency_series(&report).unwrap();
    assert_eq!(series.operations, vec!["query"]);
}

#[test]
fn latency_missing_tail_percentile_errors() {
    let report = report_from(r#"{ "latency": { "query": { "p50": 1.0, "p95": 2.0 } } }"#);
    assert_eq!(
        latency_series(&report).unwrap_err(),
        FigureError::InvalidField {
            entry: "query".to_string(),
            field: "p99"
        }
    );
}

#[test]
fn latency_without_operations_errors() {
    let report = report_from(r#"{ "latency": { "totalOperations": 10 } }"#);
    assert_eq!(
        latency_series(&report).unwrap_err(),
        FigureError::EmptySeries("latency distribution")
    );
}

// ---------------------------------------------------------------------------
// Baselines
// ---------------------------------------------------------------------------

#[test]
fn baselines_keep_input_order_and_shorten_theoretical_names() {
    let series = baseline_series(&fixture_report()).unwrap();
    assert_eq!(
        series.names,
        vec!["Centralized DB", "Public Ethereum*", "BioPassport"]
    );
    assert_eq!(series.latency_p50_ms, vec![2.1, 12000.0, 4.9]);
    assert_eq!(series.security_scores, vec![35.0, 70.0, 95.0]);
    assert_eq!(series.throughput_ops, vec![1850.0, 15.0, 212.5]);
}

#[test]
fn baselines_labels_and_palette() {
    assert_eq!(short_name("Hyperledger [theoretical]"), "Hyperledger*");
    assert_eq!(short_name("BioPassport"), "BioPassport");
    assert_eq!(latency_label(4.94), "4.9ms");
    assert_eq!(security_label(95.0), "95%");
    assert_eq!(security_label(87.5), "87.5%");
    assert_eq!(bar_color(0), BASELINE_PALETTE[0]);
    assert_eq!(bar_color(3), BASELINE_PALETTE[0]);
    assert_eq!(bar_color(2), style::SUCCESS_GREEN);
}

#[test]
fn baselines_empty_list_errors() {
    let report = report_from(r#"{ "baselines": [] }"#);
    assert_eq!(
        baseline_series(&report).unwrap_err(),
        FigureError::EmptySeries("baseline comparison")
    );
}

// ---------------------------------------------------------------------------
// Ablation
// ---------------------------------------------------------------------------

#[test]
fn ablation_delta_is_percentage_point_increase() {
    let series = ablation_series(&fixture_report()).unwrap();
    assert_eq!(series.features, vec!["Signature Check", "Expiry Check"]);
    assert_close(series.baseline_pct[1], 5.0);
    assert_close(series.ablated_pct[1], 27.5);
    assert_eq!(series.deltas(), vec![40.0, 22.5]);
    assert_eq!(delta_label(40.0), "+40.0%");
    assert_eq!(delta_label(-3.24), "-3.2%");
}

#[test]
fn ablation_delta_rounds_to_one_decimal() {
    let report = report_from(
        r#"{ "ablations": [ { "name": "Nonce", "baselinePassRate": 0.1, "ablatedPassRate": 0.33333 } ] }"#,
    );
    assert_eq!(ablation_series(&report).unwrap().deltas(), vec![23.3]);
}

#[test]
fn ablation_axis_grows_past_sixty_only_when_needed() {
    let series = ablation_series(&fixture_report()).unwrap();
    assert_close(series.y_max(), 60.0);

    let report = report_from(
        r#"{ "ablations": [ { "name": "Nonce", "baselinePassRate": 0.1, "ablatedPassRate": 0.9 } ] }"#,
    );
    assert!(ablation_series(&report).unwrap().y_max() > 90.0);
}

// ---------------------------------------------------------------------------
// Throughput
// ---------------------------------------------------------------------------

#[test]
fn throughput_peak_is_first_maximum() {
    let series = throughput_series(&fixture_report()).unwrap();
    assert_eq!(series.peak, 2);
    assert_eq!(series.peak_point(), (10.0, 212.5));
    assert_eq!(peak_label(series.peak_point().1), "Peak: 212.5 ops/s");
}

#[test]
fn throughput_first_max_index() {
    assert_eq!(first_max_index(&[1.0, 3.0, 2.0, 3.0]), Some(1));
    assert_eq!(first_max_index(&[5.0]), Some(0));
    assert_eq!(first_max_index(&[]), None);
}

#[test]
fn throughput_empty_samples_error() {
    let report = report_from(r#"{ "throughput": [] }"#);
    assert_eq!(
        throughput_series(&report).unwrap_err(),
        FigureError::EmptySeries("throughput")
    );
}

// ---------------------------------------------------------------------------
// Shared layout helpers
// ---------------------------------------------------------------------------

#[test]
fn category_labels_only_on_integer_ticks() {
    let labels = vec!["a".to_string(), "b".to_string()];
    assert_eq!(style::category_label(&labels, 0.0), "a");
    assert_eq!(style::category_label(&labels, 1.0), "b");
    assert_eq!(style::category_label(&labels, 0.5), "");
    assert_eq!(style::category_label(&labels, -1.0), "");
    assert_eq!(style::category_label(&labels, 2.0), "");
    assert_eq!(style::category_range(3), -0.5..2.5);
}

#[test]
fn grouped_bars_are_centred_on_their_category() {
    let two = style::group_offsets(2, 0.35);
    assert_close(two[0], -0.175);
    assert_close(two[1], 0.175);

    let three = style::group_offsets(3, 0.25);
    assert_close(three[0], -0.25);
    assert_close(three[1], 0.0);
    assert_close(three[2], 0.25);
}

#[test]
fn dashed_line_spans_the_requested_range() {
    let dashes = style::dashed_hline(0.0, 10.0, 100.0, 5);
    assert_eq!(dashes.len(), 5);
    assert_eq!(dashes[0][0], (0.0, 100.0));
    assert_close(dashes[4][0].0, 8.0);
    assert!(dashes.iter().all(|[a, b]| a.1 == 100.0 && b.1 == 100.0 && b.0 > a.0));
    assert!(dashes[4][1].0 <= 10.0);
}
