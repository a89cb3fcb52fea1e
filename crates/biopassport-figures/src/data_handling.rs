//! In-memory form of the benchmark artifacts.
//!
//! Both structures are built once at startup and only read afterwards.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::FigureError;

/// The JSON report written by the benchmark harness.
///
/// Sections are optional at load time so that a report missing one section
/// still renders every chart that does not need it.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkReport {
    #[serde(default)]
    pub confusion_matrices: Option<ConfusionMatrices>,
    /// Operation name to percentile stats. Entries without `p50` are summary
    /// values and are skipped by the latency chart.
    #[serde(default)]
    pub latency: Option<Map<String, Value>>,
    #[serde(default)]
    pub baselines: Option<Vec<Baseline>>,
    #[serde(default)]
    pub ablations: Option<Vec<Ablation>>,
    #[serde(default)]
    pub throughput: Option<Vec<ThroughputSample>>,
}

impl BenchmarkReport {
    pub fn confusion_matrices(&self) -> Result<&ConfusionMatrices, FigureError> {
        self.confusion_matrices
            .as_ref()
            .ok_or(FigureError::MissingSection("confusionMatrices"))
    }

    pub fn latency(&self) -> Result<&Map<String, Value>, FigureError> {
        self.latency
            .as_ref()
            .ok_or(FigureError::MissingSection("latency"))
    }

    pub fn baselines(&self) -> Result<&[Baseline], FigureError> {
        self.baselines
            .as_deref()
            .ok_or(FigureError::MissingSection("baselines"))
    }

    pub fn ablations(&self) -> Result<&[Ablation], FigureError> {
        self.ablations
            .as_deref()
            .ok_or(FigureError::MissingSection("ablations"))
    }

    pub fn throughput(&self) -> Result<&[ThroughputSample], FigureError> {
        self.throughput
            .as_deref()
            .ok_or(FigureError::MissingSection("throughput"))
    }
}

/// Detection results per verification mode.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfusionMatrices {
    pub on_chain: Vec<AnomalyResult>,
    pub full: Vec<AnomalyResult>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnomalyResult {
    pub anomaly_type: String,
    pub confusion_matrix: ConfusionMatrix,
}

/// Classification quality for one anomaly type. Scores are fractions in [0, 1].
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfusionMatrix {
    pub f1_score: f64,
    #[serde(default)]
    pub true_positives: Option<u64>,
    #[serde(default)]
    pub false_positives: Option<u64>,
    #[serde(default)]
    pub true_negatives: Option<u64>,
    #[serde(default)]
    pub false_negatives: Option<u64>,
    #[serde(default)]
    pub precision: Option<f64>,
    #[serde(default)]
    pub recall: Option<f64>,
}

/// Percentiles of one benchmarked operation, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Percentiles {
    pub p50: f64,
    pub p95: f64,
    pub p99: f64,
}

/// Baselines only guarantee the median.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BaselineLatency {
    pub p50: f64,
    #[serde(default)]
    pub p95: Option<f64>,
    #[serde(default)]
    pub p99: Option<f64>,
}

/// A reference system or theoretical bound the prototype is compared with.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Baseline {
    pub name: String,
    pub latency_ms: BaselineLatency,
    pub throughput_ops: f64,
    /// 0 to 100.
    pub security_score: f64,
}

/// Pass rates with a security feature enabled and disabled, as fractions.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ablation {
    pub name: String,
    pub baseline_pass_rate: f64,
    pub ablated_pass_rate: f64,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThroughputSample {
    pub concurrency: u32,
    pub ops_per_second: f64,
}

/// One row of the scaling CSV.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct ScalingRow {
    pub materials: u64,
    pub verify_latency_ms: f64,
    pub query_latency_ms: f64,
}

/// Latency against chain size, as three columns aligned by row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScalingTable {
    pub materials: Vec<u64>,
    pub verify_latency_ms: Vec<f64>,
    pub query_latency_ms: Vec<f64>,
}

impl ScalingTable {
    pub fn from_rows<I: IntoIterator<Item = ScalingRow>>(rows: I) -> Self {
        let mut table = ScalingTable::default();
        for row in rows {
            table.materials.push(row.materials);
            table.verify_latency_ms.push(row.verify_latency_ms);
            table.query_latency_ms.push(row.query_latency_ms);
        }
        table
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}
