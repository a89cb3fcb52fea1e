use std::error::Error;
use std::fmt;

/// Data-shape problems found while turning loaded results into chart series.
#[derive(Debug, Clone, PartialEq)]
pub enum FigureError {
    /// A top-level report section the chart needs is absent.
    MissingSection(&'static str),
    /// The chart would have no data points.
    EmptySeries(&'static str),
    /// A latency entry is missing a percentile or holds a non-numeric one.
    InvalidField { entry: String, field: &'static str },
    /// An on-chain anomaly type has no full-verification counterpart.
    UnmatchedAnomaly(String),
    /// Material counts must be positive on a logarithmic axis.
    NonPositiveMaterials(u64),
}

impl fmt::Display for FigureError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FigureError::MissingSection(section) => {
                write!(f, "Benchmark report has no '{}' section", section)
            }
            FigureError::EmptySeries(chart) => write!(f, "No data points for the {} chart", chart),
            FigureError::InvalidField { entry, field } => {
                write!(f, "Latency entry '{}' has no numeric '{}' field", entry, field)
            }
            FigureError::UnmatchedAnomaly(anomaly) => write!(
                f,
                "Anomaly type '{}' has on-chain results but no full-verification results",
                anomaly
            ),
            FigureError::NonPositiveMaterials(count) => write!(
                f,
                "Material count {} cannot be placed on a logarithmic axis",
                count
            ),
        }
    }
}

impl Error for FigureError {}
