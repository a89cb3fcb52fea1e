pub mod report_json;
pub mod scaling_csv;

pub use report_json::load_report;
pub use scaling_csv::load_scaling;
