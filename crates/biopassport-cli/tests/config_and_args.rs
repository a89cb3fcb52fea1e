//! Integration tests for argument handling and the progress output helpers.

use std::io::Write;
use std::path::{Path, PathBuf};

use biopassport_cli::cli::build_cli;
use biopassport_cli::input::config_from_arguments;
use biopassport_cli::run::{file_pair, latex_hint};
use biopassport_figures::report::ChartKind;

fn config_for(args: &[&str]) -> anyhow::Result<biopassport_figures::config::FigureConfig> {
    let matches = build_cli()
        .try_get_matches_from(std::iter::once("biopassport-figures").chain(args.iter().copied()))
        .unwrap();
    config_from_arguments(&matches)
}

// ---------------------------------------------------------------------------
// config_from_arguments
// ---------------------------------------------------------------------------

#[test]
fn no_arguments_use_defaults() {
    let config = config_for(&[]).unwrap();
    assert_eq!(config.results_dir, PathBuf::from("results"));
    assert_eq!(config.raster_dpi, 300);
    assert_eq!(config.output_path(), PathBuf::from("results").join("figures"));
}

#[test]
fn flags_override_defaults() {
    let config = config_for(&[
        "-r",
        "run-3",
        "--report",
        "report.json",
        "--scaling",
        "chain.csv",
        "-o",
        "out",
        "--dpi",
        "150",
    ])
    .unwrap();
    assert_eq!(config.report_path(), PathBuf::from("run-3").join("report.json"));
    assert_eq!(config.scaling_path(), PathBuf::from("run-3").join("chain.csv"));
    assert_eq!(config.output_path(), PathBuf::from("run-3").join("out"));
    assert_eq!(config.raster_dpi, 150);
}

#[test]
fn flags_take_precedence_over_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "results_dir": "from-file", "output_dir": "file-figures", "raster_dpi": 600 }}"#
    )
    .unwrap();

    let config = config_for(&["-c", file.path().to_str().unwrap(), "--dpi", "72"]).unwrap();
    assert_eq!(config.results_dir, PathBuf::from("from-file"));
    assert_eq!(config.output_dir, PathBuf::from("file-figures"));
    assert_eq!(config.raster_dpi, 72);
}

#[test]
fn zero_dpi_override_is_rejected() {
    assert!(config_for(&["--dpi", "0"]).is_err());
}

#[test]
fn unknown_argument_is_a_parse_error() {
    assert!(build_cli()
        .try_get_matches_from(["biopassport-figures", "--pdf"])
        .is_err());
}

// ---------------------------------------------------------------------------
// Progress output
// ---------------------------------------------------------------------------

#[test]
fn file_pair_names_both_formats() {
    assert_eq!(file_pair(ChartKind::Scaling), "scaling_o1.svg/png");
    assert_eq!(file_pair(ChartKind::Ablation), "ablation_study.svg/png");
}

#[test]
fn latex_hint_references_vector_scaling_figure() {
    assert_eq!(
        latex_hint(Path::new("figures"), ChartKind::Scaling),
        "\\includesvg[width=\\columnwidth]{figures/scaling_o1.svg}"
    );
}

#[test]
fn results_dir_help_names_the_working_directory() {
    let cli = build_cli();
    let help = cli
        .get_arguments()
        .find(|arg| arg.get_id() == "results_dir")
        .and_then(|arg| arg.get_help())
        .map(|help| help.to_string())
        .unwrap();
    assert!(help.contains("current working directory"));
}
