//! The load, render and report sequence behind the command line.
use std::path::{Path, PathBuf};

use anyhow::Result;

use biopassport_figures::config::FigureConfig;
use biopassport_figures::render::{prepare_output_dir, render_chart, BenchmarkInputs};
use biopassport_figures::report::{ChartKind, OutputFormat};

const RULE_WIDTH: usize = 60;

fn print_banner(title: &str) {
    let rule = "=".repeat(RULE_WIDTH);
    println!("{}", rule);
    println!("  {}", title);
    println!("{}", rule);
}

/// `name.svg/png` as listed in the progress output.
pub fn file_pair(kind: ChartKind) -> String {
    let extensions: Vec<&str> = OutputFormat::ALL.iter().map(|f| f.extension()).collect();
    format!("{}.{}", kind.file_stem(), extensions.join("/"))
}

/// LaTeX snippet referencing the vector output of `kind`.
pub fn latex_hint(output_dir: &Path, kind: ChartKind) -> String {
    format!(
        "\\includesvg[width=\\columnwidth]{{{}/{}.{}}}",
        output_dir.display(),
        kind.file_stem(),
        OutputFormat::Vector.extension()
    )
}

/// Load both inputs, then write every figure in order. Returns the files written.
pub fn run(config: &FigureConfig) -> Result<Vec<PathBuf>> {
    print_banner("BIOPASSPORT BENCHMARK PLOT GENERATOR");

    println!("\nLoading data...");
    let inputs = BenchmarkInputs::load(config)?;

    let out_dir = config.output_path();
    prepare_output_dir(&out_dir)?;
    println!("\nGenerating plots to: {}", out_dir.display());

    let mut written = Vec::with_capacity(ChartKind::ALL.len() * OutputFormat::ALL.len());
    for kind in ChartKind::ALL {
        written.extend(render_chart(kind, &inputs, &out_dir, config.raster_dpi)?);
        println!("  Saved: {}", file_pair(kind));
    }

    println!();
    print_banner("PLOTS GENERATED");
    println!("\nOutput directory: {}", out_dir.display());
    println!("\nGenerated files:");
    for kind in ChartKind::ALL {
        println!("  - {}", file_pair(kind));
    }
    println!("\nInclude in LaTeX with:");
    println!("  {}", latex_hint(&config.output_dir, ChartKind::Scaling));

    Ok(written)
}
