use std::path::PathBuf;

use clap::{Arg, Command, ValueHint};

/// Every argument is optional: without any, the default results layout under
/// the current directory is rendered.
pub fn build_cli() -> Command {
    Command::new("biopassport-figures")
        .version(clap::crate_version!())
        .about("Render publication figures from BioPassport benchmark results")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to a JSON figure configuration file")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("results_dir")
                .short('r')
                .long("results-dir")
                .help(
                    "Directory holding the benchmark results [default: results, relative to \
                     the current working directory, not to the binary]. Relative report, \
                     scaling and output paths are resolved against it.",
                )
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::DirPath),
        )
        .arg(
            Arg::new("report")
                .long("report")
                .help("Benchmark report JSON. Overrides the configured report file.")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("scaling")
                .long("scaling")
                .help("Scaling table CSV. Overrides the configured scaling file.")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output_dir")
                .short('o')
                .long("output-dir")
                .help("Directory the figures are written to. Created if absent.")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::DirPath),
        )
        .arg(
            Arg::new("dpi")
                .long("dpi")
                .help("Resolution of the PNG figures in dots per inch")
                .value_parser(clap::value_parser!(u32)),
        )
}
