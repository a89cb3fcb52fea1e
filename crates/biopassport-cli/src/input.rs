use std::path::PathBuf;

use anyhow::Result;
use clap::ArgMatches;

use biopassport_figures::config::FigureConfig;

/// Start from the config file (or defaults) and apply command line overrides.
pub fn config_from_arguments(matches: &ArgMatches) -> Result<FigureConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => {
            log::info!("[BioPassport::Figures] Using config: {:?}", path);
            FigureConfig::load(path)?
        }
        None => FigureConfig::default(),
    };

    if let Some(results_dir) = matches.get_one::<PathBuf>("results_dir") {
        config.results_dir = results_dir.clone();
    }
    if let Some(report) = matches.get_one::<PathBuf>("report") {
        config.report_file = report.clone();
    }
    if let Some(scaling) = matches.get_one::<PathBuf>("scaling") {
        config.scaling_file = scaling.clone();
    }
    if let Some(output_dir) = matches.get_one::<PathBuf>("output_dir") {
        config.output_dir = output_dir.clone();
    }
    if let Some(dpi) = matches.get_one::<u32>("dpi") {
        config.raster_dpi = *dpi;
    }

    config.validate()?;
    log::debug!(
        "Resolved config:\n{}",
        serde_json::to_string_pretty(&config).unwrap_or_default()
    );
    Ok(config)
}
