use anyhow::Result;
use log::LevelFilter;

use biopassport_cli::cli::build_cli;
use biopassport_cli::input::config_from_arguments;
use biopassport_cli::run::run;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("BIOPASSPORT_LOG", "error,biopassport=info"))
        .init();

    let matches = build_cli().get_matches();
    let config = config_from_arguments(&matches)?;

    match run(&config) {
        Ok(written) => {
            log::info!("[BioPassport::Figures] Wrote {} files", written.len());
            Ok(())
        }
        Err(e) => {
            log::error!("Figure generation failed: {:#}", e);
            std::process::exit(1)
        }
    }
}
