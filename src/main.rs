use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use skeleton::core::config::Config;
use skeleton::tui;
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

const DEBUG_LOG: &str = "debug.log";

#[derive(Parser)]
#[command(name = "skeleton", version, about = "A starter template for terminal applications")]
struct Args {
    /// Write diagnostic logs to ./debug.log
    #[arg(long)]
    debug: bool,

    /// Path to the config file (.json or .toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let mut config = match Config::load(args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("fatal: {e}");
            return ExitCode::FAILURE;
        }
    };
    config.debug |= args.debug;

    if config.debug {
        // File logger: the terminal itself is taken over by the UI
        let log_config = ConfigBuilder::new()
            .set_time_format_rfc3339()
            .build();

        let log_file = match File::create(DEBUG_LOG) {
            Ok(file) => file,
            Err(e) => {
                eprintln!("fatal: could not create {DEBUG_LOG}: {e}");
                return ExitCode::FAILURE;
            }
        };
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!(
        "{} v{} starting up (config: {:?})",
        config.app_name,
        config.version,
        config.path
    );

    match tui::run(&config) {
        Ok(()) => {
            log::info!("Clean exit");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Event loop failed: {e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
