use std::process::ExitCode;

use clap::Parser;
use radarr_sonarr_mcp::cli::{Arguments, Command, ExitStatus};
use radarr_sonarr_mcp::{config::load_config, logging, mcp};

fn main() -> ExitCode {
    let args = Arguments::parse();
    logging::init(args.common.verbose);

    if let Some(Command::Serve(cmd)) = &args.command {
        let result = load_config(args.common.config.as_deref()).and_then(|loaded| {
            match &loaded.path {
                Some(path) => tracing::info!(path = %path.display(), "Loaded config"),
                None => tracing::info!("No config file found, using defaults"),
            }
            mcp::run_server(&loaded.config, cmd.format)
        });
        if let Err(err) = result {
            eprintln!("Error: {:#}", err);
            return ExitStatus::Error.into();
        }
        return ExitStatus::Success.into();
    }

    match radarr_sonarr_mcp::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
