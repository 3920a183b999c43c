use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;

use super::args::{Arguments, Command, ConfigureCommand, StatusCommand};
use super::exit_status::ExitStatus;
use crate::arr::{ArrClient, Service, build_http_client};
use crate::config::{
    Config, ConfigLoadResult, ServiceConfig, default_config_path, load_config, read_stored_config,
    save_config,
};

pub fn run(Arguments { command, common }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Status(cmd)) => status(cmd, common.config.as_deref()),
        Some(Command::Configure(cmd)) => configure(cmd, common.config),
        Some(Command::Serve(_)) => {
            // Serve command is handled in main.rs before calling run()
            anyhow::bail!("Serve command should be handled before run()")
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn status(cmd: StatusCommand, config_path: Option<&Path>) -> Result<ExitStatus> {
    let loaded = load_config(config_path)?;
    print_summary(&loaded);

    if !cmd.check {
        return Ok(ExitStatus::Success);
    }

    println!();
    let healthy = check_services(&loaded.config)?;
    Ok(if healthy {
        ExitStatus::Success
    } else {
        ExitStatus::Failure
    })
}

fn print_summary(loaded: &ConfigLoadResult) {
    match &loaded.path {
        Some(path) => println!("{} {}", "Config:".bold(), path.display()),
        None => println!("{} {}", "Config:".bold(), "defaults (no config file)".dimmed()),
    }
    for (service, config) in services(&loaded.config) {
        let key = if config.has_api_key() {
            "API key set".green()
        } else {
            "API key missing".yellow()
        };
        println!(
            "  {:<7} {} ({})",
            service.display_name(),
            config.api_root(),
            key
        );
    }
    println!(
        "  {:<7} {:?}, {}s timeout",
        "Format",
        loaded.config.server.response_format,
        loaded.config.server.request_timeout_secs
    );
}

/// Query `system/status` of every service with an API key. Returns false if
/// any of them failed.
fn check_services(config: &Config) -> Result<bool> {
    let http = build_http_client(config.server.request_timeout_secs)
        .context("Failed to build HTTP client")?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let mut healthy = true;
    for (service, service_config) in services(config) {
        if !service_config.has_api_key() {
            println!(
                "{} {}: skipped (no API key)",
                "-".dimmed(),
                service.display_name()
            );
            continue;
        }
        let client = ArrClient::new(http.clone(), service, service_config);
        match runtime.block_on(client.system_status()) {
            Ok(status) => println!(
                "{} {}: v{}",
                "✓".green(),
                service.display_name(),
                status.version.as_deref().unwrap_or("unknown")
            ),
            Err(err) => {
                healthy = false;
                println!("{} {}", "✗".red(), err);
            }
        }
    }
    Ok(healthy)
}

fn services(config: &Config) -> [(Service, &ServiceConfig); 2] {
    [
        (Service::Radarr, &config.radarr_config),
        (Service::Sonarr, &config.sonarr_config),
    ]
}

fn configure(cmd: ConfigureCommand, config_path: Option<PathBuf>) -> Result<ExitStatus> {
    let path = match config_path {
        Some(path) => path,
        None => default_config_path().context("Could not determine the home directory")?,
    };

    // Environment overrides must not end up in the file, and an invalid
    // stored value must stay fixable.
    let mut config = read_stored_config(&path)?;
    apply_configure(&mut config, cmd);
    config.validate()?;
    save_config(&config, &path)?;

    println!("{} {}", "Saved".green().bold(), path.display());
    Ok(ExitStatus::Success)
}

/// Merge the given flags into `config`; absent flags keep current values.
pub(crate) fn apply_configure(config: &mut Config, cmd: ConfigureCommand) {
    let ConfigureCommand {
        radarr_url,
        radarr_api_key,
        radarr_base_path,
        sonarr_url,
        sonarr_api_key,
        sonarr_base_path,
        format,
    } = cmd;

    merge_service(
        &mut config.radarr_config,
        radarr_url,
        radarr_api_key,
        radarr_base_path,
    );
    merge_service(
        &mut config.sonarr_config,
        sonarr_url,
        sonarr_api_key,
        sonarr_base_path,
    );
    if let Some(format) = format {
        config.server.response_format = format;
    }
}

fn merge_service(
    service: &mut ServiceConfig,
    url: Option<String>,
    api_key: Option<String>,
    base_path: Option<String>,
) {
    if let Some(url) = url {
        service.url = url;
    }
    if let Some(api_key) = api_key {
        service.api_key = api_key;
    }
    if let Some(base_path) = base_path {
        service.base_path = base_path;
    }
}
