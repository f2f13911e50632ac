use clap::Parser;
use flick_finder::cli::dispatcher::Dispatcher;
use flick_finder::cli::main_types::Cli;
use flick_finder::display::display_error;
use flick_finder::storage::config::{CONFIG_FILE_NAME, Config};
use flick_finder::storage::credentials::Credentials;
use flick_finder::utils::logging;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Load Config
    let config_path = cli
        .config_dir
        .as_ref()
        .map(|dir| PathBuf::from(dir).join(CONFIG_FILE_NAME));

    let mut config = match Config::load(config_path.clone()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error loading config: {}", err);
            std::process::exit(1);
        }
    };

    // Determine the profile to use
    let profile_name = cli
        .profile
        .or(config.default_profile.clone())
        .unwrap_or_else(|| "default".to_string());

    if config.ensure_profile(&profile_name) {
        log::debug!("Created profile: {}", profile_name);
        if let Err(err) = config.save(config_path.clone()) {
            log::warn!("Failed to save config: {}", err);
        }
    }

    log::debug!("Using profile: {}", profile_name);
    if let Some(config_dir) = &cli.config_dir {
        log::debug!("Using config directory: {}", config_dir);
    }

    // Load Credentials
    let credentials = match Credentials::load(&profile_name, cli.api_key) {
        Ok(creds) => creds,
        Err(err) => {
            log::warn!("Error loading credentials: {}", err);
            Credentials::new(profile_name.clone())
        }
    };

    let dispatcher = Dispatcher::new(config, config_path, profile_name, credentials);
    let highlight = dispatcher.highlight_errors();

    if let Err(e) = dispatcher.dispatch(cli.command).await {
        display_error(&e, highlight);
        std::process::exit(1);
    }

    Ok(())
}
