use crate::cli::command_handlers::{AuthHandler, ConfigHandler, SearchHandler};
use crate::cli::main_types::Commands;
use crate::core::services::config_service::ConfigService;
use crate::error::AppError;
use crate::storage::config::{Config, Profile};
use crate::storage::credentials::Credentials;
use std::path::PathBuf;

pub struct Dispatcher {
    config: Config,
    config_path: Option<PathBuf>,
    profile_name: String,
    credentials: Credentials,
}

impl Dispatcher {
    pub fn new(
        config: Config,
        config_path: Option<PathBuf>,
        profile_name: String,
        credentials: Credentials,
    ) -> Self {
        log::debug!(
            "Dispatcher ready for profile {} (key source: {:?})",
            profile_name,
            credentials.source()
        );

        Self {
            config,
            config_path,
            profile_name,
            credentials,
        }
    }

    fn active_profile(&self) -> Profile {
        self.config
            .get_profile(&self.profile_name)
            .cloned()
            .unwrap_or_default()
    }

    /// Whether errors for the active profile are shown highlighted
    pub fn highlight_errors(&self) -> bool {
        self.active_profile().highlight_errors
    }

    pub async fn dispatch(self, command: Commands) -> Result<(), AppError> {
        match command {
            Commands::Search { command } => {
                log::debug!("Running search command");
                let profile = self.active_profile();
                SearchHandler::new()
                    .handle(command, &self.profile_name, &profile, &self.credentials)
                    .await
            }
            Commands::Auth { command } => {
                log::debug!("Running auth command");
                AuthHandler::new().handle(command, &self.credentials).await
            }
            Commands::Config { command } => {
                log::debug!("Running config command");
                let mut config_service = ConfigService::new(self.config);
                ConfigHandler::new()
                    .handle(
                        command,
                        &mut config_service,
                        &self.profile_name,
                        self.config_path,
                    )
                    .await
            }
        }
    }
}
