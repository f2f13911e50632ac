use crate::api::client::FlickrClient;
use crate::cli::main_types::{AuthCommands, ConfigCommands, SearchCommands};
use crate::core::query::SearchInput;
use crate::core::selector::RandomIndex;
use crate::core::services::config_service::ConfigService;
use crate::core::services::search_service::SearchService;
use crate::core::services::types::DisplayUpdate;
use crate::display::{
    DisplayState, OperationStatus, ProgressSpinner, display_status, photo_table, profiles_table,
};
use crate::error::{AppError, CliError, UtilsError};
use crate::storage::config::Profile;
use crate::storage::credentials::{API_KEY_ENV, Credentials, KeySource};
use crate::utils::error_helpers::convert_output_error;
use crate::utils::validation::validate_api_key;
use std::path::{Path, PathBuf};

#[derive(Default)]
pub struct SearchHandler;

impl SearchHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(
        &self,
        command: SearchCommands,
        profile_name: &str,
        profile: &Profile,
        credentials: &Credentials,
    ) -> Result<(), AppError> {
        let (input, output, seed) = match command {
            SearchCommands::Phrase { text, output, seed } => {
                (SearchInput::phrase(text), output, seed)
            }
            SearchCommands::Location {
                lat,
                lon,
                output,
                seed,
            } => (SearchInput::location(lat, lon), output, seed),
        };

        let api_key = credentials.api_key().ok_or_else(|| CliError::ApiKeyRequired {
            profile: profile_name.to_string(),
            hint: format!(
                "'flick-finder auth set-key' to store a key, or set {}",
                API_KEY_ENV
            ),
        })?;

        let client = FlickrClient::with_api_key(profile.base_url.clone(), api_key.to_string())?;
        let (service, mut events) = SearchService::new(client, profile.count_field);
        let mut source = match seed {
            Some(seed) => RandomIndex::seeded(seed),
            None => RandomIndex::new(),
        };

        let mut spinner = ProgressSpinner::new("Searching Flickr...".to_string());
        spinner.start();
        service.search(input, &mut source).await;
        spinner.stop();

        let mut state = DisplayState::new();
        while let Ok(event) = events.try_recv() {
            let update = event.update.clone();
            state.apply(event);
            render_update(update, &state, output.as_deref())?;
        }

        Ok(())
    }
}

fn render_update(
    update: DisplayUpdate,
    state: &DisplayState,
    output: Option<&Path>,
) -> Result<(), AppError> {
    match update {
        DisplayUpdate::Photo { .. } => {
            let (Some(image), Some(title)) = (state.image(), state.title()) else {
                return Ok(());
            };

            let saved_to = match output {
                Some(path) => {
                    write_image(path, &image.bytes)?;
                    Some(path.display().to_string())
                }
                None => None,
            };

            println!("{}", photo_table(title, image, saved_to.as_deref()));
            Ok(())
        }
        DisplayUpdate::NotFound { message } => {
            display_status(&message, OperationStatus::Info, false);
            Ok(())
        }
        DisplayUpdate::InvalidInput { message } => {
            Err(CliError::InvalidArguments(message).into())
        }
        DisplayUpdate::Failed(error) => {
            // Nothing on screen changes; the exit status still reports the failure
            log::warn!("Search abandoned ({}), display unchanged", error.kind());
            Err(error.into())
        }
    }
}

fn write_image(path: &Path, bytes: &[u8]) -> Result<(), UtilsError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| convert_output_error(e, parent))?;
    }
    std::fs::write(path, bytes).map_err(|e| convert_output_error(e, path))
}

#[derive(Default)]
pub struct AuthHandler;

impl AuthHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(
        &self,
        command: AuthCommands,
        credentials: &Credentials,
    ) -> Result<(), AppError> {
        let profile_name = credentials.profile_name.as_str();

        match command {
            AuthCommands::SetKey { key } => {
                log::debug!("Storing API key for profile {}", profile_name);
                let key = match key {
                    Some(key) => key,
                    None => rpassword::prompt_password("Flickr API key: ").map_err(|e| {
                        UtilsError::InputProcessing {
                            message: format!("Failed to read API key: {}", e),
                        }
                    })?,
                };
                let key = key.trim();
                validate_api_key(key)?;

                Credentials::save_api_key(profile_name, key)?;
                display_status(
                    &format!("Stored API key for profile '{}'", profile_name),
                    OperationStatus::Success,
                    false,
                );
                Ok(())
            }
            AuthCommands::Clear => {
                log::debug!("Clearing API key for profile {}", profile_name);
                Credentials::clear_api_key(profile_name)?;
                display_status(
                    &format!("Removed API key for profile '{}'", profile_name),
                    OperationStatus::Success,
                    false,
                );
                Ok(())
            }
            AuthCommands::Status => {
                println!("API Key Status:");
                println!("===============");
                println!("Profile: {}", profile_name);

                let source = match credentials.source() {
                    KeySource::Override => format!("--api-key / {}", API_KEY_ENV),
                    KeySource::Keyring => "OS keyring".to_string(),
                    KeySource::Missing => "(not set)".to_string(),
                };
                println!("Source: {}", source);

                if let Some(masked) = credentials.masked_key() {
                    println!("API Key: {}", masked);
                }

                Ok(())
            }
        }
    }
}

#[derive(Default)]
pub struct ConfigHandler;

impl ConfigHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(
        &self,
        command: ConfigCommands,
        config_service: &mut ConfigService,
        profile_name: &str,
        config_path: Option<PathBuf>,
    ) -> Result<(), AppError> {
        match command {
            ConfigCommands::Show => {
                println!("Current Configuration:");
                println!("=====================");
                if let Some(path) = config_path.or_else(|| {
                    crate::storage::config::Config::config_file_path().ok()
                }) {
                    println!("File: {}", path.display());
                }
                println!("Active Profile: {}", profile_name);

                let profiles = config_service.list_profiles();
                if profiles.is_empty() {
                    println!("  No profiles configured");
                } else {
                    let default_profile = config_service.get_default_profile();
                    println!("{}", profiles_table(profiles, default_profile));
                }

                Ok(())
            }
            ConfigCommands::Set { field, value } => {
                log::debug!(
                    "Setting config field {} = {} on profile {}",
                    field,
                    value,
                    profile_name
                );
                config_service.set_profile_field(profile_name, &field, &value)?;
                config_service.save_config(config_path)?;
                display_status(
                    &format!("Set profile '{}' {} to: {}", profile_name, field, value),
                    OperationStatus::Success,
                    false,
                );
                Ok(())
            }
        }
    }
}
