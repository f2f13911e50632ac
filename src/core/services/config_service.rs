use crate::AppError;
use crate::error::ConfigError;
use crate::storage::config::{Config, CountField, Profile};
use std::path::PathBuf;

/// Configuration service for managing application configuration
pub struct ConfigService {
    config: Config,
}

impl ConfigService {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn get_profile(&self, name: &str) -> Option<&Profile> {
        self.config.profiles.get(name)
    }

    pub fn get_default_profile(&self) -> &str {
        self.config.default_profile.as_deref().unwrap_or("default")
    }

    /// Set a profile field by its user-facing name, creating the profile if needed
    pub fn set_profile_field(
        &mut self,
        profile: &str,
        field: &str,
        value: &str,
    ) -> Result<(), AppError> {
        let profile_entry = self
            .config
            .profiles
            .entry(profile.to_string())
            .or_default();

        match field {
            "url" => {
                crate::utils::validation::validate_url(value)?;
                profile_entry.base_url = value.to_string();
            }
            "count-field" => {
                profile_entry.count_field =
                    value
                        .parse::<CountField>()
                        .map_err(|reason| ConfigError::InvalidValue {
                            field: field.to_string(),
                            value: value.to_string(),
                            reason,
                        })?;
            }
            "highlight-errors" => {
                profile_entry.highlight_errors =
                    value
                        .parse::<bool>()
                        .map_err(|_| ConfigError::InvalidValue {
                            field: field.to_string(),
                            value: value.to_string(),
                            reason: "expected 'true' or 'false'".to_string(),
                        })?;
            }
            _ => {
                return Err(ConfigError::UnknownField {
                    field: field.to_string(),
                }
                .into());
            }
        }

        Ok(())
    }

    pub fn save_config(&self, path: Option<PathBuf>) -> Result<(), AppError> {
        self.config.save(path).map_err(|e| e.into())
    }

    /// Profiles sorted by name
    pub fn list_profiles(&self) -> Vec<(&String, &Profile)> {
        let mut profiles: Vec<_> = self.config.profiles.iter().collect();
        profiles.sort_by(|a, b| a.0.cmp(b.0));
        profiles
    }
}
