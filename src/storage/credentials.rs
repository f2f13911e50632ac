use super::Result;

#[cfg(not(test))]
use keyring::Entry;

pub const API_KEY_ENV: &str = "FLICKR_API_KEY";
#[cfg(not(test))]
const KEYRING_SERVICE: &str = "flick-finder";

/// Where the active API key came from
#[derive(Debug, Clone, PartialEq)]
pub enum KeySource {
    /// `--api-key` flag or `FLICKR_API_KEY`
    Override,
    Keyring,
    Missing,
}

#[derive(Debug, Clone)]
pub struct Credentials {
    api_key: Option<String>,
    source: KeySource,
    pub profile_name: String,
}

impl Credentials {
    pub fn new(profile_name: String) -> Self {
        Self {
            api_key: None,
            source: KeySource::Missing,
            profile_name,
        }
    }

    /// Resolve the API key: an explicit override wins, then the keyring entry
    pub fn load(profile_name: &str, override_key: Option<String>) -> Result<Self> {
        let mut credentials = Self::new(profile_name.to_string());

        if let Some(key) = override_key.filter(|key| !key.is_empty()) {
            credentials.api_key = Some(key);
            credentials.source = KeySource::Override;
            return Ok(credentials);
        }

        if let Some(key) = credentials.load_key()? {
            credentials.api_key = Some(key);
            credentials.source = KeySource::Keyring;
        }

        Ok(credentials)
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn source(&self) -> &KeySource {
        &self.source
    }

    /// Key with everything but the first and last four characters hidden
    pub fn masked_key(&self) -> Option<String> {
        self.api_key.as_ref().map(|key| {
            if key.len() > 8 && key.is_ascii() {
                format!("{}...{}", &key[..4], &key[key.len() - 4..])
            } else {
                "*****".to_string()
            }
        })
    }

    pub fn save_api_key(profile_name: &str, key: &str) -> Result<()> {
        let credentials = Self::new(profile_name.to_string());
        credentials.store_key(key)
    }

    pub fn clear_api_key(profile_name: &str) -> Result<()> {
        let credentials = Self::new(profile_name.to_string());
        credentials.delete_key()
    }

    #[cfg(not(test))]
    fn entry(&self) -> Result<Entry> {
        Entry::new(KEYRING_SERVICE, &format!("api-key-{}", self.profile_name))
            .map_err(|e| crate::error::StorageError::KeyringError(e.to_string()))
    }

    #[cfg(not(test))]
    fn load_key(&self) -> Result<Option<String>> {
        match self.entry()?.get_password() {
            Ok(v) => Ok(Some(v)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(crate::error::StorageError::KeyringError(e.to_string())),
        }
    }

    #[cfg(not(test))]
    fn store_key(&self, key: &str) -> Result<()> {
        self.entry()?
            .set_password(key)
            .map_err(|e| crate::error::StorageError::KeyringError(e.to_string()))
    }

    #[cfg(not(test))]
    fn delete_key(&self) -> Result<()> {
        match self.entry()?.delete_credential() {
            Ok(_) => Ok(()),
            // Nothing stored is fine for a clear
            Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(crate::error::StorageError::KeyringError(e.to_string())),
        }
    }

    #[cfg(test)]
    fn load_key(&self) -> Result<Option<String>> {
        log::debug!("MOCK: Loading api key for profile {}", self.profile_name);
        Ok(None)
    }

    #[cfg(test)]
    fn store_key(&self, key: &str) -> Result<()> {
        log::debug!(
            "MOCK: Saving api key ({} chars) for profile {}",
            key.len(),
            self.profile_name
        );
        Ok(())
    }

    #[cfg(test)]
    fn delete_key(&self) -> Result<()> {
        log::debug!("MOCK: Deleting api key for profile {}", self.profile_name);
        Ok(())
    }
}
