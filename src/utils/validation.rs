//! Input validation and sanitization utilities
//!
//! Validates configuration values and the API key before they are stored or
//! used.

use crate::error::CliError;

/// Check a Flickr REST endpoint before it is written to a profile
pub fn validate_url(url: &str) -> crate::Result<()> {
    let invalid = |reason: &str| -> crate::AppError {
        CliError::InvalidArguments(format!("Invalid URL '{}': {}", url, reason)).into()
    };

    if url.trim().is_empty() {
        return Err(invalid("URL cannot be empty"));
    }
    if url.chars().any(char::is_whitespace) {
        return Err(invalid("URL must not contain whitespace"));
    }

    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .ok_or_else(|| invalid("URL must start with http:// or https://"))?;
    if rest.is_empty() || rest.starts_with('/') {
        return Err(invalid("URL has no host"));
    }

    Ok(())
}

/// Validate API key format
pub fn validate_api_key(api_key: &str) -> crate::Result<()> {
    if api_key.is_empty() {
        return Err(CliError::InvalidArguments("API key cannot be empty".to_string()).into());
    }

    // Flickr keys are hex strings; anything else is a paste mistake
    if !api_key.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(CliError::InvalidArguments(
            "API key may only contain letters and digits".to_string(),
        )
        .into());
    }

    Ok(())
}
