use crate::error::{SearchError, UtilsError};
use std::io;
use std::path::Path;

/// Helper functions for standardizing error conversions across the codebase
/// Convert reqwest errors to a transport failure with endpoint context
pub fn convert_request_error(error: reqwest::Error, endpoint: &str) -> SearchError {
    let message = if error.is_timeout() {
        format!("request timed out: {}", error)
    } else {
        error.to_string()
    };

    SearchError::Transport {
        endpoint: endpoint.to_string(),
        message,
    }
}

/// Image download failures keep the URL that was tried
pub fn convert_image_error(url: &str, message: String) -> SearchError {
    SearchError::ImageFetch {
        url: url.to_string(),
        message,
    }
}

/// Convert IO errors from writing output files
pub fn convert_output_error(error: io::Error, path: &Path) -> UtilsError {
    UtilsError::Output {
        path: path.to_string_lossy().to_string(),
        message: error.to_string(),
    }
}
