use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("ApiError: {0}")]
    Api(#[from] ApiError),
    #[error("SearchError: {0}")]
    Search(#[from] SearchError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
    #[error("UtilsError: {0}")]
    Utils(#[from] UtilsError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("API key required")]
    ApiKeyRequired { profile: String, hint: String },
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

/// Errors raised while talking to the HTTP layer itself, outside a search.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Failed to initialise HTTP client: {message}")]
    ClientInit { message: String },
}

/// Failure kinds of the search pipeline. Each one is terminal for the
/// search that produced it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("There was an error with your request: {message}")]
    Transport { endpoint: String, message: String },
    #[error("Your request returned an invalid response! Status code: {status}")]
    HttpStatus { status: u16, endpoint: String },
    #[error("No data was returned by the request")]
    EmptyBody { endpoint: String },
    #[error("Could not parse the data as JSON: '{raw}'")]
    JsonDecode { raw: String, message: String },
    #[error("Flickr API returned an error (stat = '{stat}'): {message}")]
    ApiStatus {
        stat: String,
        code: Option<i64>,
        message: String,
        body: String,
    },
    #[error("Cannot find key '{field}' in {context}")]
    MissingField { field: String, context: String },
    #[error("Image does not exist at {url}: {message}")]
    ImageFetch { url: String, message: String },
}

impl SearchError {
    /// Short, stable name of the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            SearchError::Transport { .. } => "transport",
            SearchError::HttpStatus { .. } => "http_status",
            SearchError::EmptyBody { .. } => "empty_body",
            SearchError::JsonDecode { .. } => "json_decode",
            SearchError::ApiStatus { .. } => "api_status",
            SearchError::MissingField { .. } => "missing_field",
            SearchError::ImageFetch { .. } => "image_fetch",
        }
    }
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Keyring error: {0}")]
    KeyringError(String),
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration save failed: {message}")]
    ConfigSaveFailed { message: String },
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown configuration field: {field}")]
    UnknownField { field: String },
    #[error("Invalid configuration value for '{field}': {value}: {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum UtilsError {
    #[error("Validation error: {message}")]
    Validation { message: String },
    #[error("Input processing error: {message}")]
    InputProcessing { message: String },
    #[error("Output error at {path}: {message}")]
    Output { path: String, message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            ErrorSeverity::Critical => "🚨",
            ErrorSeverity::High => "❌",
            ErrorSeverity::Medium => "⚠️",
            ErrorSeverity::Low => "ℹ️",
        }
    }
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Cli(CliError::ApiKeyRequired { .. }) => ErrorSeverity::High,
            AppError::Cli(_) => ErrorSeverity::Medium,
            AppError::Api(_) => ErrorSeverity::Critical,
            AppError::Search(_) => ErrorSeverity::Low,
            AppError::Config(_) => ErrorSeverity::High,
            AppError::Storage(_) => ErrorSeverity::Medium,
            AppError::Utils(_) => ErrorSeverity::Low,
        }
    }

    /// Search pipeline failures are logged and leave the display alone.
    /// Everything else is shown to the user.
    pub fn is_reported(&self) -> bool {
        !matches!(self, AppError::Search(_))
    }

    pub fn display_friendly(&self) -> String {
        match self {
            AppError::Cli(CliError::ApiKeyRequired { profile, .. }) => {
                format!("No Flickr API key configured for profile '{}'", profile)
            }
            AppError::Cli(CliError::InvalidArguments(message)) => message.clone(),
            _ => format!("{}", self),
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Cli(CliError::ApiKeyRequired { hint, .. }) => Some(hint.clone()),
            AppError::Api(ApiError::ClientInit { .. }) => {
                Some("Check the system TLS configuration and try again".to_string())
            }
            AppError::Config(ConfigError::UnknownField { .. }) => Some(
                "config set <url|count-field|highlight-errors> <value> to set a configuration value"
                    .to_string(),
            ),
            _ => None,
        }
    }
}
