use crate::core::query::QueryParameters;
use crate::error::{ApiError, SearchError};
use crate::utils::error_helpers::{convert_image_error, convert_request_error};
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.flickr.com/services/rest/";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("flick-finder/", env!("CARGO_PKG_VERSION"));
const SEARCH_ENDPOINT: &str = "flickr.photos.search";

/// What came back from one GET, before any validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
    pub endpoint: String,
}

#[derive(Debug, Clone)]
pub struct FlickrClient {
    client: Client,
    pub base_url: String,
    pub api_key: Option<String>,
}

impl FlickrClient {
    // Create baseClient with default settings
    pub fn new(base_url: String) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::ClientInit {
                message: e.to_string(),
            })?;

        Ok(FlickrClient {
            client,
            base_url,
            api_key: None,
        })
    }

    pub fn with_api_key(base_url: String, api_key: String) -> Result<Self, ApiError> {
        let mut client = FlickrClient::new(base_url)?;
        client.api_key = Some(api_key);
        Ok(client)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }

    /// Full request URL: base endpoint followed by the escaped query string
    pub fn search_url(&self, params: &QueryParameters) -> String {
        format!("{}{}", self.base_url, escaped_parameters(params))
    }

    /// Issue the search GET. Only transport failures are errors here; status
    /// and body checks belong to the response guard chain.
    pub async fn dispatch(&self, params: &QueryParameters) -> Result<RawResponse, SearchError> {
        let url = self.search_url(params);
        log::debug!("GET {} ({})", self.base_url, SEARCH_ENDPOINT);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| convert_request_error(e, SEARCH_ENDPOINT))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| convert_request_error(e, SEARCH_ENDPOINT))?;

        Ok(RawResponse {
            status,
            body: body.to_vec(),
            endpoint: SEARCH_ENDPOINT.to_string(),
        })
    }

    /// Download the image bytes behind a `url_m` link
    pub async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, SearchError> {
        log::debug!("GET {} (image)", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| convert_image_error(url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(convert_image_error(
                url,
                format!("status code {}", status.as_u16()),
            ));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| convert_image_error(url, e.to_string()))?;

        if bytes.is_empty() {
            return Err(convert_image_error(url, "empty response body".to_string()));
        }

        Ok(bytes.to_vec())
    }
}

/// Encode parameters as `?k1=v1&k2=v2`, or an empty string when there are none
pub fn escaped_parameters(params: &QueryParameters) -> String {
    let url_vars: Vec<String> = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect();

    if url_vars.is_empty() {
        String::new()
    } else {
        format!("?{}", url_vars.join("&"))
    }
}
