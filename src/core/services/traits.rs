use crate::api::client::{FlickrClient, RawResponse};
use crate::core::query::QueryParameters;
use crate::error::SearchError;
use async_trait::async_trait;

/// The two network calls a search makes
#[async_trait]
pub trait PhotoSearchApi: Send + Sync {
    /// API key used to build query parameters
    fn api_key(&self) -> Option<&str>;

    /// Run the metadata search
    async fn search(&self, params: &QueryParameters) -> Result<RawResponse, SearchError>;

    /// Download the selected image
    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, SearchError>;
}

#[async_trait]
impl PhotoSearchApi for FlickrClient {
    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    async fn search(&self, params: &QueryParameters) -> Result<RawResponse, SearchError> {
        self.dispatch(params).await
    }

    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, SearchError> {
        FlickrClient::fetch_image(self, url).await
    }
}
