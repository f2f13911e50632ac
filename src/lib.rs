//! # flick-finder
//!
//! Finds a random Flickr photo by text phrase or by geographic bounding box.
//!
//! ```rust,ignore
//! use flick_finder::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> flick_finder::Result<()> {
//!     let client = FlickrClient::with_api_key(DEFAULT_BASE_URL.to_string(), key)?;
//!     let (service, mut events) = SearchService::new(client, CountField::Total);
//!     service.search(SearchInput::phrase("cat"), &mut RandomIndex::new()).await;
//!     let event = events.recv().await;
//!     Ok(())
//! }
//! ```

pub use error::AppError;

/// Main architecture layers (dependency flow: CLI → Core → Storage)
pub mod cli; // Command-line interface
pub mod core; // Search pipeline
pub mod storage; // Configuration and API key persistence

/// Support modules (used across layers)
pub mod api; // Flickr REST client
pub mod display; // Presentation state and output formatting
pub mod error; // Error handling
pub mod utils; // Shared utilities and helpers

pub mod prelude {
    pub use crate::Result;
    pub use crate::api::client::{DEFAULT_BASE_URL, FlickrClient};
    pub use crate::core::query::{BoundingBox, QueryParameters, SearchInput};
    pub use crate::core::selector::{FixedIndex, IndexSource, RandomIndex};
    pub use crate::core::services::search_service::SearchService;
    pub use crate::core::services::types::{DisplayUpdate, SearchEvent};
    pub use crate::display::DisplayState;
    pub use crate::error::{AppError, SearchError};
    pub use crate::storage::config::{Config, CountField, Profile};
}

pub type Result<T> = std::result::Result<T, AppError>;
