use crate::error::SearchError;

/// What the presentation layer should do after a search
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayUpdate {
    /// Show the image and its title, clearing any status text
    Photo {
        title: String,
        image: Vec<u8>,
        source_url: String,
    },
    /// Clear the image and show a "not found" message
    NotFound { message: String },
    /// Input was rejected before any request was made
    InvalidInput { message: String },
    /// The search was abandoned; display state stays as it was
    Failed(SearchError),
}

/// One search result on the way to the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub struct SearchEvent {
    /// Monotonically increasing per service; later searches carry larger tokens
    pub token: u64,
    pub update: DisplayUpdate,
}
