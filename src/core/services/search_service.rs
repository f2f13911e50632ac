use super::traits::PhotoSearchApi;
use super::types::{DisplayUpdate, SearchEvent};
use crate::core::query::{QueryParameters, SearchInput};
use crate::core::response::{ParsedSearch, parse_search_response};
use crate::core::selector::{IndexSource, select_photo};
use crate::error::{SearchError, UtilsError};
use crate::storage::config::CountField;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

/// Runs the search pipeline and reports every outcome as a [`SearchEvent`]
pub struct SearchService<A: PhotoSearchApi> {
    api: A,
    count_field: CountField,
    next_token: AtomicU64,
    last_parameters: Mutex<Option<QueryParameters>>,
    sender: UnboundedSender<SearchEvent>,
}

impl<A: PhotoSearchApi> SearchService<A> {
    /// Create the service together with the single consumer end of its event channel
    pub fn new(api: A, count_field: CountField) -> (Self, UnboundedReceiver<SearchEvent>) {
        let (sender, receiver) = unbounded_channel();
        let service = Self {
            api,
            count_field,
            next_token: AtomicU64::new(1),
            last_parameters: Mutex::new(None),
            sender,
        };
        (service, receiver)
    }

    /// Parameters of the most recently dispatched search
    pub fn last_parameters(&self) -> Option<QueryParameters> {
        self.last_parameters
            .lock()
            .ok()
            .and_then(|guard| guard.clone())
    }

    /// Run one search and emit exactly one event for it. Returns the event's token.
    pub async fn search(
        &self,
        input: SearchInput,
        source: &mut (dyn IndexSource + Send),
    ) -> u64 {
        let token = self.next_token.fetch_add(1, Ordering::SeqCst);
        log::debug!("Starting search #{}: {:?}", token, input);

        let update = self.run_pipeline(&input, source).await;
        if let DisplayUpdate::Failed(error) = &update {
            log::warn!("Search #{} failed ({}): {}", token, error.kind(), error);
            match error {
                SearchError::ApiStatus { body, .. } => log::debug!("Parsed body: {}", body),
                SearchError::MissingField { context, .. } => log::debug!("In: {}", context),
                _ => {}
            }
        }

        if self.sender.send(SearchEvent { token, update }).is_err() {
            log::warn!("Search #{} finished after the display was closed", token);
        }

        token
    }

    async fn run_pipeline(
        &self,
        input: &SearchInput,
        source: &mut (dyn IndexSource + Send),
    ) -> DisplayUpdate {
        let api_key = self.api.api_key().unwrap_or_default();
        let params = match QueryParameters::build(api_key, input) {
            Ok(params) => params,
            Err(UtilsError::Validation { message }) => {
                log::warn!("Rejected search input: {}", message);
                return DisplayUpdate::InvalidInput { message };
            }
            Err(other) => {
                return DisplayUpdate::InvalidInput {
                    message: other.to_string(),
                };
            }
        };

        if let Ok(mut last) = self.last_parameters.lock() {
            *last = Some(params.clone());
        }

        let outcome = self.api.search(&params).await;
        let photos = match parse_search_response(outcome, self.count_field) {
            Ok(ParsedSearch::Photos { count, photos }) => {
                log::debug!(
                    "{} = {}, {} photos on this page",
                    self.count_field.key(),
                    count,
                    photos.len()
                );
                photos
            }
            Ok(ParsedSearch::NoResults) => return not_found(&params),
            Err(error) => return DisplayUpdate::Failed(error),
        };

        let selected = match select_photo(&photos, source) {
            Some(Ok(selected)) => selected,
            Some(Err(error)) => return DisplayUpdate::Failed(error),
            None => return not_found(&params),
        };

        match self.api.fetch_image(&selected.image_url).await {
            Ok(image) => DisplayUpdate::Photo {
                title: selected.title,
                image,
                source_url: selected.image_url,
            },
            Err(error) => DisplayUpdate::Failed(error),
        }
    }
}

fn not_found(params: &QueryParameters) -> DisplayUpdate {
    DisplayUpdate::NotFound {
        message: format!("Cannot find photos with {}", params.search_term()),
    }
}
