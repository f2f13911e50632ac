//! Random photo selection

use crate::api::models::PhotoRecord;
use crate::error::SearchError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const UNTITLED: &str = "(Untitled)";

/// Source of uniformly distributed indices over `[0, count)`.
pub trait IndexSource {
    /// `count` is always greater than zero.
    fn pick(&mut self, count: usize) -> usize;
}

/// Production index source backed by a seedable RNG.
pub struct RandomIndex {
    rng: StdRng,
}

impl RandomIndex {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexSource for RandomIndex {
    fn pick(&mut self, count: usize) -> usize {
        self.rng.random_range(0..count)
    }
}

/// Always returns the same index, clamped to the list length.
#[derive(Debug, Clone, Copy)]
pub struct FixedIndex(pub usize);

impl IndexSource for FixedIndex {
    fn pick(&mut self, count: usize) -> usize {
        self.0.min(count - 1)
    }
}

/// The photo chosen for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedPhoto {
    pub title: String,
    pub image_url: String,
}

/// Pick one record at random and extract its title and `url_m`.
///
/// Returns `None` for an empty list so callers never draw an index over zero
/// items.
pub fn select_photo<S: IndexSource + ?Sized>(
    photos: &[PhotoRecord],
    source: &mut S,
) -> Option<Result<SelectedPhoto, SearchError>> {
    if photos.is_empty() {
        return None;
    }

    let index = source.pick(photos.len());
    log::debug!("Selected photo {} of {}", index, photos.len());
    let record = &photos[index];

    let selected = match record.url_m.as_deref().filter(|url| !url.is_empty()) {
        Some(url) => Ok(SelectedPhoto {
            title: record.title.clone().unwrap_or_else(|| UNTITLED.to_string()),
            image_url: url.to_string(),
        }),
        None => Err(SearchError::MissingField {
            field: "url_m".to_string(),
            context: record.raw.to_string(),
        }),
    };

    Some(selected)
}
