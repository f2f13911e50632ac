//! Presentation state fed by search events
//!
//! The search pipeline never touches what is on screen. It sends
//! [`SearchEvent`]s and this state applies them, dropping any event that
//! belongs to a search older than one already applied.

use crate::core::services::types::{DisplayUpdate, SearchEvent};
use image::ImageReader;
use std::io::Cursor;

/// Image currently shown, with what could be learned from decoding its header
#[derive(Debug, Clone, PartialEq)]
pub struct ShownImage {
    pub bytes: Vec<u8>,
    pub source_url: String,
    pub format: Option<String>,
    pub dimensions: Option<(u32, u32)>,
}

impl ShownImage {
    pub fn decode(bytes: Vec<u8>, source_url: String) -> Self {
        let (format, dimensions) = match ImageReader::new(Cursor::new(&bytes)).with_guessed_format() {
            Ok(reader) => {
                let format = reader
                    .format()
                    .and_then(|f| f.extensions_str().first().copied())
                    .map(str::to_string);
                let dimensions = match reader.into_dimensions() {
                    Ok(dimensions) => Some(dimensions),
                    Err(e) => {
                        log::warn!("Could not decode image from {}: {}", source_url, e);
                        None
                    }
                };
                (format, dimensions)
            }
            Err(e) => {
                log::warn!("Could not read image from {}: {}", source_url, e);
                (None, None)
            }
        };

        Self {
            bytes,
            source_url,
            format,
            dimensions,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// Result of applying one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// Visible state changed
    Updated,
    /// Accepted, but nothing visible changed (pipeline failure)
    Unchanged,
    /// Older than an already applied event, ignored
    Stale,
}

#[derive(Debug, Clone, Default)]
pub struct DisplayState {
    latest_token: Option<u64>,
    image: Option<ShownImage>,
    title: Option<String>,
    status: Option<StatusMessage>,
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn image(&self) -> Option<&ShownImage> {
        self.image.as_ref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn latest_token(&self) -> Option<u64> {
        self.latest_token
    }

    pub fn apply(&mut self, event: SearchEvent) -> Applied {
        if self.latest_token.is_some_and(|latest| event.token < latest) {
            log::debug!(
                "Dropping result of search #{} (already showing #{})",
                event.token,
                self.latest_token.unwrap_or_default()
            );
            return Applied::Stale;
        }
        self.latest_token = Some(event.token);

        match event.update {
            DisplayUpdate::Photo {
                title,
                image,
                source_url,
            } => {
                self.image = Some(ShownImage::decode(image, source_url));
                self.title = Some(title);
                self.status = None;
                Applied::Updated
            }
            DisplayUpdate::NotFound { message } => {
                self.image = None;
                self.status = Some(StatusMessage {
                    text: message,
                    is_error: false,
                });
                Applied::Updated
            }
            DisplayUpdate::InvalidInput { message } => {
                self.status = Some(StatusMessage {
                    text: message,
                    is_error: true,
                });
                Applied::Updated
            }
            DisplayUpdate::Failed(_) => Applied::Unchanged,
        }
    }
}
