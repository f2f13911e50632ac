//! Storage layer for flick-finder
//!
//! TOML configuration with named profiles, and the Flickr API key kept in the
//! OS keyring.

use crate::error::StorageError;

pub mod config;
pub mod credentials;

type Result<T> = std::result::Result<T, StorageError>;
