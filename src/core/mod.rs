//! Core layer - the search pipeline
//!
//! Parameter building, response validation and photo selection live here as
//! plain functions; [`services::search_service::SearchService`] strings them
//! together around the two network calls.

pub mod query;
pub mod response;
pub mod selector;
pub mod services;
