//! Utils module - Shared utilities and helpers
//!
//! This module provides utility functions and helpers that are used across
//! multiple layers of the application architecture.

/// Error conversion helpers for reqwest and IO failures
pub mod error_helpers;

/// Logger setup
pub mod logging;

/// Unicode-aware text truncation for terminal output
pub mod text;

/// Input validation and sanitization utilities
pub mod validation;
