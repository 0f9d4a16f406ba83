//! Dictionaries for entity recognition.
//!
//! Provides the curated domain lists used by URL extraction.

pub mod tlds;
