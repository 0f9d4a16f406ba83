//! Core library for tweet-weight.
//!
//! This crate computes the weighted length of short-form social text, decides
//! whether it fits a posting budget, and reports which prefix of the text is
//! valid, with ranges in the UTF-16 code units client widgets use.
//!
//! # Modules
//!
//! - [`parse`] - The [`parse_tweet`] entry point and [`ParsedResult`]
//! - [`scan`] - Single-pass weighted-length scanner
//! - [`offsets`] - Code-point to UTF-16 range conversion
//! - [`weighting`] - Weighting configuration, presets, and weight lookup
//! - [`urls`] / [`emoji`] - Entity extraction
//! - [`validity`] - Disallowed characters
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use tweet_weight_core::{WeightingConfig, parse_tweet};
//!
//! let result = parse_tweet("Hello, world! 👋", &WeightingConfig::v3());
//! assert!(result.valid);
//! assert_eq!(result.weighted_length, 16);
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod dictionaries;
pub mod emoji;
pub mod error;
pub mod offsets;
pub mod parse;
pub mod scan;
pub mod span;
pub mod urls;
pub mod validity;
pub mod weighting;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use emoji::extract_emojis_with_indices;
pub use error::{ConfigError, ConfigResult};
pub use parse::{ParsedResult, normalize, parse_tweet};
pub use span::Span;
pub use urls::extract_urls_with_indices;
pub use validity::has_invalid_characters;
pub use weighting::{Preset, WeightRange, WeightingConfig};

/// Default maximum input size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
