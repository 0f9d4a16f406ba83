//! Weighting configuration and per-character weight lookup.
//!
//! A [`WeightingConfig`] describes how much each character, URL, and emoji
//! counts toward a post's weighted length. Weights are expressed in scaled
//! units: with `scale = 100`, a weight of `100` counts as one character and
//! `200` as two.
//!
//! Three published configurations are available as presets ([`Preset`]).
//! Callers always pass a configuration explicitly; nothing in this crate
//! reads a process-wide default.
//!
//! # Example
//!
//! ```
//! use tweet_weight_core::weighting::{WeightingConfig, character_weight};
//!
//! let config = WeightingConfig::v3();
//! assert_eq!(character_weight('a', &config), 100);
//! assert_eq!(character_weight('日', &config), 200);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// An inclusive range of code points sharing one weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct WeightRange {
    /// First code point in the range.
    pub start: u32,
    /// Last code point in the range (inclusive).
    pub end: u32,
    /// Weight of every code point in the range, in scaled units.
    pub weight: u32,
}

impl WeightRange {
    /// Create a new range.
    pub const fn new(start: u32, end: u32, weight: u32) -> Self {
        Self { start, end, weight }
    }

    /// Whether `code_point` falls inside this range.
    pub const fn contains(&self, code_point: u32) -> bool {
        self.start <= code_point && code_point <= self.end
    }
}

/// Ranges shared by the v2 and v3 configurations: Latin and common
/// punctuation count as one character, everything else as two.
const LATIN_RANGES: [WeightRange; 4] = [
    WeightRange::new(0, 4351, 100),
    WeightRange::new(8192, 8205, 100),
    WeightRange::new(8208, 8223, 100),
    WeightRange::new(8242, 8247, 100),
];

/// How weighted length is computed.
///
/// Deserializes from the snake_case keys below and from the camelCase keys
/// used by the published JSON configuration files. Every key except
/// `emoji_parsing_enabled` is required; a missing key is a configuration
/// error, never silently defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct WeightingConfig {
    /// Configuration format version.
    pub version: u32,
    /// Maximum weighted length (descaled) a valid text may have.
    #[serde(alias = "maxWeightedTweetLength")]
    pub max_weighted_tweet_length: u32,
    /// Multiplier between descaled lengths and the weights in `ranges`.
    pub scale: u32,
    /// Weight of any code point outside `ranges`, in scaled units.
    #[serde(alias = "defaultWeight")]
    pub default_weight: u32,
    /// Count each emoji cluster once instead of per code point.
    #[serde(default, alias = "emojiParsingEnabled")]
    pub emoji_parsing_enabled: bool,
    /// Descaled length charged for every URL, whatever its real length.
    #[serde(alias = "transformedURLLength")]
    pub transformed_url_length: u32,
    /// Sorted, non-overlapping weight ranges.
    pub ranges: Vec<WeightRange>,
}

impl WeightingConfig {
    /// Version 1: 140 characters, every code point weighs one.
    pub fn v1() -> Self {
        Self {
            version: 1,
            max_weighted_tweet_length: 140,
            scale: 1,
            default_weight: 1,
            emoji_parsing_enabled: false,
            transformed_url_length: 23,
            ranges: Vec::new(),
        }
    }

    /// Version 2: 280 weighted characters, CJK and emoji weigh two.
    pub fn v2() -> Self {
        Self {
            version: 2,
            max_weighted_tweet_length: 280,
            scale: 100,
            default_weight: 200,
            emoji_parsing_enabled: false,
            transformed_url_length: 23,
            ranges: LATIN_RANGES.to_vec(),
        }
    }

    /// Version 3: version 2 plus emoji clusters counted once.
    pub fn v3() -> Self {
        Self {
            version: 3,
            emoji_parsing_enabled: true,
            ..Self::v2()
        }
    }

    /// Parse a JSON weighting configuration and validate it.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON weighting configuration file and validate it.
    pub fn from_json_file(path: &camino::Utf8Path) -> ConfigResult<Self> {
        let json = std::fs::read_to_string(path.as_std_path()).map_err(|source| {
            ConfigError::WeightingFile {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Self::from_json_str(&json)
    }

    /// Check the invariants the parser relies on.
    ///
    /// `scale` and `max_weighted_tweet_length` must be non-zero, and `ranges`
    /// must be well-formed, sorted by `start`, and non-overlapping.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.scale == 0 {
            return Err(ConfigError::InvalidWeighting(
                "scale must be greater than zero".to_string(),
            ));
        }
        if self.max_weighted_tweet_length == 0 {
            return Err(ConfigError::InvalidWeighting(
                "max_weighted_tweet_length must be greater than zero".to_string(),
            ));
        }
        for range in &self.ranges {
            if range.start > range.end {
                return Err(ConfigError::InvalidWeighting(format!(
                    "range {}..={} starts after it ends",
                    range.start, range.end
                )));
            }
        }
        for pair in self.ranges.windows(2) {
            if pair[1].start <= pair[0].end {
                return Err(ConfigError::InvalidWeighting(format!(
                    "range {}..={} overlaps or precedes {}..={}",
                    pair[1].start, pair[1].end, pair[0].start, pair[0].end
                )));
            }
        }
        Ok(())
    }

    /// The maximum weighted length in scaled units.
    pub fn scaled_max(&self) -> u64 {
        u64::from(self.max_weighted_tweet_length) * u64::from(self.scale)
    }

    /// The weight charged for a URL, in scaled units.
    pub fn scaled_url_weight(&self) -> u64 {
        u64::from(self.transformed_url_length) * u64::from(self.scale)
    }
}

impl Default for WeightingConfig {
    fn default() -> Self {
        Self::v3()
    }
}

/// A published weighting configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Preset {
    /// 140 characters, uniform weights.
    V1,
    /// 280 weighted characters.
    V2,
    /// 280 weighted characters with emoji-aware counting.
    #[default]
    V3,
}

impl Preset {
    /// Returns the preset name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
            Self::V3 => "v3",
        }
    }

    /// Build the configuration this preset names.
    pub fn config(self) -> WeightingConfig {
        match self {
            Self::V1 => WeightingConfig::v1(),
            Self::V2 => WeightingConfig::v2(),
            Self::V3 => WeightingConfig::v3(),
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weight of a single character, in scaled units.
///
/// Returns the weight of the range containing `ch`, or
/// `config.default_weight` when no range does.
pub fn character_weight(ch: char, config: &WeightingConfig) -> u32 {
    let code_point = u32::from(ch);
    let idx = config
        .ranges
        .partition_point(|range| range.end < code_point);
    match config.ranges.get(idx) {
        Some(range) if range.contains(code_point) => range.weight,
        _ => config.default_weight,
    }
}
