//! Tunable settings for the move search and the house rules.
//!
//! Everything has a default; a JSON file may override any subset of fields.

use crate::ai::Strategy;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ai: AiConfig,
    pub rules: RulesConfig,
}

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    // ========== Strategy ==========
    /// Search used on AI turns
    /// Default: exhaustive
    pub strategy: Strategy,

    // ========== Simple strategy ==========
    /// Words sampled from the dictionary per turn
    /// Default: 50
    pub sample_pool_size: usize,

    /// Shortest sampled word, in letters
    /// Default: 2
    pub min_sample_len: usize,

    /// Longest sampled word, in letters
    /// Default: 4
    pub max_sample_len: usize,

    // ========== Exhaustive strategy ==========
    /// Longest rack permutation tried
    /// Default: 7
    pub max_word_len: usize,

    /// Dictionary lookups in flight at once
    /// Default: 16
    pub lookup_concurrency: usize,

    // ========== Fallback ==========
    /// Tiles worth at most this much are swap candidates
    /// Default: 2
    pub swap_score_threshold: u32,

    /// Most tiles swapped in one turn
    /// Default: 3
    pub max_swap: usize,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Exhaustive,
            sample_pool_size: 50,
            min_sample_len: 2,
            max_sample_len: 4,
            max_word_len: 7,
            lookup_concurrency: 16,
            swap_score_threshold: 2,
            max_swap: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Swapped tiles go back into the bag after replacements are drawn.
    /// With `false` they leave the game.
    pub return_swapped_tiles: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            return_swapped_tiles: true,
        }
    }
}
