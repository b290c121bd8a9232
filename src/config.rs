//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;

use crate::constants::{env as keys, limits};
use crate::error::{Error, Result};
use crate::types::{ColumnMode, SplitStyle};

/// Configuration for the aligner and the chart converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Longest chord line accepted, in characters
    pub max_line_len: usize,
    /// Hyphen or bare space at a mid-word split
    pub split_style: SplitStyle,
    /// How columns are counted
    pub column_mode: ColumnMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_line_len: limits::DEFAULT_MAX_LINE_LEN,
            split_style: SplitStyle::default(),
            column_mode: ColumnMode::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    ///
    /// Unset keys keep their defaults; set but unparsable keys are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(keys::MAX_LINE_LEN) {
            let len = raw.trim().parse::<usize>().map_err(|_| {
                Error::config(
                    format!("{} is not a number: {raw:?}", keys::MAX_LINE_LEN),
                    "Set it to a positive integer such as 512",
                )
            })?;
            config = config.with_max_line_len(len)?;
        }

        if let Some(raw) = lookup(keys::SPLIT_STYLE) {
            config.split_style = raw.parse()?;
        }

        if let Some(raw) = lookup(keys::COLUMN_MODE) {
            config.column_mode = raw.parse()?;
        }

        tracing::debug!(
            "Loaded config: max_line_len={}, split_style={}, column_mode={}",
            config.max_line_len,
            config.split_style,
            config.column_mode
        );

        Ok(config)
    }

    /// Replace the maximum line length, rejecting values too small to be useful
    pub fn with_max_line_len(mut self, len: usize) -> Result<Self> {
        if len < limits::MIN_MAX_LINE_LEN {
            let min = limits::MIN_MAX_LINE_LEN;
            return Err(Error::config(
                format!("maximum line length {len} is below {min}"),
                "Raise the limit; chord charts routinely run 80+ columns",
            ));
        }
        self.max_line_len = len;
        Ok(self)
    }
}
