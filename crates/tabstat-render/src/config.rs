//! Render configuration shared by every column of a report.
//!
//! The configuration fixes the three knobs that affect display widths:
//! how many fractional digits floats show, how many sequence elements fit
//! on one line, and what happens to the elements past that threshold. A
//! column measures its cells with the configuration it was built with, so
//! the same configuration must be used for measuring and rendering.
//!
//! Configurations can be loaded from YAML; missing keys keep their defaults.
//!
//! ```rust
//! use tabstat_render::{RenderConfig, SequenceOverflow};
//!
//! let config = RenderConfig::from_yaml("float_digits: 3\noverflow: truncate\n").unwrap();
//! assert_eq!(config.float_digits, 3);
//! assert_eq!(config.wrap_threshold, 10);
//! assert_eq!(config.overflow, SequenceOverflow::Truncate);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

/// Fractional digits shown for non-integral floats.
pub const DEFAULT_FLOAT_DIGITS: usize = 2;

/// Sequence elements per line before wrapping or truncating.
pub const DEFAULT_WRAP_THRESHOLD: usize = 10;

/// Console width assumed when none is detected or configured.
pub const DEFAULT_CONSOLE_WIDTH: usize = 120;

/// What a sequence does with the elements past the wrap threshold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SequenceOverflow {
    /// Break the line after every `wrap_threshold` elements.
    /// Continuation lines start at the left edge of the output.
    #[default]
    Wrap,
    /// Show the first `wrap_threshold` elements followed by `", ..."`.
    Truncate,
}

/// Formatting parameters for cells, columns and tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Fractional digits for floats that are not whole numbers.
    pub float_digits: usize,
    /// Maximum sequence elements per line. Zero is treated as one.
    pub wrap_threshold: usize,
    /// Policy for sequences longer than `wrap_threshold`.
    pub overflow: SequenceOverflow,
    /// Width of the console that centered tables are laid out in.
    pub console_width: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            float_digits: DEFAULT_FLOAT_DIGITS,
            wrap_threshold: DEFAULT_WRAP_THRESHOLD,
            overflow: SequenceOverflow::default(),
            console_width: DEFAULT_CONSOLE_WIDTH,
        }
    }
}

impl RenderConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of fractional digits.
    pub fn with_float_digits(mut self, digits: usize) -> Self {
        self.float_digits = digits;
        self
    }

    /// Set the wrap threshold for sequences.
    pub fn with_wrap_threshold(mut self, threshold: usize) -> Self {
        self.wrap_threshold = threshold;
        self
    }

    /// Set the overflow policy for long sequences.
    pub fn with_overflow(mut self, overflow: SequenceOverflow) -> Self {
        self.overflow = overflow;
        self
    }

    /// Set the console width.
    pub fn with_console_width(mut self, width: usize) -> Self {
        self.console_width = width;
        self
    }

    /// The effective wrap threshold, never below one.
    pub fn threshold(&self) -> usize {
        self.wrap_threshold.max(1)
    }

    /// Parse a configuration from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: RenderConfig = serde_yaml::from_str(yaml)?;
        debug!(?config, "parsed render config");
        Ok(config)
    }

    /// Read and parse a YAML configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loading render config");
        Self::from_yaml(&content)
    }
}

/// Detects the width of the attached terminal, if there is one.
pub fn terminal_width() -> Option<usize> {
    terminal_size::terminal_size().map(|(terminal_size::Width(w), _)| w as usize)
}
