//! Error types for rendering and configuration.
//!
//! Building columns and tables cannot fail: every value has a width and a
//! rendering. The only failures come from the outside world, either the sink
//! a table is written to or the file a [`RenderConfig`](crate::RenderConfig)
//! is loaded from.

use std::io;
use std::path::PathBuf;

/// Error type for writing rendered tables.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The underlying I/O sink rejected a write.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A formatting sink failed without an I/O cause.
    #[error("formatting error")]
    Format(#[from] std::fmt::Error),
}

/// Errors raised while loading a [`RenderConfig`](crate::RenderConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration is not valid YAML or has fields of the wrong type.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),
}
