//! Error types for loading datasets and computing statistics.

use std::io;

/// Errors that can occur while loading numbers.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The source could not be read.
    #[error("Failed to read {source_name}: {source}")]
    Read {
        source_name: String,
        #[source]
        source: io::Error,
    },

    /// A token is not a valid integer.
    #[error("{source_name}:{line}: '{token}' is not an integer")]
    Parse {
        source_name: String,
        line: usize,
        token: String,
    },
}

impl LoadError {
    /// Create a read error for the named source.
    pub fn read(source_name: impl Into<String>, source: io::Error) -> Self {
        Self::Read {
            source_name: source_name.into(),
            source,
        }
    }

    /// Create a parse error for a token on a 1-based line.
    pub fn parse(source_name: impl Into<String>, line: usize, token: impl Into<String>) -> Self {
        Self::Parse {
            source_name: source_name.into(),
            line,
            token: token.into(),
        }
    }
}

/// Errors that can occur while computing statistics.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum StatsError {
    /// Statistics need at least one value.
    #[error("No data loaded. Provide numbers as files, stdin or --number.")]
    EmptyDataset,
}
