//! Error type shared by every filter.

use std::io;

/// Errors raised while running a filter.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    /// A named input could not be opened.
    #[error("{name}: {source}")]
    Open {
        name: String,
        #[source]
        source: io::Error,
    },

    /// Reading from an already-open input failed.
    #[error("{name}: {source}")]
    Read {
        name: String,
        #[source]
        source: io::Error,
    },

    /// Writing to the output sink failed.
    #[error("write error: {0}")]
    Write(#[source] io::Error),

    /// A numeric count argument was not a positive integer.
    #[error("illegal {kind} count -- {value}")]
    InvalidCount { kind: &'static str, value: String },

    /// Operands or flags were combined in an unsupported way.
    #[error("{0}")]
    Usage(String),
}

impl FilterError {
    /// True when the error is a write to a closed pipe, which callers
    /// treat as a quiet end of output.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, FilterError::Write(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }

    /// Name the input of a read error raised below the point where the
    /// input name is known. Other errors pass through unchanged.
    pub fn in_input(self, input: &str) -> Self {
        match self {
            FilterError::Read { name, source } if name.is_empty() => FilterError::Read {
                name: input.to_string(),
                source,
            },
            other => other,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FilterError>;
