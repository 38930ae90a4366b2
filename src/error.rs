//! Error types for deck operations.

use thiserror::Error;

/// Errors that can occur while dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Requested hand is larger than the deck.
    #[error("cannot deal {requested} cards from a deck of {available}")]
    HandSizeOutOfRange {
        /// Requested hand size.
        requested: usize,
        /// Cards in the deck.
        available: usize,
    },
}

/// Errors that can occur while saving or loading a deck.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum StoreError {
    /// The deck file could not be written.
    #[error("failed to write deck to {}", .path.display())]
    Write {
        /// Target path.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The deck file could not be read.
    #[error("failed to read deck from {}", .path.display())]
    Read {
        /// Source path.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The deck file is not valid UTF-8.
    #[error("deck file {} is not valid UTF-8", .path.display())]
    Encoding {
        /// Source path.
        path: std::path::PathBuf,
    },
}

#[cfg(feature = "std")]
impl StoreError {
    /// Returns the path involved in the failed operation.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Write { path, .. } | Self::Read { path, .. } | Self::Encoding { path } => path,
        }
    }

    /// Returns the underlying I/O error kind, if any.
    #[must_use]
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            Self::Write { source, .. } | Self::Read { source, .. } => Some(source.kind()),
            Self::Encoding { .. } => None,
        }
    }
}
