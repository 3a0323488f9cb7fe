//! Unified error types for the chain registry.

use thiserror::Error;

/// Top-level error type.
///
/// Only text parsing and configuration loading can fail. Lookups keyed by a
/// typed [`ChainId`](crate::ChainId) are total, and URL builders report an
/// unsupported chain/provider pair as `None` rather than an error.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file could not be resolved, read, or parsed.
    #[error("config: {0}")]
    Config(String),

    /// Text did not name any chain in the registry.
    #[error("unknown chain identifier '{0}'")]
    UnknownChain(String),

    /// Text did not name a chain family.
    #[error("unknown chain family '{0}'")]
    UnknownFamily(String),

    /// Text did not name any supported RPC provider.
    #[error("unknown provider '{0}'")]
    UnknownProvider(String),

    /// Filesystem error with the operation that caused it.
    #[error("{context}: {source}")]
    Io {
        /// What was being attempted.
        context: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Builds an [`Error::Config`] from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Builds an [`Error::Io`] wrapping `source` with `context`.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}
