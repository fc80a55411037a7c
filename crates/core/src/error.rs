//! Library error type covering the argument, algorithm, encoding, and I/O failure kinds.

use thiserror::Error;

/// Errors reported by the salthash core operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A caller-supplied value is outside its documented domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested digest algorithm name is not supported.
    #[error("unsupported digest algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// The requested text encoding name is not recognized.
    #[error("unsupported text encoding: {0}")]
    UnsupportedEncoding(String),

    /// Reading a stream source failed.
    #[error("failed to read digest input")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
