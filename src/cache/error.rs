use std::{io::Error as IoError, string::FromUtf8Error};

use thiserror::Error;

use crate::parse::ParseError;

/// `Result<_, CacheError>`
pub type CacheResult<T> = Result<T, CacheError>;

/// Anything that could go wrong while encoding or decoding the binary
/// beatmap cache.
///
/// Truncated input surfaces as [`CacheError::Io`] with an
/// `UnexpectedEof` kind; a decode never returns a partial document.
#[derive(Debug, Error)]
pub enum CacheError {
    /// Some IO operation failed.
    #[error("IO error")]
    Io(#[from] IoError),
    /// The input does not start with the cache magic bytes.
    #[error("missing magic bytes, not a beatmap cache")]
    BadMagic,
    /// The cache was written by an incompatible format revision.
    #[error("unsupported cache format version `{0}`")]
    UnsupportedVersion(u16),
    /// A string field did not contain valid UTF-8.
    #[error("string field is not valid UTF-8")]
    InvalidString(#[from] FromUtf8Error),
    /// A stored field failed to re-parse, e.g. a raw hit object line.
    #[error("re-parsing a stored field failed")]
    Parse(#[from] ParseError),
}
