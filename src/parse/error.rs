use std::{
    io::Error as IoError,
    num::{ParseFloatError, ParseIntError},
};

use thiserror::Error;

/// `Result<_, ParseError>`
pub type ParseResult<T> = Result<T, ParseError>;

/// Anything that could go wrong while parsing a [`Beatmap`](crate::Beatmap).
#[derive(Debug, Error)]
pub enum ParseError {
    /// Wrapper around whatever failed during a load, carrying the
    /// beatmap's display name. This is the only variant that
    /// [`Beatmap::parse`](crate::Beatmap::parse) and
    /// [`Beatmap::from_path`](crate::Beatmap::from_path) return.
    #[error("failed to load beatmap `{name}`")]
    Load {
        name: String,
        #[source]
        source: Box<ParseError>,
    },
    /// Some IO operation failed.
    #[error("IO error")]
    Io(#[from] IoError),
    /// A field expected to be an integer was not.
    #[error("expected an integer")]
    InvalidInteger(#[from] ParseIntError),
    /// A field expected to be a decimal number was not.
    #[error("expected a decimal number")]
    InvalidDecimal(#[from] ParseFloatError),
    /// A comma-delimited line ended before a required field.
    #[error("line is missing the `{0}` field")]
    MissingField(&'static str),
    /// A line inside a key/value section carried no colon.
    #[error("expected a `key:value` pair")]
    BadLine,
    /// A sample set code outside of the known range.
    #[error("invalid sample set code `{0}`")]
    InvalidSampleSet(i32),
    /// The type flags of a hit object matched no known kind.
    #[error("unknown hit object type")]
    UnknownHitObjectKind,
}

impl ParseError {
    pub(crate) fn load(name: String, source: ParseError) -> Self {
        Self::Load {
            name,
            source: Box::new(source),
        }
    }
}
