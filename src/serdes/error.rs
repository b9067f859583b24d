use std::io;

use thiserror::Error;

use crate::predicate::PredicateError;

/// Failure while encoding or decoding wire data.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Underlying reader or writer failed; truncated input surfaces here as
    /// [`io::ErrorKind::UnexpectedEof`].
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    /// A length prefix was negative.
    #[error("negative length prefix: {0}")]
    NegativeLength(i64),
    /// A length does not fit the field's prefix or exceeds the decode limit.
    #[error("length {len} exceeds limit {max}")]
    LengthTooLarge {
        /// Announced or actual length.
        len: u64,
        /// Largest length allowed for the field.
        max: usize,
    },
    /// Text field was not valid UTF-8.
    #[error("invalid utf-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    /// Operator name outside the six known enumerators.
    #[error("unknown compare operator: {0:?}")]
    UnknownOperator(String),
    /// Boolean byte other than `0` or `1`.
    #[error("invalid boolean byte: {0:#04x}")]
    InvalidBool(u8),
    /// Variable-length integer does not fit in 32 bits.
    #[error("malformed variable-length integer")]
    MalformedVarInt,
    /// Input continued past the end of the encoded value.
    #[error("{0} trailing bytes after encoded value")]
    TrailingBytes(usize),
    /// Decoded fields do not form a valid predicate.
    #[error(transparent)]
    Predicate(#[from] PredicateError),
}

impl CodecError {
    /// Whether the input ended in the middle of a field.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        matches!(self, CodecError::Io(err) if err.kind() == io::ErrorKind::UnexpectedEof)
    }
}
