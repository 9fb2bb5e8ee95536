use core::fmt;

use thiserror::Error;

/// A specialized [`Result`][core::result::Result] for codec
/// operations.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// An error returned by the codec.
///
/// Every error is detected synchronously and returned to the
/// immediate caller. The codec never retries or recovers.
#[derive(Error, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A value is outside of its documented domain.
    #[error("{what} {value} is outside of [{min}, {max}]")]
    Range {
        /// What was out of range.
        what: &'static str,
        /// The offending value.
        value: i64,
        /// The smallest allowed value.
        min: i64,
        /// The largest allowed value.
        max: i64,
    },

    /// A bit sequence has the wrong length for its role.
    #[error("{what} must be {expected} bits long, got {actual}")]
    Length {
        /// The role of the bit sequence.
        what: &'static str,
        /// A description of the allowed lengths.
        expected: &'static str,
        /// The actual length.
        actual: usize,
    },

    /// A decoded nibble or MSD is larger than 9.
    #[error("invalid decimal digit {digit}: must be in [0, 9]")]
    InvalidDigit {
        /// The offending digit.
        digit: u8,
    },

    /// A character in a bit string is neither `0` nor `1`.
    #[error("invalid bit {found:?}: must be '0' or '1'")]
    InvalidBit {
        /// The offending character.
        found: char,
    },

    /// A decimal literal is malformed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    pub(crate) const fn range(what: &'static str, value: i64, min: i64, max: i64) -> Self {
        Self::Range {
            what,
            value,
            min,
            max,
        }
    }

    pub(crate) const fn length(what: &'static str, expected: &'static str, actual: usize) -> Self {
        Self::Length {
            what,
            expected,
            actual,
        }
    }

    pub(crate) const fn invalid_digit(digit: u8) -> Self {
        Self::InvalidDigit { digit }
    }
}

/// An error returned when parsing a decimal from a string.
#[derive(Error, Clone, Debug, Eq, PartialEq)]
#[error("{kind}")]
pub struct ParseError {
    kind: ErrorKind,
}

impl ParseError {
    pub(crate) const fn empty() -> Self {
        Self {
            kind: ErrorKind::Empty,
        }
    }

    pub(crate) const fn invalid(reason: &'static str) -> Self {
        Self {
            kind: ErrorKind::Invalid(reason),
        }
    }

    /// Reports whether the input was empty.
    pub const fn is_empty(&self) -> bool {
        matches!(self.kind, ErrorKind::Empty)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum ErrorKind {
    Empty,
    Invalid(&'static str),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "cannot parse decimal from empty string"),
            Self::Invalid(reason) => write!(f, "invalid decimal literal: {reason}"),
        }
    }
}
