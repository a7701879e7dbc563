//! Error types for rational construction, arithmetic and parsing.

use std::num::ParseIntError;
use thiserror::Error;

/// Errors that can occur while constructing or combining rationals.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum RationalError {
    /// A denominator of zero was supplied.
    #[error("rationals may not have a zero denominator")]
    ZeroDenominator,

    /// Division by, or inversion of, zero.
    #[error("division by zero")]
    DivisionByZero,

    /// An intermediate or final value does not fit in `i64`.
    #[error("arithmetic overflow: result does not fit in i64")]
    Overflow,

    /// NaN or an infinity was converted.
    #[error("{0} is not a finite number")]
    NonFinite(f64),

    /// The float needs more than `MAX_DECIMAL_PLACES` decimal places.
    #[error(
        "{0} has no exact decimal expansion within {max} decimal places",
        max = crate::MAX_DECIMAL_PLACES
    )]
    Inexact(f64),

    /// An integer outside the `i64` range was embedded.
    #[error("integer {0} does not fit in i64")]
    IntegerOutOfRange(String),
}

/// Errors returned by `"<numerator>/<denominator>".parse::<Rational>()`.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ParseRationalError {
    /// The input did not split into exactly two non-empty pieces.
    #[error("expected `<numerator>/<denominator>`, found {0:?}")]
    Malformed(String),

    /// One of the two pieces is not an integer.
    #[error("invalid integer {piece:?}: {source}")]
    InvalidInteger {
        /// The offending piece.
        piece: String,
        /// The underlying integer parse failure.
        #[source]
        source: ParseIntError,
    },

    /// The pieces parsed but do not form a valid rational.
    #[error(transparent)]
    Invalid(#[from] RationalError),
}
