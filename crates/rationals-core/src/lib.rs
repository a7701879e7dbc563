//! # rationals-core
//!
//! Exact rational arithmetic over fixed-width integers.
//!
//! This crate provides:
//! - A canonical rational type (`Rational`) stored in lowest terms
//! - Checked arithmetic that reports overflow instead of wrapping
//! - Stepping through ranges with rational steps (`Step`, `Stride`)
//!
//! ## Canonical Form
//!
//! - The denominator is always positive; the sign lives on the numerator
//! - Numerator and denominator are coprime, so `0/1` is the only zero
//! - Equality and hashing compare the reduced pair directly

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod gcd;
pub mod rational;
pub mod step;

#[cfg(test)]
mod proptests;

pub use error::{ParseRationalError, RationalError};
pub use gcd::gcd;
pub use rational::{Rational, MAX_DECIMAL_PLACES};
pub use step::{stride_through, stride_to, Step, Stride};
