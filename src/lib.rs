//! # Rationals
//!
//! Exact rational numbers in canonical form, backed by `i64`.
//!
//! Every value is reduced to lowest terms with a positive denominator, so
//! equality, ordering and hashing work directly on the stored pair.
//! Fallible operations return [`RationalError`] instead of wrapping or
//! aborting.
//!
//! ## Quick Start
//!
//! ```rust
//! use rationals::prelude::*;
//!
//! let a = Rational::new(1, 2)?;
//! let b: Rational = "1/3".parse()?;
//! assert_eq!(a + b, Rational::new(5, 6)?);
//! assert_eq!((a + b).to_string(), "5//6");
//! assert!(a.try_div(Rational::ZERO).is_err());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use rationals_core as core;
pub use rationals_core::{ParseRationalError, Rational, RationalError};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use rationals_core::{
        stride_through, stride_to, ParseRationalError, Rational, RationalError, Step, Stride,
    };
}
