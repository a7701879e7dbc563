//! Exact rationals over `i64`.
//!
//! Every value is stored in lowest terms with a positive denominator, so
//! the `(numerator, denominator)` pair is unique per value. Construction and
//! arithmetic both end in one private reduction step, which is the only
//! place canonicalization happens.

use log::{debug, trace};
use num_traits::{
    CheckedAdd, CheckedDiv, CheckedMul, CheckedNeg, CheckedSub, FromPrimitive, One, ToPrimitive,
    Zero,
};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use crate::error::{ParseRationalError, RationalError};
use crate::gcd::gcd_wide;

/// The largest number of decimal places accepted by [`Rational::from_f64`].
///
/// `10^18` is the largest power of ten that fits in an `i64`.
pub const MAX_DECIMAL_PLACES: u32 = 18;

/// An exact rational number with `i64` numerator and denominator.
///
/// Rationals are always stored in lowest terms with a positive denominator.
#[derive(Clone, Copy)]
pub struct Rational {
    numerator: i64,
    denominator: i64,
    divisor: i128,
}

impl Rational {
    /// The canonical zero, `0/1`.
    pub const ZERO: Self = Self {
        numerator: 0,
        denominator: 1,
        divisor: 1,
    };

    /// The canonical one, `1/1`.
    pub const ONE: Self = Self {
        numerator: 1,
        denominator: 1,
        divisor: 1,
    };

    /// Creates a rational in lowest terms from a numerator and denominator.
    ///
    /// The sign is moved onto the numerator and both parts are divided by
    /// their greatest common divisor.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::ZeroDenominator`] if `denominator` is zero and
    /// [`RationalError::Overflow`] if the reduced pair does not fit in `i64`
    /// (for example `Rational::new(i64::MIN, -1)`).
    pub fn new(numerator: i64, denominator: i64) -> Result<Self, RationalError> {
        Self::reduce(i128::from(numerator), i128::from(denominator))
    }

    /// Reduces a widened pair. Arithmetic forms its products in `i128` and
    /// canonicalizes here, so only the reduced result has to fit in `i64`.
    fn reduce(numerator: i128, denominator: i128) -> Result<Self, RationalError> {
        if denominator == 0 {
            return Err(RationalError::ZeroDenominator);
        }

        // Non-zero because the denominator is non-zero.
        let g = gcd_wide(numerator.unsigned_abs(), denominator.unsigned_abs());
        let negative = (numerator < 0) != (denominator < 0);
        let magnitude = narrow_unsigned(numerator.unsigned_abs() / g)?;
        let sign: i128 = if denominator < 0 { -1 } else { 1 };

        Ok(Self {
            numerator: narrow(if negative { -magnitude } else { magnitude })?,
            denominator: narrow(narrow_unsigned(denominator.unsigned_abs() / g)?)?,
            // |denominator| <= 2^126 for every caller, so g fits in i128.
            divisor: sign * narrow_unsigned(g)?,
        })
    }

    /// Creates the rational `value/1`.
    #[must_use]
    pub const fn from_int(value: i64) -> Self {
        Self {
            numerator: value,
            denominator: 1,
            divisor: 1,
        }
    }

    /// Embeds any integer that fits in `i64` without loss.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::IntegerOutOfRange`] instead of truncating.
    pub fn exactly<T>(source: T) -> Result<Self, RationalError>
    where
        T: TryInto<i64> + Copy + fmt::Display,
    {
        source
            .try_into()
            .map(Self::from_int)
            .map_err(|_| RationalError::IntegerOutOfRange(source.to_string()))
    }

    /// Converts a float into the rational with the same decimal expansion.
    ///
    /// The value is scaled by powers of ten until it is integral, starting
    /// from the shortest decimal representation that round-trips to `value`.
    /// So `0.0248` becomes `31/1250`, not the nearest binary fraction.
    ///
    /// # Errors
    ///
    /// - [`RationalError::NonFinite`] for NaN and infinities.
    /// - [`RationalError::Inexact`] if more than [`MAX_DECIMAL_PLACES`]
    ///   decimal places are needed.
    /// - [`RationalError::Overflow`] if the integral part does not fit in `i64`
    ///   (for example `1e19`).
    pub fn from_f64(value: f64) -> Result<Self, RationalError> {
        if !value.is_finite() {
            debug!("rejecting non-finite float {value}");
            return Err(RationalError::NonFinite(value));
        }

        let (digits, places) = decimal_parts(value).ok_or(RationalError::Inexact(value))?;

        if places > 0 {
            let Some(denominator) = u32::try_from(places)
                .ok()
                .filter(|&p| p <= MAX_DECIMAL_PLACES)
                .map(|p| 10_i64.pow(p))
            else {
                debug!("{value} needs {places} decimal places, more than {MAX_DECIMAL_PLACES}");
                return Err(RationalError::Inexact(value));
            };
            Self::new(digits, denominator)
        } else {
            let scale = u32::try_from(-places)
                .ok()
                .and_then(|p| 10_i64.checked_pow(p))
                .ok_or(RationalError::Overflow)?;
            let numerator = digits.checked_mul(scale).ok_or_else(|| {
                debug!("{value} does not fit in i64");
                RationalError::Overflow
            })?;
            Ok(Self::from_int(numerator))
        }
    }

    /// Returns the numerator. It carries the sign of the value.
    #[must_use]
    pub const fn numerator(&self) -> i64 {
        self.numerator
    }

    /// Returns the denominator, which is always positive.
    #[must_use]
    pub const fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Returns the signed divisor the constructor reduced by.
    ///
    /// This is `signum(d) * gcd(|n|, |d|)` of the unreduced pair, which for
    /// arithmetic results is the widened cross product. It does not take
    /// part in equality or hashing.
    #[must_use]
    pub const fn divisor(&self) -> i128 {
        self.divisor
    }

    /// Returns true if this is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// Returns true if the denominator is 1.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        self.denominator == 1
    }

    /// Returns true if negative.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.numerator < 0
    }

    /// Returns true if positive.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.numerator > 0
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub const fn signum(&self) -> i8 {
        if self.numerator == 0 {
            0
        } else if self.numerator > 0 {
            1
        } else {
            -1
        }
    }

    /// Converts to an integer if the denominator is 1.
    #[must_use]
    pub const fn to_integer(&self) -> Option<i64> {
        if self.is_integer() {
            Some(self.numerator)
        } else {
            None
        }
    }

    /// Returns the integer part, rounding toward zero.
    #[must_use]
    pub const fn trunc(&self) -> i64 {
        self.numerator / self.denominator
    }

    /// Converts to the nearest `f64`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Adds two rationals.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::Overflow`] if the reduced sum does not fit in `i64`.
    pub fn try_add(self, rhs: Self) -> Result<Self, RationalError> {
        self.add_signed(rhs, 1)
    }

    /// Subtracts `rhs` by adding its negation.
    ///
    /// The negation happens on the widened cross product, so an `i64::MIN`
    /// numerator in `rhs` is fine as long as the difference fits.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::Overflow`] if the reduced difference does not fit in `i64`.
    pub fn try_sub(self, rhs: Self) -> Result<Self, RationalError> {
        self.add_signed(rhs, -1)
    }

    // (a/b) + sign * (c/d) = (a*d + sign*c*b) / (b*d)
    fn add_signed(self, rhs: Self, sign: i128) -> Result<Self, RationalError> {
        let numerator = wide_mul(self.numerator, rhs.denominator)
            .checked_add(sign * wide_mul(rhs.numerator, self.denominator))
            .ok_or(RationalError::Overflow)?;
        Self::reduce(numerator, wide_mul(self.denominator, rhs.denominator))
    }

    /// Multiplies two rationals.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::Overflow`] if the reduced product does not fit in `i64`.
    pub fn try_mul(self, rhs: Self) -> Result<Self, RationalError> {
        Self::reduce(
            wide_mul(self.numerator, rhs.numerator),
            wide_mul(self.denominator, rhs.denominator),
        )
    }

    /// Divides by `rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if `rhs` is zero and
    /// [`RationalError::Overflow`] if the reduced quotient does not fit in `i64`.
    pub fn try_div(self, rhs: Self) -> Result<Self, RationalError> {
        if rhs.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        Self::reduce(
            wide_mul(self.numerator, rhs.denominator),
            wide_mul(self.denominator, rhs.numerator),
        )
    }

    /// Flips the sign of the numerator.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::Overflow`] for a numerator of `i64::MIN`.
    pub fn try_neg(self) -> Result<Self, RationalError> {
        let numerator = self
            .numerator
            .checked_neg()
            .ok_or(RationalError::Overflow)?;
        Self::new(numerator, self.denominator)
    }

    /// Returns the absolute value.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::Overflow`] for a numerator of `i64::MIN`.
    pub fn try_abs(self) -> Result<Self, RationalError> {
        let numerator = self
            .numerator
            .checked_abs()
            .ok_or(RationalError::Overflow)?;
        Self::new(numerator, self.denominator)
    }

    /// Returns the absolute value.
    ///
    /// # Panics
    ///
    /// Panics if the numerator is `i64::MIN`.
    #[must_use]
    pub fn abs(self) -> Self {
        expect_op(self.try_abs(), "abs")
    }

    /// Replaces `self` with its negation.
    ///
    /// # Panics
    ///
    /// Panics if the numerator is `i64::MIN`.
    pub fn negate(&mut self) {
        *self = -*self;
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if the rational is zero.
    pub fn inverse(self) -> Result<Self, RationalError> {
        if self.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        Self::new(self.denominator, self.numerator)
    }

    /// Computes `self^exp` by repeated squaring. Negative exponents invert first.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] for zero raised to a negative
    /// power and [`RationalError::Overflow`] on overflow.
    pub fn pow(self, exp: i32) -> Result<Self, RationalError> {
        let mut base = if exp < 0 { self.inverse()? } else { self };
        let mut exp = exp.unsigned_abs();
        let mut result = Self::ONE;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.try_mul(base)?;
            }
            exp >>= 1;
            if exp > 0 {
                base = base.try_mul(base)?;
            }
        }

        Ok(result)
    }
}

fn narrow(value: i128) -> Result<i64, RationalError> {
    i64::try_from(value).map_err(|_| RationalError::Overflow)
}

fn narrow_unsigned(value: u128) -> Result<i128, RationalError> {
    i128::try_from(value).map_err(|_| RationalError::Overflow)
}

// i64 * i64 always fits in i128.
fn wide_mul(a: i64, b: i64) -> i128 {
    i128::from(a) * i128::from(b)
}

fn expect_op(result: Result<Rational, RationalError>, op: &str) -> Rational {
    match result {
        Ok(value) => value,
        Err(err) => panic!("rational {op} failed: {err}"),
    }
}

/// Splits a finite float into `(digits, places)` with `value == digits / 10^places`,
/// using the shortest decimal representation that round-trips.
fn decimal_parts(value: f64) -> Option<(i64, i64)> {
    // `{:e}` prints e.g. `-2.48e-2`
    let formatted = format!("{value:e}");
    let (mantissa, exponent) = formatted.split_once('e')?;
    let exponent: i64 = exponent.parse().ok()?;
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let digits: i64 = format!("{whole}{fraction}").parse().ok()?;
    let fraction_len = i64::try_from(fraction.len()).ok()?;

    Some((digits, fraction_len - exponent))
}

impl Default for Rational {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        self.numerator == other.numerator && self.denominator == other.denominator
    }
}

impl Eq for Rational {}

impl Hash for Rational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.numerator.hash(state);
        self.denominator.hash(state);
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, and i64 * i64 always fits in i128.
        let lhs = i128::from(self.numerator) * i128::from(other.denominator);
        let rhs = i128::from(other.numerator) * i128::from(self.denominator);
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({}//{})", self.numerator, self.denominator)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}//{}", self.numerator, self.denominator)
    }
}

impl FromStr for Rational {
    type Err = ParseRationalError;

    /// Parses `"<numerator>/<denominator>"`.
    ///
    /// Empty pieces between slashes are skipped, so the `"9//8"` form that
    /// [`Display`](fmt::Display) produces is accepted as well. Whitespace is
    /// not trimmed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pieces: Vec<&str> = s.split('/').filter(|piece| !piece.is_empty()).collect();
        let [numerator, denominator] = pieces.as_slice() else {
            trace!("rejecting {s:?}: {} piece(s)", pieces.len());
            return Err(ParseRationalError::Malformed(s.to_owned()));
        };

        Ok(Self::new(parse_piece(numerator)?, parse_piece(denominator)?)?)
    }
}

fn parse_piece(piece: &str) -> Result<i64, ParseRationalError> {
    piece.parse().map_err(|source| {
        trace!("rejecting piece {piece:?}");
        ParseRationalError::InvalidInteger {
            piece: piece.to_owned(),
            source,
        }
    })
}

// Arithmetic operations
macro_rules! impl_binop {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $try_op:ident) => {
        impl $Op for Rational {
            type Output = Self;

            fn $op(self, rhs: Self) -> Self::Output {
                expect_op(self.$try_op(rhs), stringify!($op))
            }
        }

        impl $Op<&Rational> for Rational {
            type Output = Self;

            fn $op(self, rhs: &Rational) -> Self::Output {
                <Rational as $Op>::$op(self, *rhs)
            }
        }

        impl $Op for &Rational {
            type Output = Rational;

            fn $op(self, rhs: Self) -> Self::Output {
                <Rational as $Op>::$op(*self, *rhs)
            }
        }

        impl $OpAssign for Rational {
            fn $op_assign(&mut self, rhs: Self) {
                *self = <Rational as $Op>::$op(*self, rhs);
            }
        }

        impl $OpAssign<&Rational> for Rational {
            fn $op_assign(&mut self, rhs: &Rational) {
                *self = <Rational as $Op>::$op(*self, *rhs);
            }
        }
    };
}

impl_binop!(Add, add, AddAssign, add_assign, try_add);
impl_binop!(Sub, sub, SubAssign, sub_assign, try_sub);
impl_binop!(Mul, mul, MulAssign, mul_assign, try_mul);
impl_binop!(Div, div, DivAssign, div_assign, try_div);

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        expect_op(self.try_neg(), "neg")
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        -*self
    }
}

impl Sum for Rational {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Rational> for Rational {
    fn sum<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl Product for Rational {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

impl<'a> Product<&'a Rational> for Rational {
    fn product<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.numerator == 0
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::ONE
    }

    fn is_one(&self) -> bool {
        *self == Self::ONE
    }
}

impl CheckedAdd for Rational {
    fn checked_add(&self, v: &Self) -> Option<Self> {
        self.try_add(*v).ok()
    }
}

impl CheckedSub for Rational {
    fn checked_sub(&self, v: &Self) -> Option<Self> {
        self.try_sub(*v).ok()
    }
}

impl CheckedMul for Rational {
    fn checked_mul(&self, v: &Self) -> Option<Self> {
        self.try_mul(*v).ok()
    }
}

impl CheckedDiv for Rational {
    fn checked_div(&self, v: &Self) -> Option<Self> {
        self.try_div(*v).ok()
    }
}

impl CheckedNeg for Rational {
    fn checked_neg(&self) -> Option<Self> {
        self.try_neg().ok()
    }
}

impl ToPrimitive for Rational {
    fn to_i64(&self) -> Option<i64> {
        Some(self.trunc())
    }

    fn to_u64(&self) -> Option<u64> {
        u64::try_from(self.trunc()).ok()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(Rational::to_f64(self))
    }
}

impl FromPrimitive for Rational {
    fn from_i64(n: i64) -> Option<Self> {
        Some(Self::from_int(n))
    }

    fn from_u64(n: u64) -> Option<Self> {
        Self::exactly(n).ok()
    }

    fn from_f64(n: f64) -> Option<Self> {
        Rational::from_f64(n).ok()
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Rational {
                fn from(value: $t) -> Self {
                    Self::from_int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_try_from_int {
    ($($t:ty),*) => {
        $(
            impl TryFrom<$t> for Rational {
                type Error = RationalError;

                fn try_from(value: $t) -> Result<Self, Self::Error> {
                    Self::exactly(value)
                }
            }
        )*
    };
}

impl_try_from_int!(u64, i128, u128, isize, usize);

impl TryFrom<f64> for Rational {
    type Error = RationalError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_f64(value)
    }
}

impl TryFrom<f32> for Rational {
    type Error = RationalError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::from_f64(f64::from(value))
    }
}

impl From<Rational> for f64 {
    fn from(value: Rational) -> Self {
        value.to_f64()
    }
}
