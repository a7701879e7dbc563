//! Stepping through ordered values by a value-typed step.
//!
//! [`Step`] is the advance/distance pair, and [`Stride`] walks a range with it,
//! so rational-valued steps like `0, 1/3, 2/3, 1` can be iterated.

use num_traits::Zero;
use std::cmp::Ordering;
use std::iter::FusedIterator;

use crate::error::RationalError;
use crate::Rational;

/// A value that can be moved by, and measured in, values of its own type.
///
/// # Laws
///
/// - `a.advanced_by(&a.distance_to(&b)?)? == b`
/// - `a.distance_to(&a)?` is zero
pub trait Step: Sized {
    /// The error returned when a step cannot be represented.
    type Error;

    /// Returns `self + n`.
    ///
    /// # Errors
    ///
    /// Returns an error if the result is not representable.
    fn advanced_by(&self, n: &Self) -> Result<Self, Self::Error>;

    /// Returns `other - self`.
    ///
    /// # Errors
    ///
    /// Returns an error if the result is not representable.
    fn distance_to(&self, other: &Self) -> Result<Self, Self::Error>;
}

impl Step for Rational {
    type Error = RationalError;

    fn advanced_by(&self, n: &Self) -> Result<Self, RationalError> {
        self.try_add(*n)
    }

    fn distance_to(&self, other: &Self) -> Result<Self, RationalError> {
        other.try_sub(*self)
    }
}

/// An iterator from a start value toward an end value in fixed steps.
///
/// Created by [`stride_to`] and [`stride_through`].
#[derive(Clone, Debug)]
pub struct Stride<T> {
    next: Option<T>,
    end: T,
    step: T,
    inclusive: bool,
}

/// Iterates `start, start + step, ...` while the value has not reached `end`.
///
/// A positive step walks upward and a negative one downward. A zero step
/// yields nothing.
#[must_use]
pub fn stride_to<T>(start: T, end: T, step: T) -> Stride<T> {
    Stride {
        next: Some(start),
        end,
        step,
        inclusive: false,
    }
}

/// Like [`stride_to`], but also yields `end` if a step lands on it exactly.
#[must_use]
pub fn stride_through<T>(start: T, end: T, step: T) -> Stride<T> {
    Stride {
        next: Some(start),
        end,
        step,
        inclusive: true,
    }
}

impl<T> Stride<T>
where
    T: Step + Ord + Zero,
{
    fn in_range(&self, value: &T) -> bool {
        let position = value.cmp(&self.end);
        let ahead = match self.step.cmp(&T::zero()) {
            Ordering::Greater => Ordering::Less,
            Ordering::Less => Ordering::Greater,
            Ordering::Equal => return false,
        };
        position == ahead || (self.inclusive && position == Ordering::Equal)
    }
}

impl<T> Iterator for Stride<T>
where
    T: Step + Ord + Zero,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let current = self.next.take()?;
        if !self.in_range(&current) {
            return None;
        }
        // An unrepresentable next value ends the walk.
        self.next = current.advanced_by(&self.step).ok();
        Some(current)
    }
}

impl<T> FusedIterator for Stride<T> where T: Step + Ord + Zero {}
