// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive interval types and scalar helpers.

use alloc::format;
use core::cmp::Ordering;
use core::fmt::{self, Debug, Display};

use crate::error::TreeError;

/// Numeric scalar abstraction for interval bounds.
///
/// Spans and enlargement costs are computed in a widened accumulator type
/// (f32→f64, f64→f64, i64→i128) so that integer spans cannot overflow and
/// float comparisons keep their precision.
pub trait Scalar: Copy + PartialOrd + Debug {
    /// Widened accumulator type used for span arithmetic.
    type Acc: Copy
        + PartialOrd
        + core::ops::Add<Output = Self::Acc>
        + core::ops::Sub<Output = Self::Acc>
        + Debug;

    /// Convert a scalar to the accumulator type.
    fn widen(v: Self) -> Self::Acc;
}

impl Scalar for f32 {
    type Acc = f64;

    #[inline]
    fn widen(v: Self) -> Self::Acc {
        v as f64
    }
}

impl Scalar for f64 {
    type Acc = Self;

    #[inline]
    fn widen(v: Self) -> Self::Acc {
        v
    }
}

impl Scalar for i64 {
    type Acc = i128;

    #[inline]
    fn widen(v: Self) -> Self::Acc {
        v as i128
    }
}

/// Helper alias for the widened accumulator type associated with a scalar `T`.
pub type ScalarAcc<T> = <T as Scalar>::Acc;

/// A closed one-dimensional interval `[low, high]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    low: T,
    high: T,
}

impl<T> Interval<T> {
    /// Create an interval without checking that `low <= high`.
    ///
    /// [`IntervalTree::insert`](crate::IntervalTree::insert) still rejects
    /// inverted intervals, so this is mostly useful for constants.
    pub const fn new(low: T, high: T) -> Self {
        Self { low, high }
    }
}

impl<T: Copy> Interval<T> {
    /// Lower bound.
    #[inline]
    pub fn low(&self) -> T {
        self.low
    }

    /// Upper bound.
    #[inline]
    pub fn high(&self) -> T {
        self.high
    }
}

impl<T: Scalar> Interval<T> {
    /// Create an interval, rejecting inverted or incomparable bounds.
    pub fn try_new(low: T, high: T) -> Result<Self, TreeError> {
        let iv = Self::new(low, high);
        if iv.is_valid() {
            Ok(iv)
        } else {
            Err(iv.invalid())
        }
    }

    /// True if `low <= high`. NaN bounds are never valid.
    pub fn is_valid(&self) -> bool {
        le(self.low, self.high)
    }

    /// Length of the interval in the widened accumulator type.
    #[inline]
    pub fn span(&self) -> ScalarAcc<T> {
        T::widen(self.high) - T::widen(self.low)
    }

    /// Smallest interval covering both `self` and `other`.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            low: min_t(self.low, other.low),
            high: max_t(self.high, other.high),
        }
    }

    /// Growth in span needed for `self` to also cover `candidate`.
    pub fn enlargement(&self, candidate: &Self) -> ScalarAcc<T> {
        self.union(candidate).span() - self.span()
    }

    pub(crate) fn invalid(&self) -> TreeError {
        TreeError::InvalidInterval(format!("[{:?}, {:?}]", self.low, self.high))
    }
}

impl<T: Copy> From<(T, T)> for Interval<T> {
    fn from((low, high): (T, T)) -> Self {
        Self::new(low, high)
    }
}

impl<T: Copy> From<[T; 2]> for Interval<T> {
    fn from([low, high]: [T; 2]) -> Self {
        Self::new(low, high)
    }
}

impl<T: Display> Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

pub(crate) fn min_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Greater) => b,
        _ => a,
    }
}

pub(crate) fn max_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Less) => b,
        _ => a,
    }
}

pub(crate) fn le<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o != Ordering::Greater)
        .unwrap_or(false)
}

/// Ordering used when sorting by lower bound. Incomparable values compare equal
/// so the stable sort keeps their insertion order.
pub(crate) fn cmp_t<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}
