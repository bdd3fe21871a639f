//! Integer arithmetic helpers and the odd-number sequence.

use std::iter::StepBy;
use std::ops::RangeInclusive;

use thiserror::Error;

/// Rejected argument for [`divide`] or [`odd_numbers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidArgumentError {
    #[error("Second parameter can't be equal to zero")]
    ZeroDenominator,
    #[error("Limit argument can't be negative")]
    NegativeLimit,
}

/// Sum of `a` and `b`. Wraps at the `i32` boundary instead of panicking.
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Fractional quotient of `numerator / denominator`.
pub fn divide(numerator: i32, denominator: i32) -> Result<f64, InvalidArgumentError> {
    if denominator == 0 {
        return Err(InvalidArgumentError::ZeroDenominator);
    }
    Ok(f64::from(numerator) / f64::from(denominator))
}

/// Odd integers from 1 through `limit`, ascending.
///
/// The limit is checked here, not when the sequence is first iterated.
pub fn odd_numbers(limit: i32) -> Result<OddNumbers, InvalidArgumentError> {
    if limit < 0 {
        return Err(InvalidArgumentError::NegativeLimit);
    }
    Ok(OddNumbers { limit })
}

/// Lazy, restartable sequence returned by [`odd_numbers`].
///
/// Holds only the limit; every call to [`OddNumbers::iter`] or `into_iter`
/// starts a fresh enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OddNumbers {
    limit: i32,
}

impl OddNumbers {
    pub fn limit(&self) -> i32 {
        self.limit
    }

    pub fn iter(&self) -> StepBy<RangeInclusive<i32>> {
        (1..=self.limit).step_by(2)
    }
}

impl IntoIterator for OddNumbers {
    type Item = i32;
    type IntoIter = StepBy<RangeInclusive<i32>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &OddNumbers {
    type Item = i32;
    type IntoIter = StepBy<RangeInclusive<i32>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
