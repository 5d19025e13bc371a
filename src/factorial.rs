//! Factorial core
//!
//! A pure, stateless computation. Nothing here prints, logs or allocates;
//! every call owns its accumulator and the result is either the product or a
//! [`FactorialError`].

use std::fmt;
use std::ops::{Add, Div, Mul};

use crate::error::FactorialError;
use crate::models::Width;

/// A fixed-width signed integer the factorial can be computed in.
pub trait FixedWidth:
    Copy
    + Ord
    + fmt::Debug
    + fmt::Display
    + Add<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Into<i128>
    + TryFrom<i128>
{
    const ZERO: Self;
    const ONE: Self;
    const MAX: Self;
    const WIDTH: Width;
}

macro_rules! impl_fixed_width {
    ($($ty:ty => $width:expr),* $(,)?) => {
        $(
            impl FixedWidth for $ty {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MAX: Self = <$ty>::MAX;
                const WIDTH: Width = $width;
            }
        )*
    };
}

impl_fixed_width!(i32 => Width::I32, i64 => Width::I64, i128 => Width::I128);

/// Computes `n!` in the width of `T`.
///
/// - `0! = 1`
/// - negative `n` fails with [`FactorialError::NegativeInput`]
/// - before every multiplication the accumulator is checked against
///   `T::MAX / i`; if the step would leave the representable range the call
///   fails with [`FactorialError::Overflow`] instead of wrapping
pub fn factorial<T: FixedWidth>(n: T) -> Result<T, FactorialError> {
    if n == T::ZERO {
        return Ok(T::ONE);
    }

    if n < T::ZERO {
        return Err(FactorialError::NegativeInput { n: n.into() });
    }

    let mut result = T::ONE;
    let mut i = T::ONE;
    loop {
        if result > T::MAX / i {
            return Err(FactorialError::Overflow {
                n: n.into(),
                width: T::WIDTH,
            });
        }
        result = result * i;

        if i == n {
            return Ok(result);
        }
        // i < n <= T::MAX, so the counter cannot overflow
        i = i + T::ONE;
    }
}

/// 32-bit factorial, the default width of the command-line driver.
pub fn compute(n: i32) -> Result<i32, FactorialError> {
    factorial(n)
}

/// Computes `n!` in `T` for an argument given as `i128`.
///
/// Arguments outside `T`'s range cannot succeed: below it they are negative,
/// above it the product is larger than `T::MAX`.
pub(crate) fn factorial_as<T: FixedWidth>(n: i128) -> Result<i128, FactorialError> {
    match T::try_from(n) {
        Ok(narrow) => factorial(narrow).map(Into::into),
        Err(_) if n < 0 => Err(FactorialError::NegativeInput { n }),
        Err(_) => Err(FactorialError::Overflow {
            n,
            width: T::WIDTH,
        }),
    }
}

/// Largest `n` whose factorial fits in `T`, found with the same guard
/// [`factorial`] uses.
pub fn largest_input<T: FixedWidth>() -> T {
    let mut n = T::ONE;
    while factorial(n + T::ONE).is_ok() {
        n = n + T::ONE;
    }
    n
}
