//! Element types a filter may carry, and how spectral results settle back
//! onto them.

use std::fmt;

use serde::Serialize;

/// Why a spectral value could not be settled onto a coefficient type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unsettled {
    /// The value is further than the tolerance from the nearest integer.
    Residual,
    /// The value is not finite, or lies outside the type's range.
    OutOfRange,
}

/// A numeric type usable as a filter coefficient and matrix entry.
///
/// The type fixes the rounding contract. Integer types round every value
/// produced by frequency-domain evaluation to the nearest integer, after
/// checking that the value was within `tolerance` of it. Floating types keep
/// the value as computed.
///
/// Arithmetic goes through [`Coefficient::checked_add`] and
/// [`Coefficient::checked_mul`], so integer overflow surfaces as `None`.
pub trait Coefficient:
    Copy + PartialEq + fmt::Debug + fmt::Display + Serialize + Send + Sync + 'static
{
    /// Additive identity.
    const ZERO: Self;

    /// `true` for integer types.
    const IS_INTEGER: bool;

    /// Converts to `f64` for spectral evaluation.
    fn to_f64(self) -> f64;

    /// Converts a spectral result back onto `Self`.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`Unsettled::Residual`] | integer type, `|value - round(value)| > tolerance` |
    /// | [`Unsettled::OutOfRange`] | non-finite, or outside the range of `Self` (an `f32` overflowing to infinity included) |
    fn settle(value: f64, tolerance: f64) -> Result<Self, Unsettled>;

    /// Sum, or `None` on overflow.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// Product, or `None` on overflow.
    fn checked_mul(self, rhs: Self) -> Option<Self>;
}

macro_rules! integer_coefficient {
    ($($t:ty),*) => {$(
        impl Coefficient for $t {
            const ZERO: Self = 0;
            const IS_INTEGER: bool = true;

            fn to_f64(self) -> f64 {
                self as f64
            }

            fn settle(value: f64, tolerance: f64) -> Result<Self, Unsettled> {
                if !value.is_finite() {
                    return Err(Unsettled::OutOfRange);
                }
                let rounded = value.round();
                if (value - rounded).abs() > tolerance {
                    return Err(Unsettled::Residual);
                }
                if rounded < <$t>::MIN as f64 || rounded > <$t>::MAX as f64 {
                    return Err(Unsettled::OutOfRange);
                }
                Ok(rounded as $t)
            }

            fn checked_add(self, rhs: Self) -> Option<Self> {
                <$t>::checked_add(self, rhs)
            }

            fn checked_mul(self, rhs: Self) -> Option<Self> {
                <$t>::checked_mul(self, rhs)
            }
        }
    )*};
}

integer_coefficient!(i32, i64);

impl Coefficient for f64 {
    const ZERO: Self = 0.0;
    const IS_INTEGER: bool = false;

    fn to_f64(self) -> f64 {
        self
    }

    fn settle(value: f64, _tolerance: f64) -> Result<Self, Unsettled> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Unsettled::OutOfRange)
        }
    }

    fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(self + rhs)
    }

    fn checked_mul(self, rhs: Self) -> Option<Self> {
        Some(self * rhs)
    }
}

impl Coefficient for f32 {
    const ZERO: Self = 0.0;
    const IS_INTEGER: bool = false;

    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    fn settle(value: f64, _tolerance: f64) -> Result<Self, Unsettled> {
        // values beyond f32::MAX narrow to infinity
        let narrowed = value as f32;
        if narrowed.is_finite() {
            Ok(narrowed)
        } else {
            Err(Unsettled::OutOfRange)
        }
    }

    fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(self + rhs)
    }

    fn checked_mul(self, rhs: Self) -> Option<Self> {
        Some(self * rhs)
    }
}
