//! Plain values extracted from field elements

use core::fmt;

use num_bigint::{BigInt, BigUint};
use num_traits::{FromPrimitive, ToPrimitive, Zero};

/// Value of a prime field element viewed as a number.
///
/// Integer fields (`frac_length == 0`) yield exact integers; fixed-point
/// fields yield the scaled-down float.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    /// Exact integer value
    Integer(BigInt),
    /// Fixed-point value divided by `2^f`
    Fraction(f64),
}

impl FieldValue {
    /// Float view of the value
    pub fn to_f64(&self) -> f64 {
        match self {
            FieldValue::Integer(v) => v.to_f64().unwrap_or(f64::NAN),
            FieldValue::Fraction(x) => *x,
        }
    }

    /// Integer view, rounding fractions half to even
    pub fn round(&self) -> BigInt {
        match self {
            FieldValue::Integer(v) => v.clone(),
            FieldValue::Fraction(x) => float_to_bigint(x.round_ties_even()),
        }
    }

    /// Absolute value
    pub fn abs(&self) -> FieldValue {
        match self {
            FieldValue::Integer(v) => FieldValue::Integer(num_traits::Signed::abs(v)),
            FieldValue::Fraction(x) => FieldValue::Fraction(x.abs()),
        }
    }

    /// Whether this is an exact integer value
    pub fn is_integer(&self) -> bool {
        matches!(self, FieldValue::Integer(_))
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(v) => write!(f, "{}", v),
            FieldValue::Fraction(x) => write!(f, "{:?}", x),
        }
    }
}

/// `v · 2^-f` as a float
pub(crate) fn scale_down(v: &BigInt, f: u32) -> f64 {
    let x = v.to_f64().unwrap_or(f64::NAN);
    if f == 0 {
        return x;
    }
    x * 2f64.powi(-(f as i32))
}

/// `round(x · 2^f)` as an integer, half to even; `None` unless the scaled
/// value is finite
pub(crate) fn scale_up(x: f64, f: u32) -> Option<BigInt> {
    let scaled = (x * 2f64.powi(f as i32)).round_ties_even();
    if !scaled.is_finite() {
        return None;
    }
    BigInt::from_f64(scaled)
}

/// Integral float to integer; non-finite values map to zero
fn float_to_bigint(x: f64) -> BigInt {
    BigInt::from_f64(x).unwrap_or_else(BigInt::zero)
}

/// Reduce a signed integer into `[0, m)`
#[inline]
pub(crate) fn reduce(v: &BigInt, m: &BigUint) -> BigUint {
    mpcfield_common::mod_floor(v, m)
}
