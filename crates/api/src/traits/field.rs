//! Field descriptor and field element traits.
//!
//! A descriptor is created once per parameter set and lives for the whole
//! process, so elements keep a `&'static` link to it. Two elements belong
//! to the same field exactly when their descriptors are the same object.

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use crate::Result;

/// A finite field descriptor.
pub trait Field: fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Element type of this field family
    type Element: FieldElement<Field = Self>;

    /// Number of fractional bits of the fixed-point encoding (0 for plain
    /// integers and for binary fields)
    fn frac_length(&self) -> u32;

    /// Width in bytes of one element record on the wire
    fn record_width(&self) -> usize;

    /// The additive identity
    fn zero(&'static self) -> Self::Element;

    /// The multiplicative identity
    fn one(&'static self) -> Self::Element;
}

/// An element of a finite field.
///
/// The operator bounds cover same-field arithmetic; implementations panic
/// when the two operands come from different fields. Fallible operations
/// return [`crate::Error`].
pub trait FieldElement:
    Clone
    + PartialEq
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// Descriptor type of this element's field family
    type Field: Field<Element = Self>;

    /// The field this element lives in
    fn field(&self) -> &'static Self::Field;

    /// Whether this is the additive identity
    fn is_zero(&self) -> bool;

    /// Multiplicative inverse, `DivisionByZero` on zero
    fn reciprocal(&self) -> Result<Self>;

    /// `self / rhs`, `DivisionByZero` when `rhs` is zero
    fn divide(&self, rhs: &Self) -> Result<Self>;

    /// Division by `2^k` (prime fields) or by `x^k` (binary fields)
    fn shift_right(&self, k: u32) -> Result<Self>;

    /// Minimal little-endian encoding of the canonical value
    fn to_le_bytes(&self) -> Vec<u8>;

    /// Descriptor identity check
    fn same_field(&self, other: &Self) -> bool {
        core::ptr::eq(self.field(), other.field())
    }
}
