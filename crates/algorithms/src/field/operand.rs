//! Operand kinds accepted by the fallible element operations
//!
//! The `try_*` methods of both element types take `impl Into<Operand<E>>`
//! and match on the kind. A combination with no defined meaning (a float in
//! arithmetic, an element of a different field, a negative integer used as
//! a GF(2) polynomial) yields [`Error::UnsupportedOperand`], which callers
//! may treat as a signal to try another interpretation of the operands.

use num_bigint::{BigInt, BigUint};

use crate::error::Error;

/// Right-hand operand of a field operation
#[derive(Clone, Debug, PartialEq)]
pub enum Operand<E> {
    /// An element, expected to belong to the receiver's field
    Element(E),
    /// An integer, coerced into the receiver's field
    Int(BigInt),
    /// A float, only meaningful for fixed-point equality
    Float(f64),
}

impl<E> Operand<E> {
    /// Short name of the operand kind, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Element(_) => "element",
            Operand::Int(_) => "integer",
            Operand::Float(_) => "float",
        }
    }
}

/// Operand kind for an element whose descriptor differs from the receiver's
pub(crate) const FOREIGN_ELEMENT: &str = "element of another field";

/// Build the operand-kind error for `operation`
#[inline]
pub(crate) fn unsupported(operation: &'static str, operand: &'static str) -> Error {
    Error::UnsupportedOperand { operation, operand }
}

macro_rules! impl_from_int {
    ($($Int:ty),+) => {
        $(
            impl<E> From<$Int> for Operand<E> {
                fn from(n: $Int) -> Self {
                    Operand::Int(BigInt::from(n))
                }
            }
        )+
    };
}

impl_from_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, usize, isize);

impl<E> From<BigInt> for Operand<E> {
    fn from(n: BigInt) -> Self {
        Operand::Int(n)
    }
}

impl<E> From<&BigInt> for Operand<E> {
    fn from(n: &BigInt) -> Self {
        Operand::Int(n.clone())
    }
}

impl<E> From<BigUint> for Operand<E> {
    fn from(n: BigUint) -> Self {
        Operand::Int(BigInt::from(n))
    }
}

impl<E> From<f64> for Operand<E> {
    fn from(x: f64) -> Self {
        Operand::Float(x)
    }
}
