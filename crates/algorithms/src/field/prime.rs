//! Prime fields GF(p) with optional fixed-point scaling
//!
//! A [`PrimeField`] descriptor fixes the modulus `p`, a distinguished
//! root of unity and the number of fractional bits `f`. Elements store
//! their canonical residue in `[0, p)`; with `f > 0` a residue `v` stands
//! for the fixed-point number `signed(v) / 2^f`.
//!
//! Descriptors are built by the [`FieldRegistry`](super::registry::FieldRegistry)
//! and live for the whole process, so elements carry a `&'static` link to
//! their field and two elements are compatible exactly when those links
//! point at the same descriptor.

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Shl, ShlAssign, Sub, SubAssign};
use core::ptr;

use num_bigint::{BigInt, BigUint, RandBigInt, Sign};
use num_traits::{One, Zero};
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use subtle::{Choice, ConstantTimeEq};

use mpcfield_api::{Field, FieldElement};
use mpcfield_common::{is_prime, legendre, mod_exp, mod_inv};
use mpcfield_internal::{ct_eq_choice, le_bytes_padded};

use super::operand::{unsupported, Operand, FOREIGN_ELEMENT};
use super::sqrt::sqrt_mod;
use super::value::{reduce, scale_down, scale_up, FieldValue};
use crate::error::{validate, Error, Result, ResultExt};

/// Parameter record naming a prime field, e.g. in a configuration file
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrimeFieldParams {
    /// Prime modulus
    pub modulus: BigUint,
    /// Order of the distinguished multiplicative subgroup
    pub nth: u64,
    /// Generator of that subgroup; may be negative
    pub root: BigInt,
    /// Fixed-point fractional bits
    #[cfg_attr(feature = "serde", serde(default))]
    pub frac_length: u32,
}

/// Descriptor of the prime field GF(p)
#[derive(Debug)]
pub struct PrimeField {
    modulus: BigUint,
    nth: u64,
    root: BigUint,
    frac_length: u32,
    rshift_factor: BigUint,
    byte_length: usize,
}

impl PrimeField {
    /// Build a descriptor; the registry is the only caller.
    pub(crate) fn new(modulus: BigUint, nth: u64, root: &BigInt, frac_length: u32) -> Result<Self> {
        if !is_prime(&modulus) {
            return Err(Error::param("GF(p)", format!("{} is not a prime", modulus)));
        }
        validate::parameter(
            frac_length == 0 || modulus != BigUint::from(2u32),
            "GF(p)",
            "fractional bits require an odd modulus",
        )?;

        let root = reduce(root, &modulus);
        let scale = mod_exp(&BigUint::from(2u32), &BigUint::from(frac_length), &modulus);
        let rshift_factor = mod_inv(&scale, &modulus)
            .ok_or_else(|| Error::param("GF(p)", "2^f is not invertible"))?;
        let byte_length = ((modulus.bits() + 7) / 8) as usize;

        Ok(PrimeField {
            modulus,
            nth,
            root,
            frac_length,
            rshift_factor,
            byte_length,
        })
    }

    /// The prime modulus `p`
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Number of elements, equal to the modulus
    pub fn order(&self) -> &BigUint {
        &self.modulus
    }

    /// Prime field values are read as signed integers
    pub fn is_signed(&self) -> bool {
        true
    }

    /// Order of the distinguished multiplicative subgroup
    pub fn nth(&self) -> u64 {
        self.nth
    }

    /// Primitive `nth` root of unity, reduced into `[0, p)`
    pub fn root(&self) -> &BigUint {
        &self.root
    }

    /// Fixed-point fractional bits
    pub fn frac_length(&self) -> u32 {
        self.frac_length
    }

    /// `(2^f)^-1 mod p`
    pub fn rshift_factor(&self) -> &BigUint {
        &self.rshift_factor
    }

    /// Bytes per encoded element, `ceil(bitlen(p) / 8)`
    pub fn byte_length(&self) -> usize {
        self.byte_length
    }

    /// Parameter record for this descriptor
    pub fn params(&self) -> PrimeFieldParams {
        PrimeFieldParams {
            modulus: self.modulus.clone(),
            nth: self.nth,
            root: BigInt::from(self.root.clone()),
            frac_length: self.frac_length,
        }
    }

    /// Element with value `v mod p`; negative integers wrap around
    pub fn element<T: Into<BigInt>>(&'static self, v: T) -> PrimeFieldElement {
        self.wrap(reduce(&v.into(), &self.modulus))
    }

    /// Element with value `v mod p`
    pub fn from_biguint(&'static self, v: &BigUint) -> PrimeFieldElement {
        self.wrap(v % &self.modulus)
    }

    /// Fixed-point encoding of `x`, i.e. `round(x · 2^f) mod p`.
    ///
    /// NaN and infinities have no encoding and are `InvalidParameter`.
    pub fn from_fixed(&'static self, x: f64) -> Result<PrimeFieldElement> {
        let v = scale_up(x, self.frac_length).ok_or_else(|| {
            Error::param("from_fixed", format!("{} has no fixed-point encoding", x))
        })?;
        Ok(self.element(v))
    }

    /// Uniformly random element
    pub fn random<R: Rng + ?Sized>(&'static self, rng: &mut R) -> PrimeFieldElement {
        self.wrap(rng.gen_biguint_below(&self.modulus))
    }

    /// The distinguished root of unity as an element
    pub fn root_of_unity(&'static self) -> PrimeFieldElement {
        self.wrap(self.root.clone())
    }

    /// Additive identity
    pub fn zero(&'static self) -> PrimeFieldElement {
        self.wrap(BigUint::zero())
    }

    /// Multiplicative identity
    pub fn one(&'static self) -> PrimeFieldElement {
        self.wrap(BigUint::one() % &self.modulus)
    }

    #[inline]
    fn wrap(&'static self, value: BigUint) -> PrimeFieldElement {
        PrimeFieldElement { field: self, value }
    }

    /// `(2^k)^-1 mod p`, `None` when `2^k` is not invertible
    fn shift_factor(&self, k: u32) -> Option<BigUint> {
        if k == self.frac_length {
            return Some(self.rshift_factor.clone());
        }
        let scale = mod_exp(&BigUint::from(2u32), &BigUint::from(k), &self.modulus);
        mod_inv(&scale, &self.modulus)
    }

    /// Residue an integer compares equal to: `(n · 2^f) mod p`
    fn scaled(&self, n: &BigInt) -> BigUint {
        reduce(&(n << self.frac_length), &self.modulus)
    }
}

impl fmt::Display for PrimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.frac_length > 0 {
            write!(f, "GF({}, f={})", self.modulus, self.frac_length)
        } else {
            write!(f, "GF({})", self.modulus)
        }
    }
}

impl Field for PrimeField {
    type Element = PrimeFieldElement;

    fn frac_length(&self) -> u32 {
        self.frac_length
    }

    fn record_width(&self) -> usize {
        self.byte_length
    }

    fn zero(&'static self) -> PrimeFieldElement {
        PrimeField::zero(self)
    }

    fn one(&'static self) -> PrimeFieldElement {
        PrimeField::one(self)
    }
}

/// Element of a prime field
///
/// Invariant: `0 <= value < p`.
#[derive(Clone)]
pub struct PrimeFieldElement {
    field: &'static PrimeField,
    value: BigUint,
}

impl PrimeFieldElement {
    /// Descriptor of the field this element belongs to
    pub fn field(&self) -> &'static PrimeField {
        self.field
    }

    /// Canonical residue in `[0, p)`
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// Consume into the canonical residue
    pub fn into_value(self) -> BigUint {
        self.value
    }

    /// Whether this is the additive identity
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Truth value: any non-zero element
    pub fn is_nonzero(&self) -> bool {
        !self.is_zero()
    }

    #[inline]
    fn with_value(&self, value: BigUint) -> Self {
        PrimeFieldElement {
            field: self.field,
            value,
        }
    }

    #[inline]
    fn modulus(&self) -> &BigUint {
        &self.field.modulus
    }

    #[inline]
    fn same_field_as(&self, other: &Self) -> bool {
        ptr::eq(self.field, other.field)
    }

    #[track_caller]
    fn assert_same_field(&self, other: &Self) {
        assert!(
            self.same_field_as(other),
            "field mismatch: {} and {}",
            self.field,
            other.field
        );
    }

    fn check_same_field(&self, other: &Self, operation: &'static str) -> Result<()> {
        if self.same_field_as(other) {
            Ok(())
        } else {
            Err(unsupported(operation, FOREIGN_ELEMENT))
        }
    }

    fn add_value(&self, v: &BigUint) -> Self {
        self.with_value((&self.value + v) % self.modulus())
    }

    /// `self - v` for a reduced `v`
    fn sub_value(&self, v: &BigUint) -> Self {
        self.with_value((&self.value + self.modulus() - v) % self.modulus())
    }

    /// `v - self` for a reduced `v`
    fn rsub_value(&self, v: &BigUint) -> Self {
        self.with_value((v + self.modulus() - &self.value) % self.modulus())
    }

    fn mul_value(&self, v: &BigUint) -> Self {
        self.with_value((&self.value * v) % self.modulus())
    }

    fn add_elem(&self, rhs: &Self) -> Self {
        self.assert_same_field(rhs);
        self.add_value(&rhs.value)
    }

    fn sub_elem(&self, rhs: &Self) -> Self {
        self.assert_same_field(rhs);
        self.sub_value(&rhs.value)
    }

    fn mul_elem(&self, rhs: &Self) -> Self {
        self.assert_same_field(rhs);
        self.mul_value(&rhs.value)
    }

    fn add_int(&self, n: BigInt) -> Self {
        self.add_value(&reduce(&n, self.modulus()))
    }

    fn sub_int(&self, n: BigInt) -> Self {
        self.sub_value(&reduce(&n, self.modulus()))
    }

    fn rsub_int(&self, n: BigInt) -> Self {
        self.rsub_value(&reduce(&n, self.modulus()))
    }

    fn mul_int(&self, n: BigInt) -> Self {
        self.mul_value(&reduce(&n, self.modulus()))
    }

    fn shl_bits(&self, k: u32) -> Self {
        let factor = mod_exp(&BigUint::from(2u32), &BigUint::from(k), self.modulus());
        self.mul_value(&factor)
    }

    /// `self + rhs` for an element of the same field or an integer
    pub fn try_add<O: Into<Operand<Self>>>(&self, rhs: O) -> Result<Self> {
        match rhs.into() {
            Operand::Element(b) => {
                self.check_same_field(&b, "add")?;
                Ok(self.add_value(&b.value))
            }
            Operand::Int(n) => Ok(self.add_int(n)),
            Operand::Float(_) => Err(unsupported("add", "float")),
        }
    }

    /// `self - rhs`
    pub fn try_sub<O: Into<Operand<Self>>>(&self, rhs: O) -> Result<Self> {
        match rhs.into() {
            Operand::Element(b) => {
                self.check_same_field(&b, "sub")?;
                Ok(self.sub_value(&b.value))
            }
            Operand::Int(n) => Ok(self.sub_int(n)),
            Operand::Float(_) => Err(unsupported("sub", "float")),
        }
    }

    /// `lhs - self`
    pub fn try_rsub<O: Into<Operand<Self>>>(&self, lhs: O) -> Result<Self> {
        match lhs.into() {
            Operand::Element(a) => {
                self.check_same_field(&a, "rsub")?;
                Ok(self.rsub_value(&a.value))
            }
            Operand::Int(n) => Ok(self.rsub_int(n)),
            Operand::Float(_) => Err(unsupported("rsub", "float")),
        }
    }

    /// `self * rhs`
    pub fn try_mul<O: Into<Operand<Self>>>(&self, rhs: O) -> Result<Self> {
        match rhs.into() {
            Operand::Element(b) => {
                self.check_same_field(&b, "mul")?;
                Ok(self.mul_value(&b.value))
            }
            Operand::Int(n) => Ok(self.mul_int(n)),
            Operand::Float(_) => Err(unsupported("mul", "float")),
        }
    }

    /// `self / rhs`, `DivisionByZero` when `rhs` is zero
    pub fn try_div<O: Into<Operand<Self>>>(&self, rhs: O) -> Result<Self> {
        let divisor = match rhs.into() {
            Operand::Element(b) => {
                self.check_same_field(&b, "div")?;
                b
            }
            Operand::Int(n) => self.field.element(n),
            Operand::Float(_) => return Err(unsupported("div", "float")),
        };
        let inv = divisor.reciprocal().with_context("div")?;
        Ok(self.mul_value(&inv.value))
    }

    /// `lhs / self`, `DivisionByZero` when `self` is zero
    pub fn try_rdiv<O: Into<Operand<Self>>>(&self, lhs: O) -> Result<Self> {
        let dividend = match lhs.into() {
            Operand::Element(a) => {
                self.check_same_field(&a, "rdiv")?;
                a.value
            }
            Operand::Int(n) => reduce(&n, self.modulus()),
            Operand::Float(_) => return Err(unsupported("rdiv", "float")),
        };
        let inv = self.reciprocal().with_context("rdiv")?;
        Ok(inv.mul_value(&dividend))
    }

    /// Equality with an element, an integer or (fixed-point fields only) a
    /// float
    pub fn try_eq<O: Into<Operand<Self>>>(&self, rhs: O) -> Result<bool> {
        match rhs.into() {
            Operand::Element(b) => {
                self.check_same_field(&b, "eq")?;
                Ok(self.value == b.value)
            }
            Operand::Int(n) => Ok(self.eq_int(&n)),
            Operand::Float(x) if self.field.frac_length > 0 => {
                if x.is_finite() {
                    Ok(self.eq_float(x))
                } else {
                    Err(unsupported("eq", "non-finite float"))
                }
            }
            Operand::Float(_) => Err(unsupported("eq", "float")),
        }
    }

    /// Whether this element encodes the integer `n`, i.e.
    /// `value == (n · 2^f) mod p`
    pub fn eq_int(&self, n: &BigInt) -> bool {
        self.value == self.field.scaled(n)
    }

    /// Whether this element encodes `x` in fixed point; always false for
    /// integer fields and for NaN or infinities
    pub fn eq_float(&self, x: f64) -> bool {
        let f = self.field.frac_length;
        if f == 0 {
            return false;
        }
        match scale_up(x, f) {
            Some(v) => self.value == reduce(&v, self.modulus()),
            None => false,
        }
    }

    /// `self^e`; a negative exponent raises the reciprocal
    pub fn pow<E: Into<BigInt>>(&self, exponent: E) -> Result<Self> {
        let (sign, magnitude) = exponent.into().into_parts();
        let base = if sign == Sign::Minus {
            self.reciprocal().with_context("pow")?
        } else {
            self.clone()
        };
        Ok(self.with_value(mod_exp(&base.value, &magnitude, self.modulus())))
    }

    /// Multiplicative inverse
    pub fn reciprocal(&self) -> Result<Self> {
        validate::nonzero(self.is_zero(), "reciprocal")?;
        let inv = mod_inv(&self.value, self.modulus())
            .ok_or(Error::DivisionByZero { context: "reciprocal" })?;
        Ok(self.with_value(inv))
    }

    /// Division by `2^k`.
    ///
    /// With `k` equal to the field's fractional length this is the
    /// fixed-point rescale after a multiplication and uses the precomputed
    /// factor; any other `k` computes `(2^k)^-1` on the spot.
    pub fn try_shr(&self, k: u32) -> Result<Self> {
        let factor = self
            .field
            .shift_factor(k)
            .ok_or(Error::DivisionByZero { context: "shift_right" })?;
        Ok(self.mul_value(&factor))
    }

    /// In-place [`try_shr`](Self::try_shr)
    pub fn try_shr_assign(&mut self, k: u32) -> Result<()> {
        *self = self.try_shr(k)?;
        Ok(())
    }

    /// Quadratic residuosity; zero counts as a square
    pub fn is_sqr(&self) -> bool {
        legendre(&BigInt::from(self.value.clone()), self.modulus()) != -1
    }

    /// A square root of this element, or the inverse of one when
    /// `inverse` is set.
    ///
    /// Only meaningful when [`is_sqr`](Self::is_sqr) holds; for a
    /// non-residue the result is an arbitrary element.
    pub fn sqrt(&self, inverse: bool) -> Result<Self> {
        if inverse {
            validate::nonzero(self.is_zero(), "sqrt")?;
        }
        Ok(self.with_value(sqrt_mod(&self.value, self.modulus(), inverse)))
    }

    fn scale(&self, v: BigInt) -> FieldValue {
        match self.field.frac_length {
            0 => FieldValue::Integer(v),
            f => FieldValue::Fraction(scale_down(&v, f)),
        }
    }

    /// Value folded into `(-p/2, p/2]`, scaled by `2^-f`
    pub fn signed(&self) -> FieldValue {
        let mut v = BigInt::from(self.value.clone());
        if self.value > (self.modulus() >> 1u32) {
            v -= BigInt::from(self.modulus().clone());
        }
        self.scale(v)
    }

    /// Value in `[0, p)`, scaled by `2^-f`
    pub fn unsigned(&self) -> FieldValue {
        self.scale(BigInt::from(self.value.clone()))
    }

    /// Signed value rounded half to even
    pub fn to_bigint(&self) -> BigInt {
        self.signed().round()
    }

    /// Signed value as a float
    pub fn to_f64(&self) -> f64 {
        self.signed().to_f64()
    }

    /// Absolute signed value
    pub fn abs(&self) -> FieldValue {
        self.signed().abs()
    }

    /// Canonical residue padded to the field's record width
    fn fixed_width_bytes(&self) -> Vec<u8> {
        le_bytes_padded(&self.value.to_bytes_le(), self.field.byte_length).unwrap_or_default()
    }
}

impl_element_binop!(PrimeFieldElement, Add, add, AddAssign, add_assign, add_elem);
impl_element_binop!(PrimeFieldElement, Sub, sub, SubAssign, sub_assign, sub_elem);
impl_element_binop!(PrimeFieldElement, Mul, mul, MulAssign, mul_assign, mul_elem);

impl_integer_binop!(PrimeFieldElement, Add, add, add_int, add_int; i32, i64, u32, u64, BigInt);
impl_integer_binop!(PrimeFieldElement, Sub, sub, sub_int, rsub_int; i32, i64, u32, u64, BigInt);
impl_integer_binop!(PrimeFieldElement, Mul, mul, mul_int, mul_int; i32, i64, u32, u64, BigInt);

impl_shl!(PrimeFieldElement, shl_bits);

impl Neg for PrimeFieldElement {
    type Output = PrimeFieldElement;
    fn neg(self) -> PrimeFieldElement {
        (&self).neg()
    }
}

impl<'a> Neg for &'a PrimeFieldElement {
    type Output = PrimeFieldElement;
    fn neg(self) -> PrimeFieldElement {
        self.rsub_value(&BigUint::zero())
    }
}

impl PartialEq for PrimeFieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.same_field_as(other) && self.value == other.value
    }
}

impl Eq for PrimeFieldElement {}

macro_rules! impl_eq_int {
    ($($Int:ty),+) => {
        $(
            impl PartialEq<$Int> for PrimeFieldElement {
                fn eq(&self, n: &$Int) -> bool {
                    self.eq_int(&BigInt::from(*n))
                }
            }
        )+
    };
}

impl_eq_int!(i32, i64, u32, u64);

impl PartialEq<BigInt> for PrimeFieldElement {
    fn eq(&self, n: &BigInt) -> bool {
        self.eq_int(n)
    }
}

impl PartialEq<f64> for PrimeFieldElement {
    fn eq(&self, x: &f64) -> bool {
        self.eq_float(*x)
    }
}

impl ConstantTimeEq for PrimeFieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        if !self.same_field_as(other) {
            return Choice::from(0);
        }
        ct_eq_choice(self.fixed_width_bytes(), other.fixed_width_bytes())
    }
}

impl From<PrimeFieldElement> for Operand<PrimeFieldElement> {
    fn from(e: PrimeFieldElement) -> Self {
        Operand::Element(e)
    }
}

impl From<&PrimeFieldElement> for Operand<PrimeFieldElement> {
    fn from(e: &PrimeFieldElement) -> Self {
        Operand::Element(e.clone())
    }
}

impl fmt::Display for PrimeFieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.signed())
    }
}

impl fmt::Debug for PrimeFieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.field, self.value)
    }
}

impl FieldElement for PrimeFieldElement {
    type Field = PrimeField;

    fn field(&self) -> &'static PrimeField {
        self.field
    }

    fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    fn reciprocal(&self) -> Result<Self> {
        PrimeFieldElement::reciprocal(self)
    }

    fn divide(&self, rhs: &Self) -> Result<Self> {
        self.try_div(rhs)
    }

    fn shift_right(&self, k: u32) -> Result<Self> {
        self.try_shr(k)
    }

    fn to_le_bytes(&self) -> Vec<u8> {
        self.value.to_bytes_le()
    }
}
