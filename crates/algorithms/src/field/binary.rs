//! Binary extension fields GF(2^d)
//!
//! Elements are polynomials over GF(2) of degree below `d`, reduced modulo
//! an irreducible polynomial of degree `d` and packed one bit per
//! coefficient. Addition and subtraction coincide (XOR); negation is the
//! identity.

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Shl, ShlAssign, Sub, SubAssign};
use core::ptr;

use num_bigint::{BigInt, BigUint, RandBigInt, Sign};
use num_traits::{One, Zero};
use rand::Rng;
use subtle::{Choice, ConstantTimeEq};

use mpcfield_api::{Field, FieldElement};
use mpcfield_common::Gf2Poly;
use mpcfield_internal::{ct_eq_choice, le_bytes_padded};

use super::operand::{unsupported, Operand, FOREIGN_ELEMENT};
use crate::error::{validate, Error, Result, ResultExt};

/// Descriptor of the binary field GF(2^d)
#[derive(Debug)]
pub struct BinaryField {
    modulus: Gf2Poly,
    ext_deg: u64,
    order: BigUint,
    byte_length: usize,
}

impl BinaryField {
    /// Build a descriptor; the registry is the only caller.
    pub(crate) fn new(modulus: Gf2Poly) -> Result<Self> {
        if !modulus.is_irreducible() {
            return Err(Error::param(
                "GF(2^d)",
                format!("{} is not irreducible", modulus),
            ));
        }
        // Irreducible polynomials have degree at least 1
        let ext_deg = modulus.degree().unwrap_or(0);
        Ok(BinaryField {
            modulus,
            ext_deg,
            order: BigUint::one() << ext_deg,
            byte_length: ((ext_deg + 7) / 8) as usize,
        })
    }

    /// The irreducible modulus polynomial
    pub fn modulus(&self) -> &Gf2Poly {
        &self.modulus
    }

    /// Extension degree `d`
    pub fn ext_deg(&self) -> u64 {
        self.ext_deg
    }

    /// Number of elements, `2^d`
    pub fn order(&self) -> &BigUint {
        &self.order
    }

    /// Binary fields carry no fixed-point scaling
    pub fn frac_length(&self) -> u32 {
        0
    }

    /// Bytes per encoded element, `ceil(d / 8)`
    pub fn byte_length(&self) -> usize {
        self.byte_length
    }

    /// Element from a packed polynomial `0 <= v < 2^d`
    pub fn element<T: Into<BigInt>>(&'static self, v: T) -> Result<BinaryFieldElement> {
        let (sign, magnitude) = v.into().into_parts();
        validate::parameter(
            sign != Sign::Minus && magnitude < self.order,
            "GF(2^d)",
            "packed polynomial out of range",
        )?;
        Ok(self.wrap(Gf2Poly::from(magnitude)))
    }

    /// Element from an arbitrary polynomial, reduced modulo the field
    /// polynomial
    pub fn from_poly(&'static self, poly: &Gf2Poly) -> BinaryFieldElement {
        self.wrap(self.reduce(poly))
    }

    /// Uniformly random element
    pub fn random<R: Rng + ?Sized>(&'static self, rng: &mut R) -> BinaryFieldElement {
        self.wrap(Gf2Poly::from(rng.gen_biguint_below(&self.order)))
    }

    /// Additive identity
    pub fn zero(&'static self) -> BinaryFieldElement {
        self.wrap(Gf2Poly::zero())
    }

    /// Multiplicative identity
    pub fn one(&'static self) -> BinaryFieldElement {
        self.wrap(self.reduce(&Gf2Poly::one()))
    }

    #[inline]
    fn wrap(&'static self, value: Gf2Poly) -> BinaryFieldElement {
        BinaryFieldElement { field: self, value }
    }

    /// `x^k` reduced modulo the field polynomial by square-and-multiply
    fn x_pow(&self, k: u32) -> Gf2Poly {
        Gf2Poly::x()
            .pow_mod(&BigUint::from(k), &self.modulus)
            .unwrap_or_default()
    }

    /// Remainder modulo the field polynomial, which is never zero
    #[inline]
    fn reduce(&self, poly: &Gf2Poly) -> Gf2Poly {
        poly.rem(&self.modulus).unwrap_or_default()
    }
}

impl fmt::Display for BinaryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF(2^{})", self.ext_deg)
    }
}

impl Field for BinaryField {
    type Element = BinaryFieldElement;

    fn frac_length(&self) -> u32 {
        0
    }

    fn record_width(&self) -> usize {
        self.byte_length
    }

    fn zero(&'static self) -> BinaryFieldElement {
        BinaryField::zero(self)
    }

    fn one(&'static self) -> BinaryFieldElement {
        BinaryField::one(self)
    }
}

/// Element of a binary field
///
/// Invariant: `deg(value) < d`.
#[derive(Clone)]
pub struct BinaryFieldElement {
    field: &'static BinaryField,
    value: Gf2Poly,
}

impl BinaryFieldElement {
    /// Descriptor of the field this element belongs to
    pub fn field(&self) -> &'static BinaryField {
        self.field
    }

    /// Reduced polynomial value
    pub fn value(&self) -> &Gf2Poly {
        &self.value
    }

    /// Packed integer form of the value
    pub fn to_biguint(&self) -> BigUint {
        self.value.as_biguint().clone()
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
    fn with_value(&self, value: Gf2Poly) -> Self {
        BinaryFieldElement {
            field: self.field,
            value,
        }
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

    /// Interpret an integer operand as a packed polynomial
    fn poly_operand(&self, n: BigInt, operation: &'static str) -> Result<Gf2Poly> {
        match n.into_parts() {
            (Sign::Minus, _) => Err(unsupported(operation, "negative integer")),
            (_, magnitude) => Ok(self.field.reduce(&Gf2Poly::from(magnitude))),
        }
    }

    /// Resolve an operand to a reduced polynomial of this field
    fn resolve(&self, rhs: Operand<Self>, operation: &'static str) -> Result<Gf2Poly> {
        match rhs {
            Operand::Element(b) => {
                self.check_same_field(&b, operation)?;
                Ok(b.value)
            }
            Operand::Int(n) => self.poly_operand(n, operation),
            Operand::Float(_) => Err(unsupported(operation, "float")),
        }
    }

    fn add_value(&self, v: &Gf2Poly) -> Self {
        self.with_value(self.value.add(v))
    }

    fn mul_value(&self, v: &Gf2Poly) -> Self {
        self.with_value(self.field.reduce(&self.value.mul(v)))
    }

    fn add_elem(&self, rhs: &Self) -> Self {
        self.assert_same_field(rhs);
        self.add_value(&rhs.value)
    }

    fn mul_elem(&self, rhs: &Self) -> Self {
        self.assert_same_field(rhs);
        self.mul_value(&rhs.value)
    }

    fn add_int(&self, n: BigUint) -> Self {
        self.add_value(&self.field.reduce(&Gf2Poly::from(n)))
    }

    fn mul_int(&self, n: BigUint) -> Self {
        self.mul_value(&self.field.reduce(&Gf2Poly::from(n)))
    }

    fn shl_bits(&self, k: u32) -> Self {
        self.mul_value(&self.field.x_pow(k))
    }

    /// `self + rhs` for an element of the same field or a packed
    /// polynomial
    pub fn try_add<O: Into<Operand<Self>>>(&self, rhs: O) -> Result<Self> {
        let v = self.resolve(rhs.into(), "add")?;
        Ok(self.add_value(&v))
    }

    /// `self - rhs`, identical to addition
    pub fn try_sub<O: Into<Operand<Self>>>(&self, rhs: O) -> Result<Self> {
        let v = self.resolve(rhs.into(), "sub")?;
        Ok(self.add_value(&v))
    }

    /// `lhs - self`, identical to addition
    pub fn try_rsub<O: Into<Operand<Self>>>(&self, lhs: O) -> Result<Self> {
        let v = self.resolve(lhs.into(), "rsub")?;
        Ok(self.add_value(&v))
    }

    /// `self * rhs`
    pub fn try_mul<O: Into<Operand<Self>>>(&self, rhs: O) -> Result<Self> {
        let v = self.resolve(rhs.into(), "mul")?;
        Ok(self.mul_value(&v))
    }

    /// `self / rhs`, `DivisionByZero` when `rhs` is zero
    pub fn try_div<O: Into<Operand<Self>>>(&self, rhs: O) -> Result<Self> {
        let v = self.resolve(rhs.into(), "div")?;
        let inv = self.with_value(v).reciprocal().with_context("div")?;
        Ok(self.mul_value(&inv.value))
    }

    /// `lhs / self`, `DivisionByZero` when `self` is zero
    pub fn try_rdiv<O: Into<Operand<Self>>>(&self, lhs: O) -> Result<Self> {
        let v = self.resolve(lhs.into(), "rdiv")?;
        let inv = self.reciprocal().with_context("rdiv")?;
        Ok(inv.mul_value(&v))
    }

    /// Equality with an element or a packed polynomial
    pub fn try_eq<O: Into<Operand<Self>>>(&self, rhs: O) -> Result<bool> {
        match rhs.into() {
            Operand::Element(b) => {
                self.check_same_field(&b, "eq")?;
                Ok(self.value == b.value)
            }
            Operand::Int(n) => match n.into_parts() {
                (Sign::Minus, _) => Err(unsupported("eq", "negative integer")),
                (_, magnitude) => Ok(*self.value.as_biguint() == magnitude),
            },
            Operand::Float(_) => Err(unsupported("eq", "float")),
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
        let value = base
            .value
            .pow_mod(&magnitude, &self.field.modulus)
            .unwrap_or_default();
        Ok(self.with_value(value))
    }

    /// Multiplicative inverse by the extended Euclidean algorithm
    pub fn reciprocal(&self) -> Result<Self> {
        validate::nonzero(self.is_zero(), "reciprocal")?;
        let inv = self
            .value
            .inv_mod(&self.field.modulus)
            .ok_or(Error::DivisionByZero { context: "reciprocal" })?;
        Ok(self.with_value(inv))
    }

    /// Division by `x^k`: multiplication by the reciprocal of
    /// `x^k mod modulus`, computed afresh on every call
    pub fn try_shr(&self, k: u32) -> Result<Self> {
        let inv = self
            .with_value(self.field.x_pow(k))
            .reciprocal()
            .with_context("shift_right")?;
        Ok(self.mul_value(&inv.value))
    }

    /// In-place [`try_shr`](Self::try_shr)
    pub fn try_shr_assign(&mut self, k: u32) -> Result<()> {
        *self = self.try_shr(k)?;
        Ok(())
    }

    fn fixed_width_bytes(&self) -> Vec<u8> {
        le_bytes_padded(&self.value.as_biguint().to_bytes_le(), self.field.byte_length)
            .unwrap_or_default()
    }
}

impl_element_binop!(BinaryFieldElement, Add, add, AddAssign, add_assign, add_elem);
impl_element_binop!(BinaryFieldElement, Sub, sub, SubAssign, sub_assign, add_elem);
impl_element_binop!(BinaryFieldElement, Mul, mul, MulAssign, mul_assign, mul_elem);

impl_integer_binop!(BinaryFieldElement, Add, add, add_int, add_int; u32, u64, BigUint);
impl_integer_binop!(BinaryFieldElement, Sub, sub, add_int, add_int; u32, u64, BigUint);
impl_integer_binop!(BinaryFieldElement, Mul, mul, mul_int, mul_int; u32, u64, BigUint);

impl_shl!(BinaryFieldElement, shl_bits);

impl Neg for BinaryFieldElement {
    type Output = BinaryFieldElement;
    fn neg(self) -> BinaryFieldElement {
        self
    }
}

impl<'a> Neg for &'a BinaryFieldElement {
    type Output = BinaryFieldElement;
    fn neg(self) -> BinaryFieldElement {
        self.clone()
    }
}

impl PartialEq for BinaryFieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.same_field_as(other) && self.value == other.value
    }
}

impl Eq for BinaryFieldElement {}

impl PartialEq<u32> for BinaryFieldElement {
    fn eq(&self, n: &u32) -> bool {
        *self.value.as_biguint() == BigUint::from(*n)
    }
}

impl PartialEq<u64> for BinaryFieldElement {
    fn eq(&self, n: &u64) -> bool {
        *self.value.as_biguint() == BigUint::from(*n)
    }
}

impl PartialEq<Gf2Poly> for BinaryFieldElement {
    fn eq(&self, poly: &Gf2Poly) -> bool {
        self.value == *poly
    }
}

impl ConstantTimeEq for BinaryFieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        if !self.same_field_as(other) {
            return Choice::from(0);
        }
        ct_eq_choice(self.fixed_width_bytes(), other.fixed_width_bytes())
    }
}

impl From<BinaryFieldElement> for Operand<BinaryFieldElement> {
    fn from(e: BinaryFieldElement) -> Self {
        Operand::Element(e)
    }
}

impl From<&BinaryFieldElement> for Operand<BinaryFieldElement> {
    fn from(e: &BinaryFieldElement) -> Self {
        Operand::Element(e.clone())
    }
}

impl From<Gf2Poly> for Operand<BinaryFieldElement> {
    fn from(poly: Gf2Poly) -> Self {
        Operand::Int(BigInt::from(poly.into_biguint()))
    }
}

impl fmt::Display for BinaryFieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value.as_biguint())
    }
}

impl fmt::Debug for BinaryFieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.field, self.value)
    }
}

impl FieldElement for BinaryFieldElement {
    type Field = BinaryField;

    fn field(&self) -> &'static BinaryField {
        self.field
    }

    fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    fn reciprocal(&self) -> Result<Self> {
        BinaryFieldElement::reciprocal(self)
    }

    fn divide(&self, rhs: &Self) -> Result<Self> {
        self.try_div(rhs)
    }

    fn shift_right(&self, k: u32) -> Result<Self> {
        self.try_shr(k)
    }

    fn to_le_bytes(&self) -> Vec<u8> {
        self.value.as_biguint().to_bytes_le()
    }
}
