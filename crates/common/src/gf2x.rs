//! Polynomial arithmetic over GF(2)
//!
//! A polynomial is packed into an arbitrary-precision integer with one
//! bit per coefficient: bit `i` is the coefficient of `x^i`.
//!
//! ```text
//! 0b0000_0111 = 7  → x^2 + x + 1
//! 0b0000_1011 = 11 → x^3 + x + 1
//! 0b1_0001_1011 = 283 → x^8 + x^4 + x^3 + x + 1
//! ```
//!
//! Addition is XOR, multiplication is shift-and-XOR. Modular operations
//! return `None` when the modulus is the zero polynomial.

use core::fmt;
use core::mem;
use core::ops::{Add, Mul};

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::math_common::test_bit;

/// Polynomial over GF(2), packed one bit per coefficient
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Gf2Poly(BigUint);

impl Gf2Poly {
    /// The zero polynomial
    pub fn zero() -> Self {
        Gf2Poly(BigUint::zero())
    }

    /// The constant polynomial 1
    pub fn one() -> Self {
        Gf2Poly(BigUint::one())
    }

    /// The monomial `x^k`
    pub fn monomial(k: u64) -> Self {
        Gf2Poly(BigUint::one() << k)
    }

    /// The polynomial `x`
    pub fn x() -> Self {
        Self::monomial(1)
    }

    /// Packed integer view
    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    /// Consume into the packed integer
    pub fn into_biguint(self) -> BigUint {
        self.0
    }

    /// Whether this is the zero polynomial
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Whether this is the constant polynomial 1
    pub fn is_one(&self) -> bool {
        self.0.is_one()
    }

    /// Degree, `None` for the zero polynomial
    pub fn degree(&self) -> Option<u64> {
        match self.0.bits() {
            0 => None,
            b => Some(b - 1),
        }
    }

    /// Number of non-zero coefficients
    pub fn weight(&self) -> u64 {
        self.0
            .iter_u64_digits()
            .map(|w| u64::from(w.count_ones()))
            .sum()
    }

    /// Exponents of the non-zero coefficients, lowest first
    fn exponents(&self) -> impl Iterator<Item = u64> + '_ {
        self.0
            .iter_u64_digits()
            .enumerate()
            .flat_map(|(i, word)| {
                (0..64u64)
                    .filter(move |j| (word >> j) & 1 == 1)
                    .map(move |j| i as u64 * 64 + j)
            })
    }

    /// Polynomial addition (XOR of coefficients)
    pub fn add(&self, other: &Self) -> Self {
        Gf2Poly(&self.0 ^ &other.0)
    }

    /// Carry-less polynomial multiplication
    pub fn mul(&self, other: &Self) -> Self {
        // Iterate over the sparser operand
        let (dense, sparse) = if self.weight() >= other.weight() {
            (self, other)
        } else {
            (other, self)
        };
        let mut acc = BigUint::zero();
        for k in sparse.exponents() {
            acc ^= &dense.0 << k;
        }
        Gf2Poly(acc)
    }

    /// Polynomial long division, returning `(quotient, remainder)`
    pub fn div_rem(&self, modulus: &Self) -> Option<(Self, Self)> {
        let dm = modulus.degree()?;
        let mut r = self.0.clone();
        let mut q = BigUint::zero();
        while r.bits() > dm {
            let shift = r.bits() - 1 - dm;
            r ^= &modulus.0 << shift;
            q |= BigUint::one() << shift;
        }
        Some((Gf2Poly(q), Gf2Poly(r)))
    }

    /// Remainder modulo `modulus`
    pub fn rem(&self, modulus: &Self) -> Option<Self> {
        self.div_rem(modulus).map(|(_, r)| r)
    }

    /// `self * other mod modulus`
    pub fn mul_mod(&self, other: &Self, modulus: &Self) -> Option<Self> {
        self.mul(other).rem(modulus)
    }

    /// `self^e mod modulus` by left-to-right square-and-multiply
    pub fn pow_mod(&self, e: &BigUint, modulus: &Self) -> Option<Self> {
        let base = self.rem(modulus)?;
        let mut result = Gf2Poly::one().rem(modulus)?;
        for i in (0..e.bits()).rev() {
            result = result.mul_mod(&result, modulus)?;
            if test_bit(e, i) {
                result = result.mul_mod(&base, modulus)?;
            }
        }
        Some(result)
    }

    /// Greatest common divisor
    pub fn gcd(a: &Self, b: &Self) -> Self {
        let mut a = a.clone();
        let mut b = b.clone();
        while !b.is_zero() {
            // b is non-zero, so the remainder exists
            let r = match a.rem(&b) {
                Some(r) => r,
                None => break,
            };
            a = mem::replace(&mut b, r);
        }
        a
    }

    /// Inverse modulo `modulus` by the extended Euclidean algorithm
    pub fn inv_mod(&self, modulus: &Self) -> Option<Self> {
        let a = self.rem(modulus)?;
        if a.is_zero() {
            return None;
        }

        let mut old_r = a;
        let mut r = modulus.clone();
        let mut old_s = Gf2Poly::one();
        let mut s = Gf2Poly::zero();

        while !r.is_zero() {
            let (q, rem) = old_r.div_rem(&r)?;
            old_r = mem::replace(&mut r, rem);
            let next_s = old_s.add(&q.mul(&s));
            old_s = mem::replace(&mut s, next_s);
        }

        if old_r.is_one() {
            old_s.rem(modulus)
        } else {
            None
        }
    }

    /// Rabin's irreducibility test.
    ///
    /// A polynomial `f` of degree `n ≥ 2` is irreducible iff
    /// `x^(2^n) ≡ x (mod f)` and `gcd(x^(2^(n/q)) − x, f) = 1` for every
    /// prime divisor `q` of `n`. Constants are not irreducible; linear
    /// polynomials are.
    pub fn is_irreducible(&self) -> bool {
        let n = match self.degree() {
            None | Some(0) => return false,
            Some(1) => return true,
            Some(d) => d,
        };
        // x divides any polynomial without constant term
        if !test_bit(&self.0, 0) {
            return false;
        }

        let divisors = prime_divisors(n);
        let x = Gf2Poly::x();
        let mut h = x.clone();
        for i in 1..=n {
            h = match h.mul_mod(&h, self) {
                Some(sq) => sq,
                None => return false,
            };
            if divisors.iter().any(|&q| i * q == n) {
                let g = Gf2Poly::gcd(&h.add(&x), self);
                if !g.is_one() {
                    return false;
                }
            }
        }
        h == x
    }

    /// Smallest irreducible polynomial whose packed value exceeds `lower`
    pub fn next_irreducible(lower: &BigUint) -> Self {
        let mut candidate = lower + 1u32;
        loop {
            let poly = Gf2Poly(candidate.clone());
            // Even values other than x itself are divisible by x
            if (test_bit(&candidate, 0) || poly == Gf2Poly::x()) && poly.is_irreducible() {
                return poly;
            }
            candidate += 1u32;
        }
    }
}

/// Distinct prime divisors of `n`
fn prime_divisors(mut n: u64) -> Vec<u64> {
    let mut primes = Vec::new();
    let mut d = 2;
    while d <= n / d {
        if n % d == 0 {
            primes.push(d);
            while n % d == 0 {
                n /= d;
            }
        }
        d += 1;
    }
    if n > 1 {
        primes.push(n);
    }
    primes
}

impl From<BigUint> for Gf2Poly {
    fn from(value: BigUint) -> Self {
        Gf2Poly(value)
    }
}

impl From<&BigUint> for Gf2Poly {
    fn from(value: &BigUint) -> Self {
        Gf2Poly(value.clone())
    }
}

impl From<u64> for Gf2Poly {
    fn from(value: u64) -> Self {
        Gf2Poly(BigUint::from(value))
    }
}

impl From<Gf2Poly> for BigUint {
    fn from(poly: Gf2Poly) -> Self {
        poly.0
    }
}

impl<'a, 'b> Add<&'b Gf2Poly> for &'a Gf2Poly {
    type Output = Gf2Poly;
    #[inline]
    fn add(self, rhs: &'b Gf2Poly) -> Gf2Poly {
        Gf2Poly::add(self, rhs)
    }
}

impl<'a, 'b> Mul<&'b Gf2Poly> for &'a Gf2Poly {
    type Output = Gf2Poly;
    #[inline]
    fn mul(self, rhs: &'b Gf2Poly) -> Gf2Poly {
        Gf2Poly::mul(self, rhs)
    }
}

impl fmt::Display for Gf2Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let mut exps: Vec<u64> = self.exponents().collect();
        exps.reverse();
        for (i, e) in exps.iter().enumerate() {
            if i > 0 {
                write!(f, "+")?;
            }
            match e {
                0 => write!(f, "1")?,
                1 => write!(f, "x")?,
                _ => write!(f, "x^{}", e)?,
            }
        }
        Ok(())
    }
}
