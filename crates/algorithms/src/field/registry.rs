//! Field descriptor registry
//!
//! Every field descriptor is created here and memoized for the life of the
//! process: asking twice for the same parameter set returns the same
//! `&'static` descriptor, and element compatibility is decided by that
//! identity. Prime fields are keyed by `(p, frac_length)`, binary fields by
//! their modulus polynomial. The cache only grows.
//!
//! Check, create and publish happen under one lock per family, so threads
//! racing on a new parameter set all receive the same descriptor. A
//! construction that fails validation inserts nothing.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use num_bigint::{BigInt, BigUint};
use once_cell::sync::Lazy;

use mpcfield_common::Gf2Poly;

use super::binary::BinaryField;
use super::prime::{PrimeField, PrimeFieldParams};
use super::search::{find_irreducible, find_prime_root, PrimeRoot};
use crate::error::{Result, ResultExt};

/// How the modulus of a prime field is specified
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModulusSpec {
    /// A prime; the subgroup defaults to `(n, w) = (2, -1)`, or `(1, 1)`
    /// for `p = 2`
    Prime(BigUint),
    /// A prime with an explicit root of unity `w` of order `n`
    Root {
        /// Prime modulus
        p: BigUint,
        /// Subgroup order
        n: u64,
        /// Generator, reduced mod `p`
        w: BigInt,
    },
    /// Search for a prime of this bit length first
    BitLength {
        /// Minimum bit length
        bits: u32,
        /// Require `p ≡ 3 (mod 4)`
        blum: bool,
        /// Minimum subgroup order
        nth: u64,
    },
}

impl From<BigUint> for ModulusSpec {
    fn from(p: BigUint) -> Self {
        ModulusSpec::Prime(p)
    }
}

impl From<&BigUint> for ModulusSpec {
    fn from(p: &BigUint) -> Self {
        ModulusSpec::Prime(p.clone())
    }
}

impl From<u64> for ModulusSpec {
    fn from(p: u64) -> Self {
        ModulusSpec::Prime(BigUint::from(p))
    }
}

impl From<u32> for ModulusSpec {
    fn from(p: u32) -> Self {
        ModulusSpec::Prime(BigUint::from(p))
    }
}

impl From<PrimeRoot> for ModulusSpec {
    fn from(r: PrimeRoot) -> Self {
        ModulusSpec::Root {
            p: r.p,
            n: r.n,
            w: r.w,
        }
    }
}

type PrimeKey = (BigUint, u32);

/// Process-wide memo of field descriptors
pub struct FieldRegistry {
    prime: Mutex<HashMap<PrimeKey, &'static PrimeField>>,
    binary: Mutex<HashMap<Gf2Poly, &'static BinaryField>>,
}

static GLOBAL: Lazy<FieldRegistry> = Lazy::new(FieldRegistry::new);

/// The cache holds only fully built descriptors, so a panic elsewhere while
/// the lock was held leaves it consistent.
fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

impl FieldRegistry {
    /// An empty registry.
    ///
    /// Descriptors from different registries are never compatible with
    /// each other; most callers want [`FieldRegistry::global`].
    pub fn new() -> Self {
        FieldRegistry {
            prime: Mutex::new(HashMap::new()),
            binary: Mutex::new(HashMap::new()),
        }
    }

    /// The process-wide registry
    pub fn global() -> &'static FieldRegistry {
        &GLOBAL
    }

    /// Descriptor of GF(p) with `frac_length` fractional bits
    pub fn prime_field(
        &self,
        spec: impl Into<ModulusSpec>,
        frac_length: u32,
    ) -> Result<&'static PrimeField> {
        let (p, n, w) = match spec.into() {
            ModulusSpec::Prime(p) => {
                if p == BigUint::from(2u32) {
                    (p, 1, BigInt::from(1))
                } else {
                    (p, 2, BigInt::from(-1))
                }
            }
            ModulusSpec::Root { p, n, w } => (p, n, w),
            ModulusSpec::BitLength { bits, blum, nth } => {
                let r = find_prime_root(bits, blum, nth)?;
                (r.p, r.n, r.w)
            }
        };

        let mut cache = lock(&self.prime);
        let key = (p, frac_length);
        if let Some(&field) = cache.get(&key) {
            return Ok(field);
        }
        let field: &'static PrimeField =
            Box::leak(Box::new(PrimeField::new(key.0.clone(), n, &w, frac_length)?));
        cache.insert(key, field);
        Ok(field)
    }

    /// Descriptor named by a parameter record
    pub fn prime_field_from_params(&self, params: &PrimeFieldParams) -> Result<&'static PrimeField> {
        let spec = ModulusSpec::Root {
            p: params.modulus.clone(),
            n: params.nth,
            w: params.root.clone(),
        };
        self.prime_field(spec, params.frac_length)
    }

    /// Descriptor of GF(2^d) for an irreducible modulus polynomial
    pub fn binary_field(&self, modulus: impl Into<Gf2Poly>) -> Result<&'static BinaryField> {
        let modulus = modulus.into();
        let mut cache = lock(&self.binary);
        if let Some(&field) = cache.get(&modulus) {
            return Ok(field);
        }
        let field: &'static BinaryField = Box::leak(Box::new(BinaryField::new(modulus.clone())?));
        cache.insert(modulus, field);
        Ok(field)
    }

    /// Descriptor of GF(2^d) over the smallest irreducible polynomial of
    /// degree `d`
    pub fn binary_field_of_degree(&self, d: u64) -> Result<&'static BinaryField> {
        let modulus = find_irreducible(d).with_context("binary_field_of_degree")?;
        self.binary_field(modulus)
    }

    /// Number of cached prime field descriptors
    pub fn prime_len(&self) -> usize {
        lock(&self.prime).len()
    }

    /// Number of cached binary field descriptors
    pub fn binary_len(&self) -> usize {
        lock(&self.binary).len()
    }

    /// Total number of cached descriptors
    pub fn len(&self) -> usize {
        self.prime_len() + self.binary_len()
    }

    /// Whether no descriptor has been created yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// GF(p) from the global registry
pub fn gf_prime(spec: impl Into<ModulusSpec>, frac_length: u32) -> Result<&'static PrimeField> {
    FieldRegistry::global().prime_field(spec, frac_length)
}

/// GF(2^d) from the global registry
pub fn gf_binary(modulus: impl Into<Gf2Poly>) -> Result<&'static BinaryField> {
    FieldRegistry::global().binary_field(modulus)
}
