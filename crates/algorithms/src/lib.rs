//! Finite-field algebra for secure multi-party computation
//!
//! This crate provides the field layer that secret-shared values are
//! computed over:
//!
//! - prime fields GF(p) with fixed-point scaling by `2^f`
//! - binary extension fields GF(2^d)
//! - a process-wide registry that memoizes field descriptors
//! - prime/root and irreducible-polynomial parameter search
//! - modular square roots and quadratic-residue tests
//! - the fixed-width share wire format
//!
//! # Example
//!
//! ```
//! use mpcfield_algorithms::field::prelude::*;
//!
//! let gf = gf_prime(11u64, 0).unwrap();
//! assert_eq!(gf.element(5) * gf.element(7), gf.element(2));
//!
//! let bytes = gf.to_bytes(&[gf.element(3)]).unwrap();
//! assert_eq!(bytes, vec![1, 0, 3]);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Field families, registry, search and codec
pub mod field;
pub use field::{
    find_irreducible, find_prime_root, gf_binary, gf_prime, BinaryField, BinaryFieldElement,
    FieldRegistry, FieldValue, ModulusSpec, Operand, PrimeField, PrimeFieldElement,
    PrimeFieldParams, PrimeRoot,
};
