//! # mpcfield
//!
//! Finite fields for secure multi-party computation: prime fields GF(p) with
//! fixed-point scaling, binary fields GF(2^d), parameter search, modular
//! square roots and a canonical byte format for moving shares.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! mpcfield = "0.3"
//! ```
//!
//! ```
//! use mpcfield::prelude::*;
//!
//! // GF(11): 5 · 7 = 35 = 2
//! let gf = gf_prime(11u64, 0).unwrap();
//! assert_eq!(gf.element(5) * gf.element(7), gf.element(2));
//!
//! // GF(2^3) over x^3 + x + 1: (x + 1)(x^2 + 1) = x^2
//! let gf8 = gf_binary(11u64).unwrap();
//! let prod = gf8.element(3).unwrap() * gf8.element(5).unwrap();
//! assert_eq!(prod, 4u64);
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `serde`: `Serialize`/`Deserialize` for parameter records
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`mpcfield-api`]: error type and the shared field traits
//! - [`mpcfield-common`]: integer number theory and GF(2) polynomials
//! - [`mpcfield-internal`]: byte packing and constant-time comparison
//! - [`mpcfield-algorithms`]: the field families, registry, search and codec

// Core re-exports (always available)
pub use mpcfield_algorithms as algorithms;
pub use mpcfield_api as api;
pub use mpcfield_common as common;
pub use mpcfield_internal as internal;

pub use mpcfield_algorithms::field;
pub use num_bigint;

/// Common imports for mpcfield users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, ResultExt};

    // Re-export core traits
    pub use crate::api::{Field, FieldElement, WireCodec};

    // Field families, registry, search and codec
    pub use crate::algorithms::field::prelude::*;
}
