//! Finite fields for secure multi-party computation
//!
//! Two field families share one interface:
//!
//! - [`prime`]: GF(p) for a prime `p`, with fixed-point scaling by `2^f`
//! - [`binary`]: GF(2^d) over an irreducible polynomial
//!
//! Descriptors come from the [`registry`], which memoizes them so that the
//! same parameters always yield the same `&'static` descriptor. The
//! [`search`] module finds parameters from a bit length or a degree, and
//! [`codec`] moves element sequences to and from bytes.

#[macro_use]
mod macros;

pub mod binary;
pub mod codec;
pub mod operand;
pub mod prime;
pub mod registry;
pub mod search;
pub mod sqrt;
pub mod value;

pub use binary::{BinaryField, BinaryFieldElement};
pub use codec::{encode_values, from_bytes};
pub use operand::Operand;
pub use prime::{PrimeField, PrimeFieldElement, PrimeFieldParams};
pub use registry::{gf_binary, gf_prime, FieldRegistry, ModulusSpec};
pub use search::{find_irreducible, find_prime_root, PrimeRoot};
pub use value::FieldValue;

/// Prelude for easy importing of the field types and traits.
pub mod prelude {
    pub use super::binary::{BinaryField, BinaryFieldElement};
    pub use super::codec::{encode_values, from_bytes};
    pub use super::operand::Operand;
    pub use super::prime::{PrimeField, PrimeFieldElement, PrimeFieldParams};
    pub use super::registry::{gf_binary, gf_prime, FieldRegistry, ModulusSpec};
    pub use super::search::{find_irreducible, find_prime_root, PrimeRoot};
    pub use super::value::FieldValue;
    pub use mpcfield_api::{Field, FieldElement, WireCodec};
    pub use mpcfield_common::Gf2Poly;
}
