//! Traits shared by the prime and binary field families

pub mod field;
pub mod serialize;

pub use field::{Field, FieldElement};
pub use serialize::WireCodec;
