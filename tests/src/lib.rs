//! Testing utilities for the mpcfield library
//!
//! Shared field fixtures and proptest strategies for the integration tests
//! under `tests/`.

use mpcfield_algorithms::field::prelude::*;
use num_bigint::BigUint;
use num_traits::One;
use proptest::prelude::*;

/// Prime fields covering both square-root branches and a multi-limb modulus
pub fn prime_fields() -> Vec<&'static PrimeField> {
    vec![
        gf_prime(11u64, 0).unwrap(),
        gf_prime(13u64, 0).unwrap(),
        gf_prime(65_537u64, 0).unwrap(),
        gf_prime((BigUint::one() << 127u32) - 1u32, 0).unwrap(),
        gf_prime((BigUint::one() << 64u32) - 59u32, 0).unwrap(),
    ]
}

/// Binary fields of small, byte-sized and multi-limb degree
pub fn binary_fields() -> Vec<&'static BinaryField> {
    vec![
        gf_binary(11u64).unwrap(),
        gf_binary(283u64).unwrap(),
        FieldRegistry::global().binary_field_of_degree(127).unwrap(),
    ]
}

/// Strategy: a prime field fixture and three of its elements
pub fn prime_triple() -> impl Strategy<Value = (PrimeFieldElement, PrimeFieldElement, PrimeFieldElement)> {
    (0..prime_fields().len(), any::<[u8; 16]>(), any::<[u8; 16]>(), any::<[u8; 16]>()).prop_map(
        |(i, a, b, c)| {
            let f = prime_fields()[i];
            (
                f.from_biguint(&BigUint::from_bytes_le(&a)),
                f.from_biguint(&BigUint::from_bytes_le(&b)),
                f.from_biguint(&BigUint::from_bytes_le(&c)),
            )
        },
    )
}

/// Strategy: a binary field fixture and three of its elements
pub fn binary_triple() -> impl Strategy<Value = (BinaryFieldElement, BinaryFieldElement, BinaryFieldElement)> {
    (0..binary_fields().len(), any::<[u8; 16]>(), any::<[u8; 16]>(), any::<[u8; 16]>()).prop_map(
        |(i, a, b, c)| {
            let f = binary_fields()[i];
            let elem = |bytes: &[u8]| f.from_poly(&Gf2Poly::from(BigUint::from_bytes_le(bytes)));
            (elem(&a), elem(&b), elem(&c))
        },
    )
}

/// Strategy: a non-empty sequence of elements of one prime field
pub fn prime_sequence() -> impl Strategy<Value = Vec<PrimeFieldElement>> {
    (0..prime_fields().len(), prop::collection::vec(any::<[u8; 16]>(), 1..32)).prop_map(
        |(i, raw)| {
            let f = prime_fields()[i];
            raw.iter()
                .map(|bytes| f.from_biguint(&BigUint::from_bytes_le(bytes)))
                .collect()
        },
    )
}
