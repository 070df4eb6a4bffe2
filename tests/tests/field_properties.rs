//! Property-based tests for both field families

use mpcfield_algorithms::field::prelude::*;
use mpcfield_tests::{binary_triple, prime_sequence, prime_triple};
use num_bigint::BigUint;
use num_traits::One;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prime_ring_axioms((a, b, c) in prime_triple()) {
        prop_assert_eq!(&a + &b, &b + &a);
        prop_assert_eq!(&a * &b, &b * &a);
        prop_assert_eq!((&a + &b) + &c, &a + (&b + &c));
        prop_assert_eq!((&a * &b) * &c, &a * (&b * &c));
        prop_assert_eq!(&a * (&b + &c), &a * &b + &a * &c);
        prop_assert!((&a - &a).is_zero());
        prop_assert!((&a + -&a).is_zero());
        prop_assert_eq!(&a - &b, -(&b - &a));
    }

    #[test]
    fn prime_values_stay_canonical((a, b, _c) in prime_triple()) {
        let p = a.field().modulus().clone();
        prop_assert!(a.value() < &p);
        prop_assert!((&a * &b).value() < &p);
        prop_assert!((&a - &b).value() < &p);
        prop_assert!((&a + 7u64).value() < &p);
        prop_assert!((&a - 7i64).value() < &p);
    }

    #[test]
    fn prime_division_inverts_multiplication((a, b, _c) in prime_triple()) {
        prop_assume!(b.is_nonzero());
        let q = a.try_div(&b).unwrap();
        prop_assert_eq!(&q * &b, a.clone());

        let inv = b.reciprocal().unwrap();
        prop_assert!((&inv * &b).value().is_one());
        prop_assert_eq!(b.pow(-1).unwrap(), inv);
    }

    #[test]
    fn prime_fermat((a, _b, _c) in prime_triple()) {
        prop_assume!(a.is_nonzero());
        let p_minus_1 = a.field().modulus() - 1u32;
        prop_assert!(a.pow(p_minus_1).unwrap().value().is_one());
    }

    #[test]
    fn prime_sqrt_of_square((a, _b, _c) in prime_triple()) {
        let sq = &a * &a;
        prop_assert!(sq.is_sqr());
        let r = sq.sqrt(false).unwrap();
        prop_assert_eq!(&r * &r, sq.clone());
        prop_assert!(r == a || r == -&a);
    }

    #[test]
    fn prime_inverse_sqrt((a, _b, _c) in prime_triple()) {
        prop_assume!(a.is_nonzero());
        let sq = &a * &a;
        let r = sq.sqrt(true).unwrap();
        prop_assert!((&r * &r * &sq).value().is_one());
    }

    #[test]
    fn prime_shift_round_trip((a, _b, _c) in prime_triple(), k in 0u32..96) {
        prop_assert_eq!((&a << k).try_shr(k).unwrap(), a.clone());
    }

    #[test]
    fn binary_ring_axioms((a, b, c) in binary_triple()) {
        prop_assert_eq!(&a + &b, &b + &a);
        prop_assert_eq!(&a * &b, &b * &a);
        prop_assert_eq!((&a + &b) + &c, &a + (&b + &c));
        prop_assert_eq!((&a * &b) * &c, &a * (&b * &c));
        prop_assert_eq!(&a * (&b + &c), &a * &b + &a * &c);
        // Characteristic two
        prop_assert!((&a + &a).is_zero());
        prop_assert_eq!(&a - &b, &a + &b);
        prop_assert_eq!(-&a, a.clone());
    }

    #[test]
    fn binary_values_stay_canonical((a, b, _c) in binary_triple()) {
        let d = a.field().ext_deg();
        prop_assert!(a.value().degree().map_or(true, |deg| deg < d));
        prop_assert!((&a * &b).value().degree().map_or(true, |deg| deg < d));
        prop_assert!(a.to_biguint() < *a.field().order());
    }

    #[test]
    fn binary_frobenius_is_additive((a, b, _c) in binary_triple()) {
        let sum_sq = (&a + &b).pow(2).unwrap();
        prop_assert_eq!(sum_sq, a.pow(2).unwrap() + b.pow(2).unwrap());
    }

    #[test]
    fn binary_division_inverts_multiplication((a, b, _c) in binary_triple()) {
        prop_assume!(b.is_nonzero());
        let q = a.try_div(&b).unwrap();
        prop_assert_eq!(&q * &b, a.clone());
        prop_assert!((b.reciprocal().unwrap() * &b).value().is_one());
    }

    #[test]
    fn binary_fermat((a, _b, _c) in binary_triple()) {
        prop_assume!(a.is_nonzero());
        let order_minus_1 = a.field().order() - BigUint::one();
        prop_assert!(a.pow(order_minus_1).unwrap().value().is_one());
    }

    #[test]
    fn binary_shift_round_trip((a, _b, _c) in binary_triple(), k in 0u32..64) {
        prop_assert_eq!((&a << k).try_shr(k).unwrap(), a.clone());
    }

    #[test]
    fn prime_codec_round_trip(seq in prime_sequence()) {
        let field = seq[0].field();
        let bytes = field.to_bytes(&seq).unwrap();
        let width = field.record_width();
        prop_assert_eq!(bytes.len(), 2 + width * seq.len());
        prop_assert_eq!(u16::from_le_bytes([bytes[0], bytes[1]]) as usize, width);
        prop_assert_eq!(field.elements_from_bytes(&bytes).unwrap(), seq);
    }

    #[test]
    fn binary_codec_round_trip((a, b, c) in binary_triple()) {
        let field = a.field();
        let seq = vec![a, b, c];
        let bytes = field.to_bytes(&seq).unwrap();
        prop_assert_eq!(field.elements_from_bytes(&bytes).unwrap(), seq);
    }

    #[test]
    fn truncated_payload_is_rejected(seq in prime_sequence(), cut in 1usize..8) {
        let field = seq[0].field();
        let bytes = field.to_bytes(&seq).unwrap();
        prop_assume!(cut < field.record_width());
        let truncated = &bytes[..bytes.len() - cut];
        let is_malformed = matches!(
            from_bytes(truncated),
            Err(mpcfield_api::Error::MalformedEncoding { .. })
        );
        prop_assert!(is_malformed);
    }
}
