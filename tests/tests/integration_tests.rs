//! End-to-end scenarios across the public API

use mpcfield_algorithms::field::prelude::*;
use mpcfield_api::Error;
use num_bigint::{BigInt, BigUint};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use subtle::ConstantTimeEq;

#[test]
fn test_prime_multiplication_wraps() {
    let gf = gf_prime(11u64, 0).unwrap();
    let c = gf.element(5) * gf.element(7);
    assert_eq!(c, gf.element(2));
    assert_eq!(c, 2);
    assert_eq!(format!("{:?}", c), "GF(11)(2)");
}

#[test]
fn test_blum_square_root() {
    let gf = gf_prime(11u64, 0).unwrap();
    let four = gf.element(4);
    assert!(four.is_sqr());

    let r = four.sqrt(false).unwrap();
    assert_eq!(&r * &r, four);
    assert!(r == 2 || r == 9);

    let s = four.sqrt(true).unwrap();
    assert!(s == 6 || s == 5);
    assert_eq!(&s * &s * &four, 1);
}

#[test]
fn test_binary_multiplication_reduces() {
    let gf8 = gf_binary(11u64).unwrap();
    assert_eq!(gf8.ext_deg(), 3);
    assert_eq!(gf8.to_string(), "GF(2^3)");

    let a = gf8.element(3).unwrap();
    let b = gf8.element(5).unwrap();
    let c = &a * &b;
    assert_eq!(c, 4u64);
    assert_eq!(c.value(), &Gf2Poly::monomial(2));
}

#[test]
fn test_blum_prime_search() {
    let root = find_prime_root(4, true, 1).unwrap();
    assert!(root.p.bits() >= 4);
    assert_eq!(&root.p % 4u32, BigUint::from(3u32));
    assert_eq!(root.p, BigUint::from(11u32));

    let gf = gf_prime(root, 0).unwrap();
    assert_eq!(gf.modulus(), &BigUint::from(11u32));
}

#[test]
fn test_share_encoding() {
    let gf = gf_prime(65_521u64, 0).unwrap();
    assert_eq!(gf.record_width(), 2);

    let bytes = gf.to_bytes(&[gf.element(3), gf.element(300)]).unwrap();
    assert_eq!(bytes, vec![0x02, 0x00, 0x03, 0x00, 0x2C, 0x01]);

    let values = from_bytes(&bytes).unwrap();
    assert_eq!(values, vec![BigUint::from(3u32), BigUint::from(300u32)]);

    let decoded = gf.elements_from_bytes(&bytes).unwrap();
    assert_eq!(decoded, vec![gf.element(3), gf.element(300)]);

    let zeroizing = gf.to_bytes_zeroizing(&decoded).unwrap();
    assert_eq!(zeroizing.as_slice(), bytes.as_slice());
}

#[test]
fn test_roots_of_unity() {
    let root = find_prime_root(32, true, 5).unwrap();
    let gf = gf_prime(root.clone(), 0).unwrap();
    let w = gf.root_of_unity();

    assert_eq!(gf.nth(), 5);
    assert!(w.pow(5).unwrap() == 1);
    assert!(w != 1);
    assert_eq!((gf.modulus() - 1u32) % 5u32, BigUint::from(0u32));
}

#[test]
fn test_fixed_point_pipeline() {
    let p = (BigUint::from(1u32) << 31u32) - 1u32;
    let gf = gf_prime(p, 8).unwrap();

    let a = gf.from_fixed(1.5).unwrap();
    let b = gf.from_fixed(-2.25).unwrap();
    let prod = (&a * &b).try_shr(8).unwrap();
    assert_eq!(prod.to_f64(), -3.375);
    assert_eq!(prod.to_bigint(), BigInt::from(-3));
    assert!(prod.try_eq(-3.375).unwrap());

    // Integers compare in their scaled encoding
    assert!(gf.from_fixed(2.0).unwrap().try_eq(2).unwrap());
    assert_eq!(gf.from_fixed(-0.5).unwrap().abs(), FieldValue::Fraction(0.5));
}

#[test]
fn test_error_surface() {
    assert!(matches!(gf_prime(15u64, 0), Err(Error::InvalidParameter { .. })));
    assert!(matches!(gf_prime(2u64, 3), Err(Error::InvalidParameter { .. })));
    assert!(matches!(gf_binary(15u64), Err(Error::InvalidParameter { .. })));
    assert!(matches!(find_irreducible(0), Err(Error::InvalidParameter { .. })));
    assert!(matches!(find_prime_root(0, true, 1), Err(Error::InvalidParameter { .. })));

    let gf = gf_prime(11u64, 0).unwrap();
    assert!(matches!(
        gf.element(3).try_div(0),
        Err(Error::DivisionByZero { .. })
    ));
    assert!(matches!(
        gf.zero().reciprocal(),
        Err(Error::DivisionByZero { .. })
    ));
    assert!(matches!(
        gf.element(3).try_mul(0.5),
        Err(Error::UnsupportedOperand { operation: "mul", operand: "float" })
    ));

    let gf8 = gf_binary(11u64).unwrap();
    assert!(matches!(gf8.element(8), Err(Error::InvalidParameter { .. })));
    assert!(matches!(gf8.element(-1), Err(Error::InvalidParameter { .. })));
    assert!(matches!(
        gf8.elements_from_bytes(&[0x01, 0x00, 0x09]),
        Err(Error::InvalidParameter { .. })
    ));

    assert!(matches!(from_bytes(&[0x01]), Err(Error::MalformedEncoding { .. })));
    assert!(matches!(from_bytes(&[0x00, 0x00]), Err(Error::MalformedEncoding { .. })));
    assert!(matches!(
        from_bytes(&[0x02, 0x00, 0x01]),
        Err(Error::MalformedEncoding { .. })
    ));
}

#[test]
#[should_panic(expected = "field mismatch")]
fn test_operator_on_mixed_fields_panics() {
    let a = gf_prime(11u64, 0).unwrap().element(1);
    let b = gf_prime(13u64, 0).unwrap().element(1);
    let _ = a + b;
}

#[test]
fn test_mixed_fields_through_fallible_api() {
    let a = gf_prime(11u64, 0).unwrap().element(1);
    let b = gf_prime(13u64, 0).unwrap().element(1);
    let err = a.try_add(&b).unwrap_err();
    assert!(err.is_unsupported_operand());

    let gf = gf_prime(13u64, 0).unwrap();
    assert!(gf.to_bytes(&[a]).unwrap_err().is_unsupported_operand());
}

#[test]
fn test_constant_time_equality() {
    let gf = gf_prime(11u64, 0).unwrap();
    assert!(bool::from(gf.element(4).ct_eq(&gf.element(15))));
    assert!(!bool::from(gf.element(4).ct_eq(&gf.element(5))));

    let gf8 = gf_binary(11u64).unwrap();
    assert!(bool::from(gf8.element(6).unwrap().ct_eq(&gf8.element(6).unwrap())));
}

#[test]
fn test_random_shares_reconstruct() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let gf = gf_prime(1_000_003u64, 0).unwrap();
    let secret = gf.element(424_242);

    // Additive sharing over three parties
    let s1 = gf.random(&mut rng);
    let s2 = gf.random(&mut rng);
    let s3 = &secret - &s1 - &s2;

    let wire = gf.to_bytes(&[s1, s2, s3]).unwrap();
    let shares = gf.elements_from_bytes(&wire).unwrap();
    let total = shares.iter().fold(gf.zero(), |acc, s| acc + s);
    assert_eq!(total, secret);
}

#[test]
fn test_params_round_trip_through_json() {
    let root = find_prime_root(64, true, 3).unwrap();
    let field = gf_prime(root, 4).unwrap();
    let params = field.params();

    let json = serde_json::to_string(&params).unwrap();
    let parsed: PrimeFieldParams = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, params);

    let restored = FieldRegistry::global().prime_field_from_params(&parsed).unwrap();
    assert!(std::ptr::eq(restored, field));

    // frac_length defaults to zero when absent
    let mut value = serde_json::to_value(&params).unwrap();
    value.as_object_mut().unwrap().remove("frac_length");
    let integer: PrimeFieldParams = serde_json::from_value(value).unwrap();
    assert_eq!(integer.frac_length, 0);
    let integer_field = FieldRegistry::global().prime_field_from_params(&integer).unwrap();
    assert!(!std::ptr::eq(integer_field, field));
}

#[test]
fn test_prime_root_serializes() {
    let root = find_prime_root(16, true, 1).unwrap();
    let json = serde_json::to_string(&root).unwrap();
    let back: PrimeRoot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, root);
}
