//! Descriptor identity and concurrent first use of the field registry

use std::ptr;
use std::sync::{Arc, Barrier};
use std::thread;

use mpcfield_algorithms::field::prelude::*;
use num_bigint::{BigInt, BigUint};

#[test]
fn test_same_parameters_same_descriptor() {
    let a = gf_prime(10_007u64, 0).unwrap();
    let b = gf_prime(BigUint::from(10_007u32), 0).unwrap();
    assert!(ptr::eq(a, b));

    let x = gf_binary(283u64).unwrap();
    let y = gf_binary(Gf2Poly::from(283u64)).unwrap();
    assert!(ptr::eq(x, y));
}

#[test]
fn test_frac_length_is_part_of_the_key() {
    let int = gf_prime(10_009u64, 0).unwrap();
    let fixed = gf_prime(10_009u64, 4).unwrap();
    assert!(!ptr::eq(int, fixed));
    assert_eq!(int.frac_length(), 0);
    assert_eq!(fixed.frac_length(), 4);
    assert_eq!(int.modulus(), fixed.modulus());
}

#[test]
fn test_first_root_wins() {
    let registry = FieldRegistry::new();
    let p = BigUint::from(10_037u32);
    let first = registry.prime_field(p.clone(), 0).unwrap();
    let second = registry
        .prime_field(
            ModulusSpec::Root { p, n: 1, w: BigInt::from(1) },
            0,
        )
        .unwrap();
    assert!(ptr::eq(first, second));
    assert_eq!(second.nth(), 2);
    assert_eq!(registry.prime_len(), 1);
}

#[test]
fn test_bit_length_goes_through_search() {
    let registry = FieldRegistry::new();
    let spec = ModulusSpec::BitLength { bits: 32, blum: true, nth: 1 };
    let f = registry.prime_field(spec, 0).unwrap();
    assert!(f.modulus().bits() >= 32);
    assert_eq!(f.modulus() % 4u32, BigUint::from(3u32));

    // The searched prime is cached under its value
    let again = registry.prime_field(f.modulus().clone(), 0).unwrap();
    assert!(ptr::eq(f, again));
}

#[test]
fn test_rejections_are_not_cached() {
    let registry = FieldRegistry::new();
    assert!(registry.prime_field(15u64, 0).is_err());
    assert!(registry.binary_field(15u64).is_err());
    assert!(registry.is_empty());
}

#[test]
fn test_elements_of_distinct_registries_are_foreign() {
    let local = FieldRegistry::new();
    let a = local.prime_field(10_039u64, 0).unwrap().element(3);
    let b = gf_prime(10_039u64, 0).unwrap().element(3);
    assert!(!a.same_field(&b));
    assert!(a.try_add(&b).unwrap_err().is_unsupported_operand());
}

#[test]
fn test_concurrent_first_use_converges() {
    const THREADS: usize = 8;
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let prime = gf_prime(1_000_003u64, 3).unwrap() as *const PrimeField as usize;
                let binary = FieldRegistry::global()
                    .binary_field_of_degree(16)
                    .unwrap() as *const BinaryField as usize;
                (prime, binary)
            })
        })
        .collect();

    let results: Vec<(usize, usize)> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_concurrent_local_registry() {
    let registry = Arc::new(FieldRegistry::new());

    let handles: Vec<_> = (0..4u64)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for d in 1..=6 {
                    registry.binary_field_of_degree(d).unwrap();
                }
                registry.prime_field(10_061u64, (i % 2) as u32).unwrap();
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(registry.binary_len(), 6);
    assert_eq!(registry.prime_len(), 2);
    assert_eq!(registry.len(), 8);
}
