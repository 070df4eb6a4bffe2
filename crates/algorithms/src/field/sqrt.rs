//! Modular square roots over prime fields
//!
//! Three cases by the shape of the modulus:
//!
//! - `p = 2`: every element is its own square root.
//! - `p ≡ 3 (mod 4)`: closed form `a^((p+1)/4)`, and `a^((3p-5)/4)` for the
//!   inverse root.
//! - `p ≡ 1 (mod 4)`: Cipolla-Lehmer. Pick the smallest `b ≥ 1` with
//!   `b² − 4a` a non-residue, then `X^((p+1)/2) mod (X² − bX + a)` is the
//!   constant `v` with `v² = a`.
//!
//! The input is assumed to be a quadratic residue; for a non-residue the
//! output is an unspecified field value.

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

use mpcfield_common::{legendre, mod_exp, mod_inv, test_bit};

/// Square root of `a` modulo the prime `p`, or its inverse when `inverse`
/// is set.
///
/// Zero maps to zero in both modes; callers reject the inverse root of
/// zero before getting here.
pub fn sqrt_mod(a: &BigUint, p: &BigUint, inverse: bool) -> BigUint {
    let a = a % p;
    if a.is_zero() || *p == BigUint::from(2u32) {
        return a;
    }

    if test_bit(p, 0) && test_bit(p, 1) {
        let e = if inverse {
            (p * 3u32 - 5u32) >> 2u32
        } else {
            (p + 1u32) >> 2u32
        };
        return mod_exp(&a, &e, p);
    }

    let v = cipolla_lehmer(&a, p);
    if inverse {
        mod_inv(&v, p).unwrap_or_default()
    } else {
        v
    }
}

/// Cipolla-Lehmer square root of the non-zero residue `a` modulo a prime
/// `p ≡ 1 (mod 4)`
pub fn cipolla_lehmer(a: &BigUint, p: &BigUint) -> BigUint {
    let four_a = BigInt::from(a.clone()) * 4;
    let mut b = BigUint::one();
    while legendre(&(BigInt::from(&b * &b) - &four_a), p) != -1 {
        b += 1u32;
    }

    // u·X + v = X^e mod X² − bX + a
    let neg_a = p - a;
    let e = (p + 1u32) >> 1u32;
    let mut u = BigUint::zero();
    let mut v = BigUint::one();
    for i in (0..e.bits()).rev() {
        let u2 = &u * &u % p;
        let next_u = ((&u << 1u32) * &v + &b * &u2) % p;
        let next_v = (&v * &v + &neg_a * &u2) % p;
        u = next_u;
        v = next_v;
        if test_bit(&e, i) {
            let next_u = (&v + &b * &u) % p;
            let next_v = &neg_a * &u % p;
            u = next_u;
            v = next_v;
        }
    }
    v
}
