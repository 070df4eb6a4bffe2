//! Common number-theoretic operations over arbitrary-precision integers

use core::mem;

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Small primes used for trial division and as Miller-Rabin witnesses
const SMALL_PRIMES: [u32; 25] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
];

/// Least significant 32 bits of `n`
#[inline]
fn low_u32(n: &BigUint) -> u32 {
    n.iter_u32_digits().next().unwrap_or(0)
}

/// Whether bit `i` of `n` is set
pub fn test_bit(n: &BigUint, i: u64) -> bool {
    let word = (i / 64) as usize;
    n.iter_u64_digits()
        .nth(word)
        .map_or(false, |w| (w >> (i % 64)) & 1 == 1)
}

/// Perform modular exponentiation (a^b mod m)
///
/// # Panics
///
/// Panics if `m` is zero.
pub fn mod_exp(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    if m.is_one() {
        return BigUint::zero();
    }
    a.modpow(b, m)
}

/// Compute the greatest common divisor of two numbers
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    a.gcd(b)
}

/// Reduce a signed integer into `[0, m)`
pub fn mod_floor(a: &BigInt, m: &BigUint) -> BigUint {
    let m = BigInt::from(m.clone());
    let (_, magnitude) = a.mod_floor(&m).into_parts();
    magnitude
}

/// Extended Euclidean algorithm to compute a^(-1) mod m
pub fn mod_inv(a: &BigUint, m: &BigUint) -> Option<BigUint> {
    if m.is_zero() {
        return None;
    }
    if m.is_one() {
        return Some(BigUint::zero());
    }

    let a = a % m;
    if a.is_zero() {
        return None; // No modular inverse exists for 0
    }

    let mut old_r = BigInt::from(a);
    let mut r = BigInt::from(m.clone());
    let mut old_s = BigInt::one();
    let mut s = BigInt::zero();

    while !r.is_zero() {
        let q = &old_r / &r;

        let next_r = &old_r - &q * &r;
        old_r = mem::replace(&mut r, next_r);

        let next_s = &old_s - &q * &s;
        old_s = mem::replace(&mut s, next_s);
    }

    if old_r.is_one() {
        Some(mod_floor(&old_s, m))
    } else {
        // Not coprime
        None
    }
}

/// Jacobi symbol (a / n) for odd positive `n`
///
/// Returns 0 when `gcd(a, n) > 1`, otherwise ±1. The result for an even
/// `n` is meaningless.
pub fn jacobi(a: &BigInt, n: &BigUint) -> i8 {
    let mut a = mod_floor(a, n);
    let mut n = n.clone();
    let mut t = 1i8;

    while !a.is_zero() {
        while a.is_even() {
            a >>= 1u32;
            let r = low_u32(&n) & 7;
            if r == 3 || r == 5 {
                t = -t;
            }
        }
        mem::swap(&mut a, &mut n);
        if low_u32(&a) & 3 == 3 && low_u32(&n) & 3 == 3 {
            t = -t;
        }
        a %= &n;
    }

    if n.is_one() {
        t
    } else {
        0
    }
}

/// Legendre symbol (a / p) for prime `p`
///
/// For `p = 2` every residue is a square, so the result is `a mod 2`.
pub fn legendre(a: &BigInt, p: &BigUint) -> i8 {
    if *p == BigUint::from(2u32) {
        return if a.is_odd() { 1 } else { 0 };
    }
    jacobi(a, p)
}

/// Primality test
///
/// Trial division by the primes below 100 followed by strong-probable-prime
/// rounds to the same 25 bases. Deterministic for every `n < 3.3·10^24`;
/// above that a composite passes with probability below `4^-25`.
pub fn is_prime(n: &BigUint) -> bool {
    if n < &BigUint::from(2u32) {
        return false;
    }
    for &p in SMALL_PRIMES.iter() {
        if *n == BigUint::from(p) {
            return true;
        }
        if (n % p).is_zero() {
            return false;
        }
    }

    let n_minus_one = n - 1u32;
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;

    'witness: for &a in SMALL_PRIMES.iter() {
        let mut x = BigUint::from(a).modpow(&d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = &x * &x % n;
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// Smallest prime strictly greater than `n`
pub fn next_prime(n: &BigUint) -> BigUint {
    let two = BigUint::from(2u32);
    if n < &two {
        return two;
    }
    let mut candidate = n + 1u32;
    if candidate.is_even() {
        candidate += 1u32;
    }
    while !is_prime(&candidate) {
        candidate += 2u32;
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn test_modular_exponentiation() {
        assert_eq!(mod_exp(&big(2), &big(10), &big(1000)), big(24));
        assert_eq!(mod_exp(&big(3), &big(4), &big(10)), big(1));
        assert_eq!(mod_exp(&big(5), &big(3), &big(1)), big(0));
    }

    #[test]
    fn test_bit_access() {
        let n = (BigUint::one() << 100u32) + 5u32;
        assert!(test_bit(&n, 0));
        assert!(!test_bit(&n, 1));
        assert!(test_bit(&n, 2));
        assert!(test_bit(&n, 100));
        assert!(!test_bit(&n, 1000));
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(&big(48), &big(18)), big(6));
        assert_eq!(gcd(&big(17), &big(5)), big(1));
    }

    #[test]
    fn test_modular_inverse() {
        assert_eq!(mod_inv(&big(3), &big(11)), Some(big(4)));
        assert_eq!(mod_inv(&big(10), &big(17)), Some(big(12)));
        assert_eq!(mod_inv(&big(0), &big(11)), None);
        assert_eq!(mod_inv(&big(6), &big(9)), None);
        assert_eq!(mod_inv(&big(1), &big(2)), Some(big(1)));
    }

    #[test]
    fn test_mod_floor_negative() {
        assert_eq!(mod_floor(&BigInt::from(-1), &big(11)), big(10));
        assert_eq!(mod_floor(&BigInt::from(-22), &big(11)), big(0));
        assert_eq!(mod_floor(&BigInt::from(35), &big(11)), big(2));
    }

    #[test]
    fn test_legendre_symbol() {
        // Squares mod 11 are {1, 3, 4, 5, 9}
        let p = big(11);
        let squares = [1i64, 3, 4, 5, 9];
        for a in 1i64..11 {
            let expected = if squares.contains(&a) { 1 } else { -1 };
            assert_eq!(legendre(&BigInt::from(a), &p), expected, "a = {}", a);
        }
        assert_eq!(legendre(&BigInt::from(0), &p), 0);
        assert_eq!(legendre(&BigInt::from(-2), &p), legendre(&BigInt::from(9), &p));
        assert_eq!(legendre(&BigInt::from(3), &big(2)), 1);
    }

    #[test]
    fn test_jacobi_composite() {
        // (2 / 15) = (2 / 3)(2 / 5) = (-1)(-1) = 1
        assert_eq!(jacobi(&BigInt::from(2), &big(15)), 1);
        assert_eq!(jacobi(&BigInt::from(5), &big(15)), 0);
    }

    #[test]
    fn test_primality() {
        let primes = [2u64, 3, 5, 97, 101, 7919, 2_147_483_647, 1_000_000_007];
        for p in primes {
            assert!(is_prime(&big(p)), "{} is prime", p);
        }
        // Carmichael numbers and strong pseudoprimes to small bases
        let composites = [0u64, 1, 4, 561, 1105, 2047, 3_215_031_751, 1_000_000_007 * 3];
        for c in composites {
            assert!(!is_prime(&big(c)), "{} is composite", c);
        }
        // 2^127 - 1 is a Mersenne prime, 2^128 + 1 is not
        let m127 = (BigUint::one() << 127u32) - 1u32;
        assert!(is_prime(&m127));
        assert!(!is_prime(&((BigUint::one() << 128u32) + 1u32)));
    }

    #[test]
    fn test_next_prime() {
        assert_eq!(next_prime(&big(0)), big(2));
        assert_eq!(next_prime(&big(2)), big(3));
        assert_eq!(next_prime(&big(8)), big(11));
        assert_eq!(next_prime(&big(11)), big(13));
        assert_eq!(next_prime(&big(1 << 16)), big(65537));
    }
}
