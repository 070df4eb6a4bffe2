//! Field parameter search
//!
//! [`find_prime_root`] picks a prime modulus of a requested bit length
//! together with a root of unity; [`find_irreducible`] picks the modulus
//! polynomial of a binary field.

use num_bigint::{BigInt, BigUint};
use num_traits::{One, ToPrimitive};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use mpcfield_common::{is_prime, mod_exp, next_prime, test_bit, Gf2Poly};

use crate::error::{validate, Error, Result};

/// A prime `p` with a primitive `n`-th root of unity `w`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrimeRoot {
    /// Prime modulus
    pub p: BigUint,
    /// Order of the subgroup generated by `w`
    pub n: u64,
    /// Generator; `-1` for the subgroup of order 2
    pub w: BigInt,
}

/// Smallest prime of bit length at least `l` with a root of unity of
/// prime order at least `n`.
///
/// With `blum` set the prime satisfies `p ≡ 3 (mod 4)`. For `n ≤ 2` the
/// root is `-1`. For `n > 2`, `n` is moved up to the next prime if needed
/// and `p ≡ 1 (mod n)` is searched along `p ≡ 3 (mod 4)`; this requires
/// `blum`.
pub fn find_prime_root(l: u32, blum: bool, n: u64) -> Result<PrimeRoot> {
    validate::parameter(l > 0, "find_prime_root", "bit length must be positive")?;

    if l == 2 {
        if blum {
            return Ok(PrimeRoot {
                p: BigUint::from(3u32),
                n: 2,
                w: BigInt::from(-1),
            });
        }
        validate::parameter(
            n <= 1,
            "find_prime_root",
            "GF(2) only has the trivial subgroup",
        )?;
        return Ok(PrimeRoot {
            p: BigUint::from(2u32),
            n: 1,
            w: BigInt::one(),
        });
    }

    if n <= 2 {
        let mut p = next_prime(&(BigUint::one() << (l - 1)));
        if blum {
            while !(test_bit(&p, 0) && test_bit(&p, 1)) {
                p = next_prime(&p);
            }
        }
        return Ok(PrimeRoot {
            p,
            n: 2,
            w: BigInt::from(-1),
        });
    }

    validate::parameter(
        blum,
        "find_prime_root",
        "subgroups of order above 2 require a Blum prime",
    )?;
    validate::parameter(
        l > 2,
        "find_prime_root",
        "subgroups of order above 2 require a bit length of at least 3",
    )?;

    let n = if is_prime(&BigUint::from(n)) {
        n
    } else {
        next_prime(&BigUint::from(n))
            .to_u64()
            .ok_or_else(|| Error::param("find_prime_root", "subgroup order overflows u64"))?
    };

    // p = 1 + n·(1 + n² mod 4 + 4·⌊2^(l-2)/n⌋), then p ≡ 3 (mod 4) is kept
    // by stepping 4n
    let nb = BigUint::from(n);
    let k = (BigUint::one() << (l - 2)) / &nb;
    let mut p = (&nb * (BigUint::one() + (&nb * &nb) % 4u32 + k * 4u32)) + 1u32;
    let step = &nb << 2u32;
    while !is_prime(&p) {
        p += &step;
    }

    let e = (&p - 1u32) / &nb;
    let mut a = BigUint::one();
    let mut w = BigUint::one();
    while w.is_one() {
        a += 1u32;
        w = mod_exp(&a, &e, &p);
    }

    Ok(PrimeRoot {
        p,
        n,
        w: BigInt::from(w),
    })
}

/// Smallest irreducible polynomial of degree `d`, i.e. the first one
/// above `x^d` in packed order
pub fn find_irreducible(d: u64) -> Result<Gf2Poly> {
    validate::parameter(d > 0, "find_irreducible", "degree must be positive")?;
    let lower = (BigUint::one() << d) - 1u32;
    Ok(Gf2Poly::next_irreducible(&lower))
}
