//! Common arithmetic shared by the mpcfield field implementations
//!
//! This crate provides the two arithmetic back ends the field layer is
//! built on: exact integer number theory over arbitrary-precision
//! integers (`math_common`) and polynomial arithmetic over GF(2) with
//! one bit per coefficient (`gf2x`).

#![forbid(unsafe_code)]

pub mod gf2x;
pub mod math_common;

pub use gf2x::Gf2Poly;
pub use math_common::{
    gcd, is_prime, jacobi, legendre, mod_exp, mod_floor, mod_inv, next_prime, test_bit,
};
