//! Internal utilities for the mpcfield library
//!
//! Byte-order packing used by the share wire format and constant-time
//! comparison helpers used by field element equality. Nothing here knows
//! about fields; callers hand in plain byte slices.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod constant_time;
pub mod endian;

pub use constant_time::{ct_eq, ct_eq_choice};
pub use endian::{le_bytes_padded, u16_from_le_bytes, u16_to_le_bytes};
