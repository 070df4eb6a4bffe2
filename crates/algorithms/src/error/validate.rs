//! Validation utilities for field parameters and encodings

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, message: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(context, message));
    }
    Ok(())
}

/// Reject inversion of the additive identity
#[inline(always)]
pub fn nonzero(is_zero: bool, context: &'static str) -> Result<()> {
    if is_zero {
        return Err(Error::DivisionByZero { context });
    }
    Ok(())
}

/// Validate a decoded buffer layout: header present, non-zero record width,
/// payload a whole number of records.
#[inline(always)]
pub fn record_layout(context: &'static str, len: usize, width: usize) -> Result<()> {
    if len < 2 {
        return Err(Error::encoding(
            context,
            format!("buffer of {} bytes is shorter than the 2-byte header", len),
        ));
    }
    if width == 0 {
        return Err(Error::encoding(context, "record width is zero"));
    }
    if (len - 2) % width != 0 {
        return Err(Error::encoding(
            context,
            format!("payload of {} bytes is not a multiple of the record width {}", len - 2, width),
        ));
    }
    Ok(())
}
