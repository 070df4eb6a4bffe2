//! Share wire format
//!
//! A sequence of elements of one field is encoded as
//!
//! ```text
//! +------------------+----------------+----------------+-----
//! | r: u16 LE (2 B)  | record 0 (r B) | record 1 (r B) | ...
//! +------------------+----------------+----------------+-----
//! ```
//!
//! with every record the little-endian canonical value zero-padded to `r`
//! bytes. There is no count field: the number of records is
//! `(len - 2) / r`. For `GF(p)` the width is `ceil(bitlen(p) / 8)`, for
//! `GF(2^d)` it is `ceil(d / 8)`.

use core::ptr;

use num_bigint::BigUint;

use mpcfield_api::{Field, WireCodec};
use mpcfield_internal::{le_bytes_padded, u16_from_le_bytes, u16_to_le_bytes};

use super::binary::{BinaryField, BinaryFieldElement};
use super::operand::{unsupported, FOREIGN_ELEMENT};
use super::prime::{PrimeField, PrimeFieldElement};
use crate::error::{validate, Error, Result, ResultExt};

/// Size of the record-width header
pub const HEADER_LEN: usize = 2;

/// Encode raw integers as `width`-byte records behind the width header
pub fn encode_values<'a, I>(width: usize, values: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = &'a BigUint>,
{
    validate::parameter(
        width > 0 && width <= usize::from(u16::MAX),
        "encode_values",
        "record width must be between 1 and 65535 bytes",
    )?;

    let values = values.into_iter();
    let mut data = Vec::with_capacity(HEADER_LEN + width * values.size_hint().0);
    data.extend_from_slice(&u16_to_le_bytes(width as u16));
    for v in values {
        let record = le_bytes_padded(&v.to_bytes_le(), width).ok_or_else(|| {
            Error::param(
                "encode_values",
                format!("{} does not fit in {} bytes", v, width),
            )
        })?;
        data.extend_from_slice(&record);
    }
    Ok(data)
}

/// Decode a buffer into the integers it carries
pub fn from_bytes(data: &[u8]) -> Result<Vec<BigUint>> {
    let width = if data.len() >= HEADER_LEN {
        usize::from(u16_from_le_bytes(&data[..HEADER_LEN]))
    } else {
        0
    };
    validate::record_layout("from_bytes", data.len(), width)?;

    Ok(data[HEADER_LEN..]
        .chunks_exact(width)
        .map(BigUint::from_bytes_le)
        .collect())
}

impl WireCodec for PrimeField {
    fn to_bytes(&self, elements: &[PrimeFieldElement]) -> Result<Vec<u8>> {
        if elements.iter().any(|e| !ptr::eq(e.field(), self)) {
            return Err(unsupported("to_bytes", FOREIGN_ELEMENT));
        }
        encode_values(self.record_width(), elements.iter().map(PrimeFieldElement::value))
            .with_context("to_bytes")
    }

    fn elements_from_bytes(&'static self, data: &[u8]) -> Result<Vec<PrimeFieldElement>> {
        Ok(from_bytes(data)?
            .iter()
            .map(|v| self.from_biguint(v))
            .collect())
    }
}

impl WireCodec for BinaryField {
    fn to_bytes(&self, elements: &[BinaryFieldElement]) -> Result<Vec<u8>> {
        if elements.iter().any(|e| !ptr::eq(e.field(), self)) {
            return Err(unsupported("to_bytes", FOREIGN_ELEMENT));
        }
        encode_values(
            self.record_width(),
            elements.iter().map(|e| e.value().as_biguint()),
        )
        .with_context("to_bytes")
    }

    fn elements_from_bytes(&'static self, data: &[u8]) -> Result<Vec<BinaryFieldElement>> {
        from_bytes(data)?
            .into_iter()
            .map(|v| self.element(v).with_context("elements_from_bytes"))
            .collect()
    }
}
