//! Traits for byte serialization of field element sequences.

use crate::traits::field::Field;
use crate::Result;
use zeroize::Zeroizing;

/// Canonical wire format for a sequence of elements of one field:
/// a little-endian `u16` record width followed by fixed-width
/// little-endian records.
pub trait WireCodec: Field {
    /// Encode elements; every element must belong to this field.
    fn to_bytes(&self, elements: &[Self::Element]) -> Result<Vec<u8>>;

    /// Decode a buffer and re-wrap the integers as elements of this field.
    fn elements_from_bytes(&'static self, data: &[u8]) -> Result<Vec<Self::Element>>;

    /// Encode into a buffer that is zeroized on drop, for secret shares.
    fn to_bytes_zeroizing(&self, elements: &[Self::Element]) -> Result<Zeroizing<Vec<u8>>> {
        self.to_bytes(elements).map(Zeroizing::new)
    }
}
