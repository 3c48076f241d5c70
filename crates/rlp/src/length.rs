//! Exact encoded-size computation.
//!
//! Nothing here allocates or writes; [`length`] walks the tree once and
//! predicts the byte count the backward encoder will consume.

use crate::item::Item;
use num_bigint::BigUint;

/// Largest payload that fits the single-byte short form.
pub const SHORT_PAYLOAD_MAX: usize = 55;

/// Largest value a byte string or integer may carry without a tag.
pub const SINGLE_BYTE_MAX: u8 = 0x7f;

/// Number of bytes `item` occupies once encoded.
pub fn length(item: &Item) -> usize {
    match item {
        Item::ByteString(bytes) => match bytes.as_slice() {
            [] => 1,
            [byte] if *byte <= SINGLE_BYTE_MAX => 1,
            _ => boilerplate(bytes.len()),
        },
        Item::UnsignedInteger(n) => {
            if n.bits() <= 7 {
                1
            } else {
                boilerplate(integer_byte_len(n))
            }
        }
        Item::List(items) => boilerplate(items.iter().map(length).sum()),
    }
}

/// Total size of a prefixed payload: tag byte, optional big-endian length
/// bytes, then the payload itself.
pub fn boilerplate(payload_len: usize) -> usize {
    if payload_len <= SHORT_PAYLOAD_MAX {
        1 + payload_len
    } else {
        1 + length_of_length(payload_len) + payload_len
    }
}

/// Minimal big-endian byte count of `len`. Zero needs no bytes.
pub fn length_of_length(len: usize) -> usize {
    (usize::BITS - len.leading_zeros()).div_ceil(8) as usize
}

/// Minimal big-endian byte count of `n`. Zero needs no bytes.
pub fn integer_byte_len(n: &BigUint) -> usize {
    n.bits().div_ceil(8) as usize
}
