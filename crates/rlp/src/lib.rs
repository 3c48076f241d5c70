//! Recursive-length-prefix encoding with a single exact-size allocation.
//!
//! [`encode`] sizes the output with [`length`] and then fills it from the
//! back with [`Encoder`], so nested list prefixes never require copying.

pub mod encode;
pub mod error;
pub mod item;
pub mod length;
pub mod traits;

pub use encode::{encode_into, Encoder, LIST_OFFSET, STRING_OFFSET};
pub use error::{EncoderError, Result};
pub use item::Item;
pub use length::{boilerplate, length};
pub use traits::Encode;

use rlp_codec_types::Bytes;
use tracing::trace;

/// RLP prefix byte for a 0-length string.
pub const EMPTY_STRING_CODE: u8 = STRING_OFFSET;

/// RLP prefix byte for a 0-length list.
pub const EMPTY_LIST_CODE: u8 = LIST_OFFSET;

pub fn encode(item: &Item) -> Bytes {
    Bytes::from_vec(encode_to_vec(item))
}

pub fn encode_value<T: Encode + ?Sized>(value: &T) -> Bytes {
    encode(&value.to_item())
}

pub fn encode_to_vec(item: &Item) -> Vec<u8> {
    let len = length(item);
    trace!(kind = item.kind(), len, "encoding item");
    
    let mut buffer = vec![0u8; len];
    let mut encoder = Encoder::new(&mut buffer);
    encoder.encode_item(item);
    assert_eq!(
        encoder.remaining(),
        0,
        "encoder consumed fewer bytes than the {} computed",
        len
    );
    
    buffer
}
