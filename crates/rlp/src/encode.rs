use crate::item::Item;
use crate::length::{integer_byte_len, SHORT_PAYLOAD_MAX, SINGLE_BYTE_MAX};
use num_bigint::BigUint;

/// Tag base for byte strings and integers.
pub const STRING_OFFSET: u8 = 0x80;

/// Tag base for lists.
pub const LIST_OFFSET: u8 = 0xc0;

/// Writes encodings into a pre-sized buffer from its end toward its start.
///
/// Children are written before their parent, so when a list finishes the
/// distance the cursor travelled is exactly its payload length and the
/// prefix can be placed directly to the left without moving any bytes.
pub struct Encoder<'a> {
    buffer: &'a mut [u8],
    // Bytes still free at the front; the next byte lands at `cursor - 1`.
    cursor: usize,
}

impl<'a> Encoder<'a> {
    /// Encoder that fills all of `buffer`.
    pub fn new(buffer: &'a mut [u8]) -> Self {
        let cursor = buffer.len();
        Encoder { buffer, cursor }
    }
    
    /// Encoder whose first write ends just before index `end`.
    pub fn with_end(buffer: &'a mut [u8], end: usize) -> Self {
        assert!(
            end <= buffer.len(),
            "end {} outside buffer of {} bytes",
            end,
            buffer.len()
        );
        Encoder { buffer, cursor: end }
    }
    
    /// Number of bytes left unwritten at the front of the buffer.
    pub fn remaining(&self) -> usize {
        self.cursor
    }
    
    pub fn encode_item(&mut self, item: &Item) {
        match item {
            Item::ByteString(bytes) => self.encode_bytes(bytes),
            Item::UnsignedInteger(n) => self.encode_integer(n),
            Item::List(items) => self.encode_list(items),
        }
    }
    
    pub fn encode_bytes(&mut self, bytes: &[u8]) {
        if let [byte] = bytes {
            if *byte <= SINGLE_BYTE_MAX {
                self.put(*byte);
                return;
            }
        }
        
        let start = self.reserve(bytes.len());
        self.buffer[start..start + bytes.len()].copy_from_slice(bytes);
        self.put_prefix(bytes.len(), STRING_OFFSET);
    }
    
    /// Zero has no magnitude bytes and so encodes as a bare `0x80`, unlike
    /// the single byte string `[0x00]`.
    pub fn encode_integer(&mut self, n: &BigUint) {
        let len = integer_byte_len(n);
        
        if len == 1 {
            let byte = n.iter_u64_digits().next().unwrap_or(0) as u8;
            if byte <= SINGLE_BYTE_MAX {
                self.put(byte);
                return;
            }
        }
        
        // Least significant byte first, so the magnitude ends up big-endian.
        let mut written = 0;
        for mut digit in n.iter_u64_digits() {
            for _ in 0..8 {
                if written == len {
                    break;
                }
                self.put(digit as u8);
                digit >>= 8;
                written += 1;
            }
        }
        
        self.put_prefix(len, STRING_OFFSET);
    }
    
    pub fn encode_list(&mut self, items: &[Item]) {
        let end = self.cursor;
        for item in items.iter().rev() {
            self.encode_item(item);
        }
        self.put_prefix(end - self.cursor, LIST_OFFSET);
    }
    
    fn put(&mut self, byte: u8) {
        let index = self.reserve(1);
        self.buffer[index] = byte;
    }
    
    fn reserve(&mut self, count: usize) -> usize {
        assert!(
            count <= self.cursor,
            "encoder overran its buffer: {} bytes requested, {} free",
            count,
            self.cursor
        );
        self.cursor -= count;
        self.cursor
    }
    
    /// Writes the tag (and long-form length bytes) for a payload that
    /// already sits immediately to the right of the cursor.
    fn put_prefix(&mut self, payload_len: usize, offset: u8) {
        if payload_len <= SHORT_PAYLOAD_MAX {
            self.put(offset + payload_len as u8);
            return;
        }
        
        let mut rest = payload_len;
        let mut len_of_len = 0u8;
        while rest > 0 {
            self.put(rest as u8);
            rest >>= 8;
            len_of_len += 1;
        }
        self.put(offset + SHORT_PAYLOAD_MAX as u8 + len_of_len);
    }
}

/// Writes `item` so that its last byte lands at index `cursor`, and returns
/// the index just left of its first byte.
///
/// Starting at `buffer.len() - 1` with a buffer sized by
/// [`length`](crate::length::length), the returned cursor is `-1`.
///
/// # Panics
///
/// Panics if `cursor` is outside `-1..buffer.len()` or the encoding does
/// not fit in `buffer[..=cursor]`.
pub fn encode_into(buffer: &mut [u8], cursor: isize, item: &Item) -> isize {
    assert!(
        cursor >= -1 && cursor < buffer.len() as isize,
        "cursor {} outside buffer of {} bytes",
        cursor,
        buffer.len()
    );
    
    let mut encoder = Encoder::with_end(buffer, (cursor + 1) as usize);
    encoder.encode_item(item);
    encoder.remaining() as isize - 1
}
