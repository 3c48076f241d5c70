use crate::error::{EncoderError, Result};
use num_bigint::{BigInt, BigUint, Sign};
use rlp_codec_types::Bytes;

/// A value that can be RLP encoded.
///
/// Integers are unsigned by construction; the signed conversions below
/// reject negative inputs instead of wrapping them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Item {
    UnsignedInteger(BigUint),
    ByteString(Vec<u8>),
    List(Vec<Item>),
}

impl Item {
    pub fn integer(value: impl Into<BigUint>) -> Self {
        Item::UnsignedInteger(value.into())
    }
    
    pub fn bytes(value: impl Into<Vec<u8>>) -> Self {
        Item::ByteString(value.into())
    }
    
    pub fn list(items: impl IntoIterator<Item = Item>) -> Self {
        Item::List(items.into_iter().collect())
    }
    
    pub fn empty_bytes() -> Self {
        Item::ByteString(Vec::new())
    }
    
    pub fn empty_list() -> Self {
        Item::List(Vec::new())
    }
    
    pub fn from_signed(value: i128) -> Result<Self> {
        u128::try_from(value)
            .map(Item::from)
            .map_err(|_| EncoderError::NegativeInteger(value.to_string()))
    }
    
    pub fn is_list(&self) -> bool {
        matches!(self, Item::List(_))
    }
    
    pub fn as_integer(&self) -> Option<&BigUint> {
        match self {
            Item::UnsignedInteger(n) => Some(n),
            _ => None,
        }
    }
    
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Item::ByteString(bytes) => Some(bytes),
            _ => None,
        }
    }
    
    pub fn as_list(&self) -> Option<&[Item]> {
        match self {
            Item::List(items) => Some(items),
            _ => None,
        }
    }
    
    /// Short name of the variant, used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            Item::UnsignedInteger(_) => "integer",
            Item::ByteString(_) => "bytes",
            Item::List(_) => "list",
        }
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Item {
                fn from(value: $t) -> Self {
                    Item::UnsignedInteger(BigUint::from(value))
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);

impl From<BigUint> for Item {
    fn from(value: BigUint) -> Self {
        Item::UnsignedInteger(value)
    }
}

impl From<Vec<u8>> for Item {
    fn from(value: Vec<u8>) -> Self {
        Item::ByteString(value)
    }
}

impl From<&[u8]> for Item {
    fn from(value: &[u8]) -> Self {
        Item::ByteString(value.to_vec())
    }
}

impl From<&str> for Item {
    fn from(value: &str) -> Self {
        Item::ByteString(value.as_bytes().to_vec())
    }
}

impl From<Bytes> for Item {
    fn from(value: Bytes) -> Self {
        Item::ByteString(value.into_vec())
    }
}

impl From<Vec<Item>> for Item {
    fn from(value: Vec<Item>) -> Self {
        Item::List(value)
    }
}

impl TryFrom<i64> for Item {
    type Error = EncoderError;
    
    fn try_from(value: i64) -> Result<Self> {
        Item::from_signed(i128::from(value))
    }
}

impl TryFrom<i128> for Item {
    type Error = EncoderError;
    
    fn try_from(value: i128) -> Result<Self> {
        Item::from_signed(value)
    }
}

impl TryFrom<BigInt> for Item {
    type Error = EncoderError;
    
    fn try_from(value: BigInt) -> Result<Self> {
        match value.sign() {
            Sign::Minus => Err(EncoderError::NegativeInteger(value.to_string())),
            _ => Ok(Item::UnsignedInteger(value.magnitude().clone())),
        }
    }
}
