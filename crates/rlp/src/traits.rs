use crate::item::Item;
use num_bigint::BigUint;
use rlp_codec_types::Bytes;

/// Conversion of native values into the [`Item`] tree the encoder walks.
pub trait Encode {
    fn to_item(&self) -> Item;
}

macro_rules! impl_encode_unsigned {
    ($($t:ty),*) => {
        $(
            impl Encode for $t {
                fn to_item(&self) -> Item {
                    Item::integer(*self)
                }
            }
        )*
    };
}

impl_encode_unsigned!(u8, u16, u32, u64, u128, usize);

impl Encode for bool {
    fn to_item(&self) -> Item {
        Item::integer(u8::from(*self))
    }
}

impl Encode for BigUint {
    fn to_item(&self) -> Item {
        Item::UnsignedInteger(self.clone())
    }
}

impl Encode for [u8] {
    fn to_item(&self) -> Item {
        Item::bytes(self)
    }
}

impl Encode for Vec<u8> {
    fn to_item(&self) -> Item {
        Item::bytes(self.as_slice())
    }
}

impl<const N: usize> Encode for [u8; N] {
    fn to_item(&self) -> Item {
        Item::bytes(self.as_slice())
    }
}

impl Encode for str {
    fn to_item(&self) -> Item {
        Item::bytes(self.as_bytes())
    }
}

impl Encode for String {
    fn to_item(&self) -> Item {
        Item::bytes(self.as_bytes())
    }
}

impl Encode for Bytes {
    fn to_item(&self) -> Item {
        Item::bytes(self.as_slice())
    }
}

impl Encode for Item {
    fn to_item(&self) -> Item {
        self.clone()
    }
}

impl<T: Encode> Encode for Option<T> {
    fn to_item(&self) -> Item {
        match self {
            Some(value) => value.to_item(),
            None => Item::empty_bytes(),
        }
    }
}

impl<T: Encode + ?Sized> Encode for &T {
    fn to_item(&self) -> Item {
        (**self).to_item()
    }
}

impl Item {
    /// List whose children are the items of `values`, in order.
    pub fn list_of<T: Encode>(values: &[T]) -> Item {
        Item::List(values.iter().map(Encode::to_item).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_primitives() {
        assert_eq!(7u64.to_item(), Item::integer(7u8));
        assert_eq!(true.to_item(), Item::integer(1u8));
        assert_eq!(false.to_item(), Item::integer(0u8));
        assert_eq!("dog".to_item(), Item::bytes(b"dog".to_vec()));
        assert_eq!([1u8, 2].to_item(), Item::bytes(vec![1, 2]));
    }
    
    #[test]
    fn test_option() {
        assert_eq!(None::<u64>.to_item(), Item::empty_bytes());
        assert_eq!(Some(5u64).to_item(), Item::integer(5u8));
    }
    
    #[test]
    fn test_list_of() {
        let item = Item::list_of(&["cat", "dog"]);
        assert_eq!(
            item,
            Item::list(vec![Item::from("cat"), Item::from("dog")])
        );
        assert_eq!(Item::list_of::<u8>(&[]), Item::empty_list());
    }
}
