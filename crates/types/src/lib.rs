pub mod bytes;

pub use bytes::Bytes;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypesError {
    #[error("Invalid hex string: {0}")]
    InvalidHex(String),
    
    #[error("Hex string has odd length: {0}")]
    OddLength(usize),
}

pub type Result<T> = std::result::Result<T, TypesError>;
