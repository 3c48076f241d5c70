use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncoderError {
    #[error("Invalid input: negative integer {0} cannot be encoded")]
    NegativeInteger(String),
}

pub type Result<T> = std::result::Result<T, EncoderError>;
