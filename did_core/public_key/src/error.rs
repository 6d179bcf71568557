use thiserror::Error;

use crate::KeyType;

#[derive(Debug, Error)]
pub enum PublicKeyError {
    #[error("Multibase decoding error")]
    MultibaseDecodingError(#[from] multibase::Error),
    #[error("Varint decoding error")]
    VarintDecodingError(#[from] VarintDecodingError),
    #[error("Unsupported multicodec descriptor: {0}")]
    UnsupportedMulticodecDescriptor(u64),
    #[error("Invalid KeyType {0}, expected KeyType: {1}")]
    InvalidKeyType(KeyType, KeyType),
    #[error("Unknown elliptic curve: {0}")]
    UnknownCurve(String),
    #[error("Invalid compressed point: {0}")]
    InvalidPoint(String),
}

#[derive(Debug, Error)]
pub struct VarintDecodingError(unsigned_varint::decode::Error);

impl std::fmt::Display for VarintDecodingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Varint decoding error: {}", self.0)
    }
}

impl From<unsigned_varint::decode::Error> for VarintDecodingError {
    fn from(error: unsigned_varint::decode::Error) -> Self {
        Self(error)
    }
}

impl From<unsigned_varint::decode::Error> for PublicKeyError {
    fn from(error: unsigned_varint::decode::Error) -> Self {
        Self::VarintDecodingError(error.into())
    }
}
