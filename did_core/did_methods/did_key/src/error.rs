use did_parser_nom::ParseError;
use public_key::{KeyType, PublicKeyError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DidKeyError {
    #[error("Required input is missing: {0}")]
    NullInput(&'static str),
    #[error("Not a did:key identifier: {0}")]
    NotDidKey(String),
    #[error("Unsupported DID method '{0}', expected 'key'")]
    UnsupportedMethod(String),
    #[error("Unsupported did:key base encoding, expected base58btc: {0}")]
    BadEncoding(String),
    #[error("Unsupported did:key codec: {0}")]
    UnsupportedCodec(String),
    #[error("Invalid did:key value {did}: {source}")]
    InvalidDid {
        did: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("Key type {0} has no JWK representation")]
    UnsupportedKey(KeyType),
    #[error("Invalid public key point: {0}")]
    InvalidPoint(String),
    #[error("At least one verification method provider must be registered")]
    EmptyConfiguration,
    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),
    #[error("DID parser error: {0}")]
    DidParserError(#[from] ParseError),
    #[error("Public key error: {0}")]
    PublicKeyError(PublicKeyError),
}

impl From<PublicKeyError> for DidKeyError {
    fn from(error: PublicKeyError) -> Self {
        match error {
            PublicKeyError::InvalidPoint(reason) => DidKeyError::InvalidPoint(reason),
            other => DidKeyError::PublicKeyError(other),
        }
    }
}

impl DidKeyError {
    pub(crate) fn invalid_did(
        did: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        DidKeyError::InvalidDid {
            did: did.into(),
            source: source.into(),
        }
    }
}
