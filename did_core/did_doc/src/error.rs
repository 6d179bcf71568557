use thiserror::Error;

#[derive(Debug, Error)]
pub enum DidDocumentBuilderError {
    #[error("Multibase decoding error: {0}")]
    MultibaseError(#[from] multibase::Error),
    #[error("Public key error: {0}")]
    PublicKeyError(#[from] public_key::PublicKeyError),
    #[error("Verification method does not carry a {0} public key")]
    MissingPublicKey(&'static str),
}
