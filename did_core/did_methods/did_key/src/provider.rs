use did_doc::schema::{
    types::multibase::Multibase,
    verification_method::{VerificationMethod, VerificationMethodType},
};

use crate::{error::DidKeyError, DidKey};

/// Turns a `did:key` into a single verification method of the requested type.
pub trait VerificationMethodProvider: Send + Sync {
    fn provide(
        &self,
        did_key: &DidKey,
        method_type: &VerificationMethodType,
    ) -> Result<VerificationMethod, DidKeyError>;
}

impl<F> VerificationMethodProvider for F
where
    F: Fn(&DidKey, &VerificationMethodType) -> Result<VerificationMethod, DidKeyError>
        + Send
        + Sync,
{
    fn provide(
        &self,
        did_key: &DidKey,
        method_type: &VerificationMethodType,
    ) -> Result<VerificationMethod, DidKeyError> {
        self(did_key, method_type)
    }
}

/// Carries the key as `publicKeyMultibase`, the exact method-specific id of the DID.
#[derive(Clone, Copy, Debug, Default)]
pub struct MultikeyMethodProvider;

impl VerificationMethodProvider for MultikeyMethodProvider {
    fn provide(
        &self,
        did_key: &DidKey,
        method_type: &VerificationMethodType,
    ) -> Result<VerificationMethod, DidKeyError> {
        Ok(VerificationMethod::builder()
            .id(did_key.did_url()?)
            .controller(did_key.did().clone())
            .verification_method_type(method_type.clone())
            .public_key(Multibase::base58btc(did_key.debased()))
            .build())
    }
}
