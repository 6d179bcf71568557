mod public_key;
mod verification_method_type;

use ::public_key::{Key, MulticodecDecoder};
use did_parser_nom::{Did, DidUrl};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;
pub use verification_method_type::{
    VerificationMethodType, JSON_WEB_KEY_2020_IRI, JSON_WEB_KEY_IRI, MULTIKEY_IRI,
};

pub use self::public_key::PublicKeyField;
use crate::{
    error::DidDocumentBuilderError,
    schema::types::{jsonwebkey::JsonWebKey, multibase::Multibase},
};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct VerificationMethod {
    id: DidUrl,
    controller: Did,
    #[serde(rename = "type")]
    #[builder(setter(into))]
    verification_method_type: VerificationMethodType,
    #[serde(flatten)]
    #[builder(setter(into))]
    public_key: PublicKeyField,
}

impl VerificationMethod {
    pub fn id(&self) -> &DidUrl {
        &self.id
    }

    pub fn controller(&self) -> &Did {
        &self.controller
    }

    pub fn verification_method_type(&self) -> &VerificationMethodType {
        &self.verification_method_type
    }

    pub fn public_key_field(&self) -> &PublicKeyField {
        &self.public_key
    }

    /// `None` when the key is carried as a JWK.
    pub fn public_key_multibase(&self) -> Option<&Multibase> {
        self.public_key.multibase()
    }

    /// `None` when the key is carried as a multibase string.
    pub fn public_key_jwk(&self) -> Option<&JsonWebKey> {
        self.public_key.jwk()
    }

    /// Decodes a multicodec-prefixed multibase key.
    pub fn public_key(&self) -> Result<Key, DidDocumentBuilderError> {
        let multibase = self
            .public_key_multibase()
            .ok_or(DidDocumentBuilderError::MissingPublicKey("multibase"))?;
        let (key_type, key) = MulticodecDecoder::default().decode(multibase.debased())?;
        Ok(Key::new(key.to_vec(), key_type))
    }
}
