use serde::{Deserialize, Serialize};

use crate::schema::types::{jsonwebkey::JsonWebKey, multibase::Multibase};

/// Public key material of a verification method. Exactly one representation is present.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
#[serde(deny_unknown_fields)]
pub enum PublicKeyField {
    #[serde(rename_all = "camelCase")]
    Multibase { public_key_multibase: Multibase },
    #[serde(rename_all = "camelCase")]
    Jwk { public_key_jwk: JsonWebKey },
}

impl PublicKeyField {
    pub fn multibase(&self) -> Option<&Multibase> {
        match self {
            PublicKeyField::Multibase {
                public_key_multibase,
            } => Some(public_key_multibase),
            PublicKeyField::Jwk { .. } => None,
        }
    }

    pub fn jwk(&self) -> Option<&JsonWebKey> {
        match self {
            PublicKeyField::Jwk { public_key_jwk } => Some(public_key_jwk),
            PublicKeyField::Multibase { .. } => None,
        }
    }
}

impl From<Multibase> for PublicKeyField {
    fn from(public_key_multibase: Multibase) -> Self {
        PublicKeyField::Multibase {
            public_key_multibase,
        }
    }
}

impl From<JsonWebKey> for PublicKeyField {
    fn from(public_key_jwk: JsonWebKey) -> Self {
        PublicKeyField::Jwk { public_key_jwk }
    }
}
