use std::{
    convert::Infallible,
    fmt::Display,
    hash::{Hash, Hasher},
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const MULTIKEY_IRI: &str = "https://w3id.org/security#Multikey";
pub const JSON_WEB_KEY_IRI: &str = "https://w3id.org/security#JsonWebKey";
pub const JSON_WEB_KEY_2020_IRI: &str = "https://w3id.org/security#JsonWebKey2020";

/// Verification method type, identified by its full IRI.
///
/// Equality and hashing go through the IRI, so `Other` carrying a known IRI equals the
/// named variant.
#[derive(Clone, Debug)]
pub enum VerificationMethodType {
    /// https://www.w3.org/TR/controller-document/#multikey
    Multikey,
    /// https://www.w3.org/TR/controller-document/#jsonwebkey
    JsonWebKey,
    /// https://w3id.org/security/suites/jws-2020/v1
    JsonWebKey2020,
    /// Any other IRI, kept verbatim.
    Other(String),
}

impl VerificationMethodType {
    pub fn from_iri(iri: &str) -> Self {
        match iri {
            MULTIKEY_IRI => Self::Multikey,
            JSON_WEB_KEY_IRI => Self::JsonWebKey,
            JSON_WEB_KEY_2020_IRI => Self::JsonWebKey2020,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_iri(&self) -> &str {
        match self {
            Self::Multikey => MULTIKEY_IRI,
            Self::JsonWebKey => JSON_WEB_KEY_IRI,
            Self::JsonWebKey2020 => JSON_WEB_KEY_2020_IRI,
            Self::Other(iri) => iri,
        }
    }

    pub fn is_json_web_key(&self) -> bool {
        matches!(self, Self::JsonWebKey | Self::JsonWebKey2020)
    }
}

impl PartialEq for VerificationMethodType {
    fn eq(&self, other: &Self) -> bool {
        self.as_iri() == other.as_iri()
    }
}

impl Eq for VerificationMethodType {}

impl Hash for VerificationMethodType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_iri().hash(state);
    }
}

impl Display for VerificationMethodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_iri())
    }
}

impl FromStr for VerificationMethodType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_iri(s))
    }
}

impl From<&str> for VerificationMethodType {
    fn from(iri: &str) -> Self {
        Self::from_iri(iri)
    }
}

impl From<String> for VerificationMethodType {
    fn from(iri: String) -> Self {
        Self::from_iri(&iri)
    }
}

impl Serialize for VerificationMethodType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_iri())
    }
}

impl<'de> Deserialize<'de> for VerificationMethodType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let iri = String::deserialize(deserializer)?;
        Ok(Self::from_iri(&iri))
    }
}
