pub mod document;
pub mod error;
pub mod jwk;
pub mod provider;
pub mod resolver;

use std::{
    fmt::Display,
    hash::{Hash, Hasher},
    str::FromStr,
};

use did_parser_nom::{Did, DidUrl};
use error::DidKeyError;
use public_key::{Key, KeyType, MulticodecDecoder};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use url::Url;

pub use crate::{
    document::{DidKeyDocument, ResolvedDocument},
    jwk::{EcJwkProducer, JwkMethodProvider, JwkMethodProviderBuilder, JwkProducer, OkpJwkProducer},
    provider::{MultikeyMethodProvider, VerificationMethodProvider},
    resolver::{DidKeyResolver, DidKeyResolverBuilder, ResolutionInput},
};

pub const METHOD_NAME: &str = "key";
pub const DEFAULT_VERSION: &str = "1";
const DID_PREFIX: &str = "did:";
const DID_KEY_PREFIX: &str = "did:key:";

/// A parsed `did:key:[version:]<base58btc multibase of multicodec(key)>` identifier.
///
/// Equality and hashing use the canonical form, which omits the default version.
#[derive(Clone, Debug)]
pub struct DidKey {
    did: Did,
    version: String,
    key: Key,
}

impl DidKey {
    /// Parses a `did:key` string, accepting every key type in the multicodec table.
    pub fn parse(did: &str) -> Result<Self, DidKeyError> {
        Self::parse_with(did, &MulticodecDecoder::default())
    }

    /// The method name is matched case-insensitively; the result is always `did:key:`.
    pub fn parse_with(did: &str, decoder: &MulticodecDecoder) -> Result<Self, DidKeyError> {
        if did.is_empty() {
            return Err(DidKeyError::NullInput("did"));
        }
        let did = match method_segment(did) {
            Some(method) if is_uppercase_key_method(method) => {
                format!("{DID_KEY_PREFIX}{}", &did[DID_PREFIX.len() + method.len() + 1..])
            }
            _ => did.to_string(),
        };
        let did = Did::parse(did)?;
        Self::from_did(&did, decoder)
    }

    pub fn from_did(did: &Did, decoder: &MulticodecDecoder) -> Result<Self, DidKeyError> {
        log::debug!("DidKey::from_did >> parsing {}", did);
        if !did.method().eq_ignore_ascii_case(METHOD_NAME) {
            return Err(DidKeyError::NotDidKey(did.to_string()));
        }

        let (version, encoded) = did
            .id()
            .split_once(':')
            .unwrap_or((DEFAULT_VERSION, did.id()));

        if !encoded.starts_with(multibase::Base::Base58Btc.code()) {
            return Err(DidKeyError::BadEncoding(did.to_string()));
        }
        let (_, debased) = multibase::decode(encoded)
            .map_err(|err| DidKeyError::BadEncoding(format!("{did}: {err}")))?;

        let (key_type, raw) = decoder
            .decode(&debased)
            .map_err(|err| DidKeyError::UnsupportedCodec(format!("{did}: {err}")))?;
        log::trace!("DidKey::from_did >> version {version}, key type {key_type}");

        Self::new(version, Key::new(raw.to_vec(), key_type))
    }

    /// Builds the version 1 identifier of a raw public key.
    pub fn from_raw(raw: &[u8], key_type: KeyType) -> Result<Self, DidKeyError> {
        if raw.is_empty() {
            return Err(DidKeyError::NullInput("raw key bytes"));
        }
        Self::new(DEFAULT_VERSION, Key::new(raw.to_vec(), key_type))
    }

    fn new(version: &str, key: Key) -> Result<Self, DidKeyError> {
        let did = if version == DEFAULT_VERSION {
            format!("{DID_KEY_PREFIX}{}", key.fingerprint())
        } else {
            format!("{DID_KEY_PREFIX}{version}:{}", key.fingerprint())
        };
        Ok(Self {
            did: Did::parse(did)?,
            version: version.to_string(),
            key,
        })
    }

    pub fn did(&self) -> &Did {
        &self.did
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// The base58btc multibase form of the codec-prefixed key, without the version.
    pub fn method_specific_id(&self) -> &str {
        let id = self.did.id();
        id.rsplit(':').next().unwrap_or(id)
    }

    pub fn key(&self) -> &Key {
        &self.key
    }

    pub fn key_type(&self) -> KeyType {
        *self.key.key_type()
    }

    pub fn codec_code(&self) -> u64 {
        self.key.key_type().code()
    }

    pub fn raw_key(&self) -> &[u8] {
        self.key.key()
    }

    /// Multicodec prefix followed by the raw key bytes.
    pub fn debased(&self) -> Vec<u8> {
        self.key.multicodec_prefixed_key()
    }

    pub fn base_name(&self) -> &'static str {
        "base58btc"
    }

    /// `did:key:...#<method-specific-id>`, the id of every verification method of this key.
    pub fn did_url(&self) -> Result<DidUrl, DidKeyError> {
        Ok(DidUrl::from_did_and_fragment(
            &self.did,
            self.method_specific_id(),
        )?)
    }
}

/// Method segment of `did:<method>:...`, read before any grammar check.
pub(crate) fn method_segment(did: &str) -> Option<&str> {
    did.strip_prefix(DID_PREFIX)?
        .split_once(':')
        .map(|(method, _)| method)
}

/// `key` spelled with at least one uppercase letter.
pub(crate) fn is_uppercase_key_method(method: &str) -> bool {
    method != METHOD_NAME && method.eq_ignore_ascii_case(METHOD_NAME)
}

/// Cheap syntactic check: the `did:key:` prefix followed by a valid generic DID.
pub fn is_did_key(did: &str) -> bool {
    did.starts_with(DID_KEY_PREFIX) && did_parser_nom::is_did(did)
}

pub fn is_did_key_did(did: &Did) -> bool {
    did.method() == METHOD_NAME
}

pub fn is_did_key_uri(uri: &Url) -> bool {
    is_did_key(uri.as_str())
}

impl PartialEq for DidKey {
    fn eq(&self, other: &Self) -> bool {
        self.did == other.did
    }
}

impl Eq for DidKey {}

impl Hash for DidKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.did.hash(state);
    }
}

impl PartialEq<Did> for DidKey {
    fn eq(&self, other: &Did) -> bool {
        &self.did == other
    }
}

impl TryFrom<Key> for DidKey {
    type Error = DidKeyError;

    fn try_from(key: Key) -> Result<Self, Self::Error> {
        Self::from_raw(key.key(), *key.key_type())
    }
}

impl TryFrom<&Did> for DidKey {
    type Error = DidKeyError;

    fn try_from(did: &Did) -> Result<Self, Self::Error> {
        Self::from_did(did, &MulticodecDecoder::default())
    }
}

impl TryFrom<Did> for DidKey {
    type Error = DidKeyError;

    fn try_from(did: Did) -> Result<Self, Self::Error> {
        Self::try_from(&did)
    }
}

impl FromStr for DidKey {
    type Err = DidKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for DidKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.did)
    }
}

impl Serialize for DidKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.did.did())
    }
}

impl<'de> Deserialize<'de> for DidKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
