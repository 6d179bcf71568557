use std::{fmt, sync::Arc};

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use did_doc::schema::{
    types::jsonwebkey::JsonWebKey,
    verification_method::{VerificationMethod, VerificationMethodType},
};
use indexmap::IndexMap;
use public_key::{EcCurve, KeyType};

use crate::{error::DidKeyError, provider::VerificationMethodProvider, DidKey};

/// Produces the JWK form of a single key type.
pub trait JwkProducer: Send + Sync {
    fn produce(&self, did_key: &DidKey) -> Result<JsonWebKey, DidKeyError>;
}

impl<F> JwkProducer for F
where
    F: Fn(&DidKey) -> Result<JsonWebKey, DidKeyError> + Send + Sync,
{
    fn produce(&self, did_key: &DidKey) -> Result<JsonWebKey, DidKeyError> {
        self(did_key)
    }
}

/// `{"kty": "OKP", "crv": <crv>, "x": <raw key>}`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OkpJwkProducer {
    crv: String,
}

impl OkpJwkProducer {
    pub fn new(crv: impl Into<String>) -> Self {
        Self { crv: crv.into() }
    }

    pub fn crv(&self) -> &str {
        &self.crv
    }
}

impl JwkProducer for OkpJwkProducer {
    fn produce(&self, did_key: &DidKey) -> Result<JsonWebKey, DidKeyError> {
        Ok(JsonWebKey::new()
            .with("kty", "OKP")
            .with("crv", self.crv.as_str())
            .with("x", URL_SAFE_NO_PAD.encode(did_key.raw_key())))
    }
}

/// `{"kty": "EC", "crv": <crv>, "x": .., "y": ..}` from a SEC1 compressed point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EcJwkProducer {
    curve: EcCurve,
}

impl EcJwkProducer {
    pub fn new(curve: EcCurve) -> Self {
        Self { curve }
    }

    pub fn curve(&self) -> EcCurve {
        self.curve
    }
}

impl JwkProducer for EcJwkProducer {
    fn produce(&self, did_key: &DidKey) -> Result<JsonWebKey, DidKeyError> {
        let point = self.curve.decompress(did_key.raw_key())?;
        Ok(JsonWebKey::new()
            .with("kty", "EC")
            .with("crv", self.curve.jwk_name())
            .with("x", URL_SAFE_NO_PAD.encode(point.x()))
            .with("y", URL_SAFE_NO_PAD.encode(point.y())))
    }
}

type Producers = IndexMap<KeyType, Arc<dyn JwkProducer>>;

fn default_producers() -> Producers {
    let mut producers: Producers = IndexMap::new();
    producers.insert(KeyType::Ed25519, Arc::new(OkpJwkProducer::new("Ed25519")));
    producers.insert(
        KeyType::Bls12381g1,
        Arc::new(OkpJwkProducer::new("Bls12381G1")),
    );
    producers.insert(
        KeyType::Bls12381g2,
        Arc::new(OkpJwkProducer::new("Bls12381G2")),
    );
    producers.insert(KeyType::P256, Arc::new(EcJwkProducer::new(EcCurve::Secp256r1)));
    producers.insert(KeyType::P384, Arc::new(EcJwkProducer::new(EcCurve::Secp384r1)));
    producers.insert(
        KeyType::Secp256k1,
        Arc::new(EcJwkProducer::new(EcCurve::Secp256k1)),
    );
    producers
}

/// Verification method provider carrying the key as `publicKeyJwk`.
///
/// Immutable once built; clones share the producer table.
#[derive(Clone)]
pub struct JwkMethodProvider {
    producers: Arc<Producers>,
}

impl JwkMethodProvider {
    /// Builder with nothing registered yet.
    pub fn builder() -> JwkMethodProviderBuilder {
        JwkMethodProviderBuilder {
            producers: IndexMap::new(),
        }
    }

    /// Builder pre-populated with Ed25519, BLS12-381 G1/G2, P-256, P-384 and secp256k1.
    pub fn with_defaults() -> JwkMethodProviderBuilder {
        JwkMethodProviderBuilder {
            producers: default_producers(),
        }
    }

    pub fn key_types(&self) -> impl Iterator<Item = KeyType> + '_ {
        self.producers.keys().copied()
    }

    pub fn supports(&self, key_type: KeyType) -> bool {
        self.producers.contains_key(&key_type)
    }

    pub fn jwk(&self, did_key: &DidKey) -> Result<JsonWebKey, DidKeyError> {
        let producer = self
            .producers
            .get(&did_key.key_type())
            .ok_or(DidKeyError::UnsupportedKey(did_key.key_type()))?;
        producer.produce(did_key)
    }
}

impl Default for JwkMethodProvider {
    fn default() -> Self {
        Self {
            producers: Arc::new(default_producers()),
        }
    }
}

impl fmt::Debug for JwkMethodProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwkMethodProvider")
            .field("key_types", &self.producers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl VerificationMethodProvider for JwkMethodProvider {
    fn provide(
        &self,
        did_key: &DidKey,
        method_type: &VerificationMethodType,
    ) -> Result<VerificationMethod, DidKeyError> {
        Ok(VerificationMethod::builder()
            .id(did_key.did_url()?)
            .controller(did_key.did().clone())
            .verification_method_type(method_type.clone())
            .public_key(self.jwk(did_key)?)
            .build())
    }
}

/// Registration is last-wins per key type.
#[derive(Clone)]
pub struct JwkMethodProviderBuilder {
    producers: Producers,
}

impl JwkMethodProviderBuilder {
    pub fn with(mut self, key_type: KeyType, producer: impl JwkProducer + 'static) -> Self {
        self.producers.insert(key_type, Arc::new(producer));
        self
    }

    /// Snapshots the current registrations; later changes to the builder do not leak in.
    ///
    /// Nothing registered yields the default provider.
    pub fn build(&self) -> JwkMethodProvider {
        if self.producers.is_empty() {
            return JwkMethodProvider::default();
        }
        JwkMethodProvider {
            producers: Arc::new(self.producers.clone()),
        }
    }
}

impl fmt::Debug for JwkMethodProviderBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwkMethodProviderBuilder")
            .field("key_types", &self.producers.keys().collect::<Vec<_>>())
            .finish()
    }
}
