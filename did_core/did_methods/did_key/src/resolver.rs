use std::{fmt, sync::Arc};

use did_doc::schema::verification_method::{VerificationMethod, VerificationMethodType};
use did_parser_nom::Did;
use indexmap::IndexMap;
use public_key::MulticodecDecoder;
use url::Url;

use crate::{
    document::{DidKeyDocument, ResolvedDocument},
    error::DidKeyError,
    jwk::JwkMethodProvider,
    provider::{MultikeyMethodProvider, VerificationMethodProvider},
    is_uppercase_key_method, method_segment, DidKey, METHOD_NAME,
};

/// Anything `DidKeyResolver::resolve` accepts.
#[derive(Clone, Copy, Debug)]
pub enum ResolutionInput<'a> {
    Str(&'a str),
    Uri(&'a Url),
    Did(&'a Did),
    DidKey(&'a DidKey),
}

impl<'a> From<&'a str> for ResolutionInput<'a> {
    fn from(did: &'a str) -> Self {
        Self::Str(did)
    }
}

impl<'a> From<&'a String> for ResolutionInput<'a> {
    fn from(did: &'a String) -> Self {
        Self::Str(did)
    }
}

impl<'a> From<&'a Url> for ResolutionInput<'a> {
    fn from(uri: &'a Url) -> Self {
        Self::Uri(uri)
    }
}

impl<'a> From<&'a Did> for ResolutionInput<'a> {
    fn from(did: &'a Did) -> Self {
        Self::Did(did)
    }
}

impl<'a> From<&'a DidKey> for ResolutionInput<'a> {
    fn from(did_key: &'a DidKey) -> Self {
        Self::DidKey(did_key)
    }
}

impl fmt::Display for ResolutionInput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(did) => write!(f, "{did}"),
            Self::Uri(uri) => write!(f, "{uri}"),
            Self::Did(did) => write!(f, "{did}"),
            Self::DidKey(did_key) => write!(f, "{did_key}"),
        }
    }
}

type Providers = IndexMap<VerificationMethodType, Arc<dyn VerificationMethodProvider>>;

/// Resolves `did:key` identifiers into DID documents.
///
/// Verification methods appear in provider registration order. The resolver is
/// immutable and can be shared between threads.
#[derive(Clone)]
pub struct DidKeyResolver {
    decoder: MulticodecDecoder,
    providers: Arc<[(VerificationMethodType, Arc<dyn VerificationMethodProvider>)]>,
    encryption_key_derivation: bool,
}

impl DidKeyResolver {
    pub fn builder(decoder: MulticodecDecoder) -> DidKeyResolverBuilder {
        DidKeyResolverBuilder {
            decoder,
            providers: IndexMap::new(),
            encryption_key_derivation: false,
        }
    }

    pub fn decoder(&self) -> &MulticodecDecoder {
        &self.decoder
    }

    pub fn method_types(&self) -> impl Iterator<Item = &VerificationMethodType> {
        self.providers.iter().map(|(method_type, _)| method_type)
    }

    pub fn encryption_key_derivation(&self) -> bool {
        self.encryption_key_derivation
    }

    pub fn with_encryption_key_derivation(mut self, enabled: bool) -> Self {
        self.encryption_key_derivation = enabled;
        self
    }

    pub fn resolve<'a>(
        &self,
        input: impl Into<ResolutionInput<'a>>,
    ) -> Result<ResolvedDocument, DidKeyError> {
        let input = input.into();
        log::info!("DidKeyResolver::resolve >> resolving {}", input);
        match input {
            ResolutionInput::Str(did) => self.resolve_str(did),
            ResolutionInput::Uri(uri) => self.resolve_str(uri.as_str()),
            ResolutionInput::Did(did) => self.resolve_did(did),
            ResolutionInput::DidKey(did_key) => self.resolve_did_key(did_key),
        }
    }

    fn resolve_str(&self, did: &str) -> Result<ResolvedDocument, DidKeyError> {
        if did.is_empty() {
            return Err(DidKeyError::NullInput("did"));
        }
        if let Some(method) = method_segment(did).filter(|method| is_uppercase_key_method(method)) {
            return Err(DidKeyError::UnsupportedMethod(method.to_string()));
        }
        let parsed =
            Did::parse(did.to_string()).map_err(|err| DidKeyError::invalid_did(did, err))?;
        self.resolve_did(&parsed)
    }

    fn resolve_did(&self, did: &Did) -> Result<ResolvedDocument, DidKeyError> {
        if did.method() != METHOD_NAME {
            return Err(DidKeyError::UnsupportedMethod(did.method().to_string()));
        }
        let did_key = DidKey::from_did(did, &self.decoder)
            .map_err(|err| DidKeyError::invalid_did(did.to_string(), err))?;
        self.resolve_did_key(&did_key)
    }

    fn resolve_did_key(&self, did_key: &DidKey) -> Result<ResolvedDocument, DidKeyError> {
        if self.encryption_key_derivation {
            return Err(DidKeyError::NotImplemented("encryption key derivation"));
        }

        let methods = self
            .providers
            .iter()
            .map(|(method_type, provider)| provider.provide(did_key, method_type))
            .collect::<Result<Vec<VerificationMethod>, _>>()?;
        log::debug!(
            "DidKeyResolver::resolve >> {} verification method(s) for {}",
            methods.len(),
            did_key
        );

        Ok(ResolvedDocument::new(DidKeyDocument::new(
            did_key.clone(),
            methods,
        )))
    }
}

impl fmt::Debug for DidKeyResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DidKeyResolver")
            .field("decoder", &self.decoder)
            .field("method_types", &self.method_types().collect::<Vec<_>>())
            .field("encryption_key_derivation", &self.encryption_key_derivation)
            .finish()
    }
}

/// Registering the same method type twice keeps the first position and the last provider.
#[derive(Clone)]
pub struct DidKeyResolverBuilder {
    decoder: MulticodecDecoder,
    providers: Providers,
    encryption_key_derivation: bool,
}

impl DidKeyResolverBuilder {
    pub fn method(
        mut self,
        method_type: impl Into<VerificationMethodType>,
        provider: impl VerificationMethodProvider + 'static,
    ) -> Self {
        self.providers
            .insert(method_type.into(), Arc::new(provider));
        self
    }

    pub fn multikey(self) -> Self {
        self.multibase(VerificationMethodType::Multikey)
    }

    pub fn multibase(self, method_type: impl Into<VerificationMethodType>) -> Self {
        self.method(method_type, MultikeyMethodProvider)
    }

    pub fn jwk(self) -> Self {
        self.jwk_with_type(VerificationMethodType::JsonWebKey)
    }

    pub fn jwk_with_type(self, method_type: impl Into<VerificationMethodType>) -> Self {
        self.method(method_type, JwkMethodProvider::default())
    }

    pub fn encryption_key_derivation(mut self, enabled: bool) -> Self {
        self.encryption_key_derivation = enabled;
        self
    }

    pub fn build(&self) -> Result<DidKeyResolver, DidKeyError> {
        if self.providers.is_empty() {
            return Err(DidKeyError::EmptyConfiguration);
        }
        Ok(DidKeyResolver {
            decoder: self.decoder.clone(),
            providers: self
                .providers
                .iter()
                .map(|(method_type, provider)| (method_type.clone(), provider.clone()))
                .collect(),
            encryption_key_derivation: self.encryption_key_derivation,
        })
    }
}

impl fmt::Debug for DidKeyResolverBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DidKeyResolverBuilder")
            .field("decoder", &self.decoder)
            .field("method_types", &self.providers.keys().collect::<Vec<_>>())
            .field("encryption_key_derivation", &self.encryption_key_derivation)
            .finish()
    }
}
