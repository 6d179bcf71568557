use std::sync::Arc;

use did_doc::schema::verification_method::VerificationMethod;
use did_parser_nom::{Did, DidUrl};
use serde::{ser::SerializeStruct, Serialize, Serializer};
use serde_json::{Map, Value};
use url::Url;

use crate::DidKey;

/// DID document of a `did:key`.
///
/// The verification methods are stored once; every verification relationship
/// except key agreement is a view over the same sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct DidKeyDocument {
    id: DidKey,
    verification_method: Arc<[VerificationMethod]>,
}

impl DidKeyDocument {
    pub(crate) fn new(id: DidKey, verification_method: Vec<VerificationMethod>) -> Self {
        Self {
            id,
            verification_method: verification_method.into(),
        }
    }

    pub fn id(&self) -> &DidKey {
        &self.id
    }

    pub fn verification_method(&self) -> &[VerificationMethod] {
        &self.verification_method
    }

    pub fn authentication(&self) -> &[VerificationMethod] {
        &self.verification_method
    }

    pub fn assertion_method(&self) -> &[VerificationMethod] {
        &self.verification_method
    }

    pub fn capability_invocation(&self) -> &[VerificationMethod] {
        &self.verification_method
    }

    pub fn capability_delegation(&self) -> &[VerificationMethod] {
        &self.verification_method
    }

    pub fn key_agreement(&self) -> &[VerificationMethod] {
        &[]
    }

    pub fn also_known_as(&self) -> &[Url] {
        &[]
    }

    pub fn controller(&self) -> &[Did] {
        &[]
    }

    pub fn verification_method_by_id(&self, id: &DidUrl) -> Option<&VerificationMethod> {
        self.verification_method.iter().find(|vm| vm.id() == id)
    }

    /// Every method is identified under and controlled by the document DID.
    pub fn has_required_properties(&self) -> bool {
        let did = self.id.did();
        !self.verification_method.is_empty()
            && self
                .verification_method
                .iter()
                .all(|vm| vm.id().did() == did.did() && vm.controller() == did)
    }
}

impl Serialize for DidKeyDocument {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let refs: Vec<&DidUrl> = self
            .verification_method
            .iter()
            .map(VerificationMethod::id)
            .collect();

        let mut state = serializer.serialize_struct("DidKeyDocument", 6)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("verificationMethod", &*self.verification_method)?;
        state.serialize_field("authentication", &refs)?;
        state.serialize_field("assertionMethod", &refs)?;
        state.serialize_field("capabilityInvocation", &refs)?;
        state.serialize_field("capabilityDelegation", &refs)?;
        state.end()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResolvedDocument {
    #[serde(rename = "didDocument")]
    document: DidKeyDocument,
    #[serde(rename = "didDocumentMetadata", skip_serializing_if = "Option::is_none")]
    metadata: Option<Map<String, Value>>,
}

impl ResolvedDocument {
    pub(crate) fn new(document: DidKeyDocument) -> Self {
        Self {
            document,
            metadata: None,
        }
    }

    pub fn document(&self) -> &DidKeyDocument {
        &self.document
    }

    /// Always `None` for `did:key`, there is nothing to report beyond the document.
    pub fn metadata(&self) -> Option<&Map<String, Value>> {
        self.metadata.as_ref()
    }

    pub fn into_document(self) -> DidKeyDocument {
        self.document
    }
}
