mod parsing;

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use nom::combinator::all_consuming;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use self::parsing::parse_did_url_ranges;
use crate::{error::ParseError, Did, DidRange};

/// An absolute DID URL: a DID optionally followed by a path, a query and a fragment.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DidUrl {
    did_url: String,
    did: DidRange,
    method: DidRange,
    id: DidRange,
    path: Option<DidRange>,
    query: Option<DidRange>,
    fragment: Option<DidRange>,
}

impl DidUrl {
    pub fn parse(did_url: String) -> Result<Self, ParseError> {
        if did_url.is_empty() {
            return Err(ParseError::InvalidInput("Empty input"));
        }

        let (_, ranges) = all_consuming(parse_did_url_ranges)(&did_url)?;

        Ok(Self {
            did_url,
            did: ranges.did,
            method: ranges.method,
            id: ranges.id,
            path: ranges.path,
            query: ranges.query,
            fragment: ranges.fragment,
        })
    }

    /// Builds `<did>#<fragment>`.
    pub fn from_did_and_fragment(did: &Did, fragment: &str) -> Result<Self, ParseError> {
        Self::parse(format!("{did}#{fragment}"))
    }

    pub fn did_url(&self) -> &str {
        self.did_url.as_ref()
    }

    pub fn did(&self) -> &str {
        self.did_url[self.did.clone()].as_ref()
    }

    pub fn method(&self) -> &str {
        self.did_url[self.method.clone()].as_ref()
    }

    pub fn id(&self) -> &str {
        self.did_url[self.id.clone()].as_ref()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.clone().map(|range| self.did_url[range].as_ref())
    }

    pub fn query(&self) -> Option<&str> {
        self.query.clone().map(|range| self.did_url[range].as_ref())
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.clone().map(|range| self.did_url[range].as_ref())
    }
}

impl TryFrom<String> for DidUrl {
    type Error = ParseError;

    fn try_from(did_url: String) -> Result<Self, Self::Error> {
        Self::parse(did_url)
    }
}

impl FromStr for DidUrl {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.to_string())
    }
}

impl Display for DidUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.did_url)
    }
}

impl Serialize for DidUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.did_url())
    }
}

impl<'de> Deserialize<'de> for DidUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let did_url = String::deserialize(deserializer)?;
        Self::parse(did_url).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_did_and_fragment_test() {
        let did = Did::parse("did:key:z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp".to_string())
            .unwrap();
        let did_url = DidUrl::from_did_and_fragment(&did, did.id()).unwrap();
        assert_eq!(did_url.did(), did.did());
        assert_eq!(did_url.fragment(), Some(did.id()));
        assert_eq!(
            did_url.to_string(),
            "did:key:z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp#z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp"
        );
    }

    #[test]
    fn from_did_and_fragment_rejects_invalid_fragment() {
        let did = Did::parse("did:example:123".to_string()).unwrap();
        assert!(DidUrl::from_did_and_fragment(&did, "a#b").is_err());
    }
}
