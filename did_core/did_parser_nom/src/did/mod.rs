mod parsing;

use std::{
    convert::TryFrom,
    fmt::{Display, Formatter},
    str::FromStr,
};

use nom::combinator::all_consuming;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub(crate) use self::parsing::{parse_did_ranges, pct_encoded};
use crate::{error::ParseError, DidRange};

/// A DID conforming to the generic `did:<method>:<method-specific-id>` syntax.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Did {
    did: String,
    method: DidRange,
    id: DidRange,
}

impl Did {
    pub fn parse(did: String) -> Result<Self, ParseError> {
        if did.is_empty() {
            return Err(ParseError::InvalidInput("Empty input"));
        }

        let (_, (method, id)) = all_consuming(parse_did_ranges)(&did)?;
        log::trace!("Did::parse >> parsed {}", did);

        Ok(Self { did, method, id })
    }

    pub fn did(&self) -> &str {
        self.did.as_ref()
    }

    pub fn method(&self) -> &str {
        self.did[self.method.clone()].as_ref()
    }

    pub fn id(&self) -> &str {
        self.did[self.id.clone()].as_ref()
    }
}

/// Returns `true` when `input` is a complete DID under the generic grammar.
pub fn is_did(input: &str) -> bool {
    all_consuming(parse_did_ranges)(input).is_ok()
}

impl TryFrom<String> for Did {
    type Error = ParseError;

    fn try_from(did: String) -> Result<Self, Self::Error> {
        Self::parse(did)
    }
}

impl TryFrom<&str> for Did {
    type Error = ParseError;

    fn try_from(did: &str) -> Result<Self, Self::Error> {
        Self::parse(did.to_string())
    }
}

impl FromStr for Did {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.to_string())
    }
}

impl Display for Did {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.did)
    }
}

impl Serialize for Did {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.did())
    }
}

impl<'de> Deserialize<'de> for Did {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let did = String::deserialize(deserializer)?;
        Self::parse(did).map_err(serde::de::Error::custom)
    }
}
