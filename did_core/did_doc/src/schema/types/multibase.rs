use std::{
    borrow::Cow,
    fmt::{Display, Formatter},
    str::FromStr,
};

use multibase::{decode, encode, Base};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DidDocumentBuilderError;

/// Bytes together with the multibase encoding they are presented in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Multibase {
    base: Base,
    debased: Vec<u8>,
}

impl Multibase {
    pub fn new(base: Base, debased: Vec<u8>) -> Self {
        Self { base, debased }
    }

    pub fn base58btc(debased: Vec<u8>) -> Self {
        Self::new(Base::Base58Btc, debased)
    }

    pub fn base(&self) -> Base {
        self.base
    }

    /// Name of the encoding in the multibase table, e.g. `base58btc`.
    ///
    /// Bases without a listed name fall back to the lowercased variant name.
    pub fn base_name(&self) -> Cow<'static, str> {
        let name = match self.base {
            Base::Identity => "identity",
            Base::Base2 => "base2",
            Base::Base8 => "base8",
            Base::Base10 => "base10",
            Base::Base16Lower => "base16",
            Base::Base16Upper => "base16upper",
            Base::Base32Lower => "base32",
            Base::Base32Upper => "base32upper",
            Base::Base36Lower => "base36",
            Base::Base36Upper => "base36upper",
            Base::Base58Flickr => "base58flickr",
            Base::Base58Btc => "base58btc",
            Base::Base64 => "base64",
            Base::Base64Pad => "base64pad",
            Base::Base64Url => "base64url",
            Base::Base64UrlPad => "base64urlpad",
            other => return Cow::Owned(format!("{other:?}").to_lowercase()),
        };
        Cow::Borrowed(name)
    }

    /// The bytes with the base encoding removed.
    pub fn debased(&self) -> &[u8] {
        &self.debased
    }
}

impl FromStr for Multibase {
    type Err = DidDocumentBuilderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (base, debased) = decode(s)?;
        Ok(Self { base, debased })
    }
}

impl Display for Multibase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", encode(self.base, &self.debased))
    }
}

impl Serialize for Multibase {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Multibase {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
