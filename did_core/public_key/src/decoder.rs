use crate::{error::PublicKeyError, KeyType};

/// Resolves the multicodec prefix of a codec-encoded key to one of an allowed set of key types.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MulticodecDecoder {
    key_types: Vec<KeyType>,
}

impl MulticodecDecoder {
    pub fn new(key_types: impl IntoIterator<Item = KeyType>) -> Self {
        Self {
            key_types: key_types.into_iter().collect(),
        }
    }

    pub fn key_types(&self) -> &[KeyType] {
        &self.key_types
    }

    pub fn supports(&self, key_type: KeyType) -> bool {
        self.key_types.contains(&key_type)
    }

    /// Splits `prefix‖raw` into the key type and the raw key bytes.
    pub fn decode<'a>(&self, debased: &'a [u8]) -> Result<(KeyType, &'a [u8]), PublicKeyError> {
        let (code, raw) = unsigned_varint::decode::u64(debased)?;
        let key_type = KeyType::try_from(code)?;
        if !self.supports(key_type) {
            log::debug!("MulticodecDecoder::decode >> key type {key_type} is not enabled");
            return Err(PublicKeyError::UnsupportedMulticodecDescriptor(code));
        }
        Ok((key_type, raw))
    }
}

impl Default for MulticodecDecoder {
    fn default() -> Self {
        Self::new(KeyType::ALL)
    }
}
