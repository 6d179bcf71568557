use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::error::PublicKeyError;

/// Public key types of the multicodec table, identified by their varint code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyType {
    Ed25519,
    Bls12381g1g2,
    Bls12381g1,
    Bls12381g2,
    X25519,
    Secp256k1,
    P256,
    P384,
    P521,
}

impl KeyType {
    const C_SECP256K1: u64 = 231;
    const C_BLS12381G1: u64 = 234;
    const C_BLS12381G2: u64 = 235;
    const C_X25519: u64 = 236;
    const C_ED25519: u64 = 237;
    const C_BLS12381G1G2: u64 = 238;
    const C_P256: u64 = 4608;
    const C_P384: u64 = 4609;
    const C_P521: u64 = 4610;

    pub const ALL: [KeyType; 9] = [
        KeyType::Ed25519,
        KeyType::Bls12381g1g2,
        KeyType::Bls12381g1,
        KeyType::Bls12381g2,
        KeyType::X25519,
        KeyType::Secp256k1,
        KeyType::P256,
        KeyType::P384,
        KeyType::P521,
    ];

    pub fn code(&self) -> u64 {
        self.into()
    }

    /// Prepends the varint-encoded multicodec code to `raw`.
    pub fn encode(&self, raw: &[u8]) -> Vec<u8> {
        let mut buffer = unsigned_varint::encode::u64_buffer();
        let prefix = unsigned_varint::encode::u64(self.code(), &mut buffer);
        let mut prefixed = Vec::with_capacity(prefix.len() + raw.len());
        prefixed.extend_from_slice(prefix);
        prefixed.extend_from_slice(raw);
        prefixed
    }

    /// Strips this key type's multicodec prefix from `prefixed`.
    pub fn decode<'a>(&self, prefixed: &'a [u8]) -> Result<&'a [u8], PublicKeyError> {
        let (code, raw) = unsigned_varint::decode::u64(prefixed)?;
        if code != self.code() {
            return Err(PublicKeyError::InvalidKeyType(code.try_into()?, *self));
        }
        Ok(raw)
    }
}

// https://github.com/multiformats/multicodec/blob/master/table.csv
impl From<&KeyType> for u64 {
    fn from(key_type: &KeyType) -> Self {
        match key_type {
            KeyType::Secp256k1 => KeyType::C_SECP256K1,
            KeyType::Bls12381g1 => KeyType::C_BLS12381G1,
            KeyType::Bls12381g2 => KeyType::C_BLS12381G2,
            KeyType::X25519 => KeyType::C_X25519,
            KeyType::Ed25519 => KeyType::C_ED25519,
            KeyType::Bls12381g1g2 => KeyType::C_BLS12381G1G2,
            KeyType::P256 => KeyType::C_P256,
            KeyType::P384 => KeyType::C_P384,
            KeyType::P521 => KeyType::C_P521,
        }
    }
}

impl TryFrom<u64> for KeyType {
    type Error = PublicKeyError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        match value {
            KeyType::C_SECP256K1 => Ok(KeyType::Secp256k1),
            KeyType::C_BLS12381G1 => Ok(KeyType::Bls12381g1),
            KeyType::C_BLS12381G2 => Ok(KeyType::Bls12381g2),
            KeyType::C_X25519 => Ok(KeyType::X25519),
            KeyType::C_ED25519 => Ok(KeyType::Ed25519),
            KeyType::C_BLS12381G1G2 => Ok(KeyType::Bls12381g1g2),
            KeyType::C_P256 => Ok(KeyType::P256),
            KeyType::C_P384 => Ok(KeyType::P384),
            KeyType::C_P521 => Ok(KeyType::P521),
            p => Err(PublicKeyError::UnsupportedMulticodecDescriptor(p)),
        }
    }
}

impl Display for KeyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyType::Secp256k1 => write!(f, "Secp256k1"),
            KeyType::Bls12381g1 => write!(f, "Bls12381g1"),
            KeyType::Bls12381g2 => write!(f, "Bls12381g2"),
            KeyType::X25519 => write!(f, "X25519"),
            KeyType::Ed25519 => write!(f, "Ed25519"),
            KeyType::Bls12381g1g2 => write!(f, "Bls12381g1g2"),
            KeyType::P256 => write!(f, "P256"),
            KeyType::P384 => write!(f, "P384"),
            KeyType::P521 => write!(f, "P521"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_survive_conversion() {
        for key_type in KeyType::ALL {
            assert_eq!(KeyType::try_from(key_type.code()).unwrap(), key_type);
        }
    }

    #[test]
    fn two_byte_varint_prefix() {
        assert_eq!(KeyType::P256.encode(&[0x02]), vec![0x80, 0x24, 0x02]);
        assert_eq!(KeyType::P384.encode(&[]), vec![0x81, 0x24]);
    }

    #[test]
    fn single_byte_varint_prefix() {
        assert_eq!(KeyType::Ed25519.encode(&[1, 2, 3]), vec![0xed, 0x01, 1, 2, 3]);
        assert_eq!(KeyType::Secp256k1.encode(&[]), vec![0xe7, 0x01]);
    }

    #[test]
    fn decode_strips_own_prefix() {
        let prefixed = KeyType::Bls12381g1.encode(&[9, 8, 7]);
        assert_eq!(KeyType::Bls12381g1.decode(&prefixed).unwrap(), &[9, 8, 7]);
    }

    #[test]
    fn decode_rejects_foreign_prefix() {
        let prefixed = KeyType::Ed25519.encode(&[9, 8, 7]);
        assert!(matches!(
            KeyType::X25519.decode(&prefixed),
            Err(PublicKeyError::InvalidKeyType(KeyType::Ed25519, KeyType::X25519))
        ));
    }

    #[test]
    fn unknown_code_is_unsupported() {
        assert!(matches!(
            KeyType::try_from(0x1300),
            Err(PublicKeyError::UnsupportedMulticodecDescriptor(0x1300))
        ));
    }
}
