use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::KeyType;
use crate::{decoder::MulticodecDecoder, error::PublicKeyError};

/// Represents raw public key data along with information about the key type
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key {
    key_type: KeyType,
    key: Vec<u8>,
}

impl Key {
    pub fn new(key: Vec<u8>, key_type: KeyType) -> Self {
        Self { key_type, key }
    }

    pub fn key_type(&self) -> &KeyType {
        &self.key_type
    }

    pub fn key(&self) -> &[u8] {
        self.key.as_ref()
    }

    pub fn multicodec_prefixed_key(&self) -> Vec<u8> {
        self.key_type.encode(&self.key)
    }

    /// The base58btc multibase form of the multicodec-prefixed key, as used by `did:key`.
    pub fn fingerprint(&self) -> String {
        multibase::encode(multibase::Base::Base58Btc, self.multicodec_prefixed_key())
    }

    pub fn from_fingerprint(fingerprint: &str) -> Result<Self, PublicKeyError> {
        Self::from_fingerprint_with(fingerprint, &MulticodecDecoder::default())
    }

    pub fn from_fingerprint_with(
        fingerprint: &str,
        decoder: &MulticodecDecoder,
    ) -> Result<Self, PublicKeyError> {
        let (_base, decoded_bytes) = multibase::decode(fingerprint)?;
        let (key_type, key) = decoder.decode(&decoded_bytes)?;
        Ok(Self::new(key.to_vec(), key_type))
    }

}

impl Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.fingerprint())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefixed_key_test(key_bytes: Vec<u8>, key_type: KeyType, expected_fingerprint: &str) {
        let key = Key::new(key_bytes, key_type);
        let prefixed_key = key.multicodec_prefixed_key();
        assert_eq!(
            multibase::encode(multibase::Base::Base58Btc, prefixed_key),
            expected_fingerprint
        );
    }

    fn display_test(key_bytes: Vec<u8>, key_type: KeyType, expected_fingerprint: &str) {
        let key = Key::new(key_bytes, key_type);
        assert_eq!(key.to_string(), expected_fingerprint);
    }

    fn from_fingerprint_test(key_bytes: Vec<u8>, key_type: KeyType, fingerprint: &str) {
        let key = Key::new(key_bytes, key_type);
        let key_from_fingerprint = Key::from_fingerprint(fingerprint).unwrap();
        assert_eq!(key.key_type(), key_from_fingerprint.key_type());
        assert_eq!(key.key(), key_from_fingerprint.key());
        assert_eq!(key.fingerprint(), fingerprint);
        assert_eq!(key_from_fingerprint.fingerprint(), fingerprint);
    }

    #[test]
    fn from_fingerprint_error_test() {
        assert!(Key::from_fingerprint("this is not a valid fingerprint").is_err());
    }

    #[test]
    fn from_fingerprint_restricted_decoder_test() {
        let decoder = MulticodecDecoder::new([KeyType::X25519]);
        let err = Key::from_fingerprint_with(
            "z6MkmjY8GnV5i9YTDtPETC2uUAW6ejw3nk5mXF5yci5ab7th",
            &decoder,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            PublicKeyError::UnsupportedMulticodecDescriptor(237)
        ));
    }

    mod ed25519 {
        use super::*;

        const TEST_KEY_HEX: &str =
            "6c2d48b1605684ef94363dc6158eeb6577466e1a36a740f2fc624617edb7712e";
        const TEST_FINGERPRINT: &str = "z6MkmjY8GnV5i9YTDtPETC2uUAW6ejw3nk5mXF5yci5ab7th";

        fn key_bytes() -> Vec<u8> {
            hex::decode(TEST_KEY_HEX).unwrap()
        }

        #[test]
        fn prefixed_key_test() {
            super::prefixed_key_test(key_bytes(), KeyType::Ed25519, TEST_FINGERPRINT);
        }

        #[test]
        fn display_test() {
            super::display_test(key_bytes(), KeyType::Ed25519, TEST_FINGERPRINT);
        }

        #[test]
        fn from_fingerprint_test() {
            super::from_fingerprint_test(key_bytes(), KeyType::Ed25519, TEST_FINGERPRINT);
        }
    }

    mod x25519 {
        use super::*;

        const TEST_KEY_HEX: &str =
            "5425711a02d6a933ec4df0868538ab247dcb9a847b679e978973c9f37afb550d";
        const TEST_FINGERPRINT: &str = "z6LShLeXRTzevtwcfehaGEzCMyL3bNsAeKCwcqwJxyCo63yE";

        fn key_bytes() -> Vec<u8> {
            hex::decode(TEST_KEY_HEX).unwrap()
        }

        #[test]
        fn prefixed_key_test() {
            super::prefixed_key_test(key_bytes(), KeyType::X25519, TEST_FINGERPRINT);
        }

        #[test]
        fn display_test() {
            super::display_test(key_bytes(), KeyType::X25519, TEST_FINGERPRINT);
        }

        #[test]
        fn from_fingerprint_test() {
            super::from_fingerprint_test(key_bytes(), KeyType::X25519, TEST_FINGERPRINT);
        }
    }

    mod secp256k1 {
        use super::*;

        const TEST_KEY_HEX: &str =
            "03874c15c7fda20e539c6e5ba573c139884c351188799f5458b4b41f7924f235cd";
        const TEST_FINGERPRINT: &str = "zQ3shokFTS3brHcDQrn82RUDfCZESWL1ZdCEJwekUDPQiYBme";

        fn key_bytes() -> Vec<u8> {
            hex::decode(TEST_KEY_HEX).unwrap()
        }

        #[test]
        fn prefixed_key_test() {
            super::prefixed_key_test(key_bytes(), KeyType::Secp256k1, TEST_FINGERPRINT);
        }

        #[test]
        fn from_fingerprint_test() {
            super::from_fingerprint_test(key_bytes(), KeyType::Secp256k1, TEST_FINGERPRINT);
        }
    }

    mod p256 {
        use super::*;

        const TEST_KEY_HEX: &str =
            "038a0ac59a2d3086e8a12a78fd4773a6d52a0ca61ef6c1419e15a05bcc6dafce7b";
        const TEST_FINGERPRINT: &str = "zDnaerx9CtbPJ1q36T5Ln5wYt3MQYeGRG5ehnPAmxcf5mDZpv";

        fn key_bytes() -> Vec<u8> {
            hex::decode(TEST_KEY_HEX).unwrap()
        }

        #[test]
        fn prefixed_key_test() {
            super::prefixed_key_test(key_bytes(), KeyType::P256, TEST_FINGERPRINT);
        }

        #[test]
        fn from_fingerprint_test() {
            super::from_fingerprint_test(key_bytes(), KeyType::P256, TEST_FINGERPRINT);
        }
    }
}
