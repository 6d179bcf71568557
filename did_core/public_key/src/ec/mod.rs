//! SEC1 point decompression for the short Weierstrass curves usable with `did:key`.

mod modular;

use std::{fmt::Display, str::FromStr};

use hex_literal::hex;
use num_bigint::BigUint;

pub use self::modular::sqrt_mod;
use crate::{error::PublicKeyError, KeyType};

// https://www.secg.org/sec2-v2.pdf
const SECP256R1_P: [u8; 32] =
    hex!("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff");
const SECP256R1_A: [u8; 32] =
    hex!("ffffffff00000001000000000000000000000000fffffffffffffffffffffffc");
const SECP256R1_B: [u8; 32] =
    hex!("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b");

const SECP384R1_P: [u8; 48] = hex!(
    "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe"
    "ffffffff0000000000000000ffffffff"
);
const SECP384R1_A: [u8; 48] = hex!(
    "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe"
    "ffffffff0000000000000000fffffffc"
);
const SECP384R1_B: [u8; 48] = hex!(
    "b3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875a"
    "c656398d8a2ed19d2a85c8edd3ec2aef"
);

const SECP256K1_P: [u8; 32] =
    hex!("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f");
const SECP256K1_A: [u8; 1] = [0];
const SECP256K1_B: [u8; 1] = [7];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EcCurve {
    Secp256r1,
    Secp384r1,
    Secp256k1,
}

struct DomainParameters {
    p: BigUint,
    a: BigUint,
    b: BigUint,
}

impl EcCurve {
    pub fn from_name(name: &str) -> Result<Self, PublicKeyError> {
        match name {
            "secp256r1" | "P-256" | "prime256v1" => Ok(EcCurve::Secp256r1),
            "secp384r1" | "P-384" => Ok(EcCurve::Secp384r1),
            "secp256k1" => Ok(EcCurve::Secp256k1),
            _ => Err(PublicKeyError::UnknownCurve(name.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EcCurve::Secp256r1 => "secp256r1",
            EcCurve::Secp384r1 => "secp384r1",
            EcCurve::Secp256k1 => "secp256k1",
        }
    }

    /// Curve name as registered for the JWK `crv` parameter.
    pub fn jwk_name(&self) -> &'static str {
        match self {
            EcCurve::Secp256r1 => "P-256",
            EcCurve::Secp384r1 => "P-384",
            EcCurve::Secp256k1 => "secp256k1",
        }
    }

    pub fn field_byte_length(&self) -> usize {
        match self {
            EcCurve::Secp256r1 | EcCurve::Secp256k1 => 32,
            EcCurve::Secp384r1 => 48,
        }
    }

    pub fn key_type(&self) -> KeyType {
        match self {
            EcCurve::Secp256r1 => KeyType::P256,
            EcCurve::Secp384r1 => KeyType::P384,
            EcCurve::Secp256k1 => KeyType::Secp256k1,
        }
    }

    fn domain_parameters(&self) -> DomainParameters {
        let (p, a, b): (&[u8], &[u8], &[u8]) = match self {
            EcCurve::Secp256r1 => (&SECP256R1_P, &SECP256R1_A, &SECP256R1_B),
            EcCurve::Secp384r1 => (&SECP384R1_P, &SECP384R1_A, &SECP384R1_B),
            EcCurve::Secp256k1 => (&SECP256K1_P, &SECP256K1_A, &SECP256K1_B),
        };
        DomainParameters {
            p: BigUint::from_bytes_be(p),
            a: BigUint::from_bytes_be(a),
            b: BigUint::from_bytes_be(b),
        }
    }

    /// Recovers the affine coordinates of a SEC1 compressed point (`0x02`/`0x03` ‖ X).
    pub fn decompress(&self, compressed: &[u8]) -> Result<EcPoint, PublicKeyError> {
        if compressed.len() < 2 {
            return Err(PublicKeyError::InvalidPoint(format!(
                "{} point of {} bytes is too short",
                self.name(),
                compressed.len()
            )));
        }

        let tag = compressed[0];
        if tag & 0xFE != 0x02 {
            return Err(PublicKeyError::InvalidPoint(format!(
                "expected compressed point tag 0x02 or 0x03, found {tag:#04x}"
            )));
        }

        let length = self.field_byte_length();
        if compressed.len() != 1 + length {
            return Err(PublicKeyError::InvalidPoint(format!(
                "{} compressed point must be {} bytes, found {}",
                self.name(),
                1 + length,
                compressed.len()
            )));
        }

        let DomainParameters { p, a, b } = self.domain_parameters();
        let x = BigUint::from_bytes_be(&compressed[1..]);
        if x >= p {
            return Err(PublicKeyError::InvalidPoint(format!(
                "x coordinate is not a {} field element",
                self.name()
            )));
        }

        let rhs = (x.pow(3) + &a * &x + &b) % &p;
        let mut y = sqrt_mod(&rhs, &p);
        if &y * &y % &p != rhs {
            return Err(PublicKeyError::InvalidPoint(format!(
                "x coordinate is not on {}",
                self.name()
            )));
        }

        let odd = BigUint::from(u8::from(tag & 1 == 1));
        if &y % 2u32 != odd {
            y = (&p - &y) % &p;
        }
        log::trace!("EcCurve::decompress >> decompressed {} point", self.name());

        Ok(EcPoint {
            curve: *self,
            x: normalize(&x.to_bytes_be(), length),
            y: normalize(&y.to_bytes_be(), length),
        })
    }
}

impl TryFrom<KeyType> for EcCurve {
    type Error = PublicKeyError;

    fn try_from(key_type: KeyType) -> Result<Self, Self::Error> {
        match key_type {
            KeyType::P256 => Ok(EcCurve::Secp256r1),
            KeyType::P384 => Ok(EcCurve::Secp384r1),
            KeyType::Secp256k1 => Ok(EcCurve::Secp256k1),
            other => Err(PublicKeyError::UnknownCurve(other.to_string())),
        }
    }
}

impl FromStr for EcCurve {
    type Err = PublicKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl Display for EcCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Affine point with big-endian coordinates of exactly the curve's field byte length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EcPoint {
    curve: EcCurve,
    x: Vec<u8>,
    y: Vec<u8>,
}

impl EcPoint {
    pub fn curve(&self) -> EcCurve {
        self.curve
    }

    pub fn x(&self) -> &[u8] {
        &self.x
    }

    pub fn y(&self) -> &[u8] {
        &self.y
    }
}

/// Fits an unsigned big-endian integer into exactly `length` bytes.
///
/// A single leading zero byte is dropped and shorter values are left-padded. Values longer
/// than `length + 1` keep their low-order `length` bytes.
pub fn normalize(value: &[u8], length: usize) -> Vec<u8> {
    if value.len() == length {
        return value.to_vec();
    }
    if value.len() == length + 1 && value[0] == 0 {
        return value[1..].to_vec();
    }
    if value.len() < length {
        let mut padded = vec![0u8; length - value.len()];
        padded.extend_from_slice(value);
        return padded;
    }
    value[value.len() - length..].to_vec()
}
