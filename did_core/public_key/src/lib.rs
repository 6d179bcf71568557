mod decoder;
pub mod ec;
mod error;
mod key;
mod key_type;

pub use decoder::MulticodecDecoder;
pub use ec::{normalize, sqrt_mod, EcCurve, EcPoint};
pub use error::PublicKeyError;
pub use key::Key;
pub use key_type::KeyType;
