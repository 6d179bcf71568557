pub mod types;
pub mod verification_method;
