mod negative;
mod positive;
mod serde;
