pub mod jsonwebkey;
pub mod multibase;
