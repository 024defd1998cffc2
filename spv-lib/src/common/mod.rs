pub mod constants;
pub mod hashes;
