// Deterministic mock data: seed hashing, lookup tables, and record synthesis

pub mod error;
pub mod hash;
pub mod tables;
pub mod generator;

pub use error::MockError;
pub use hash::hash_code;
pub use generator::*;
