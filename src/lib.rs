pub mod keccak;
pub mod utils;

pub use keccak::{
    hash, hexdigest, variant_224, variant_256, variant_384, variant_512, Engine, VariantConfig,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Rate outside of `1..=199` bytes
    InvalidRate(usize),
    /// Rate and capacity not adding up to the 200 byte state
    InvalidWidth { rate: usize, capacity: usize },
    InvalidOutputSize,
}
