//! Keccak sponge over the 1600-bit permutation.

#[cfg(feature = "inspect")]
mod inspect;
mod permutation;
mod sponge;
mod state;
mod variant;


#[cfg(feature = "inspect")]
pub use inspect::Inspect;
pub use permutation::{KeccakF1600, Permutation, RoundConstants, NUM_ROUNDS};
pub use sponge::{hash, hexdigest, Engine};
pub use state::{from_matrix, to_matrix, Lanes, State, B, LANE_BYTES, NUM_LANES, WIDTH};
pub use variant::{
    variant_224, variant_256, variant_384, variant_512, VariantConfig, SHA3_SUFFIX,
};
