//! Keccak-f[1600].
//!
//! A round is theta, rho and pi combined into a single lane walk, chi, then
//! iota. Rotation amounts come from the walk index `t` as `(t + 1)(t + 2) / 2`
//! and round constants come from an 8-bit LFSR that runs across all 24
//! rounds.
//!
//! See https://keccak.team/keccak_specs_summary.html

use super::state::{Lanes, B, NUM_LANES};
use crate::utils::rotl;

/// Number of rounds, 12 + 2l with lane size 2^l = 64
pub const NUM_ROUNDS: usize = 24;

// Steps of the round constant LFSR per iota application
const LFSR_STEPS: usize = 7;
// x^8 + x^6 + x^5 + x^4 + 1 with the x^8 term dropped
const LFSR_POLY: u8 = 0x71;

pub trait Permutation {
    fn permute(&self, lanes: &mut Lanes);
}

/// Round constant generator.
///
/// The register persists across rounds. Each call advances it seven times
/// and flips bit `2^i - 1` of the constant for every step `i` that leaves
/// bit 1 of the register set.
#[derive(Debug, Clone)]
pub struct RoundConstants {
    r: u8,
}

impl Default for RoundConstants {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundConstants {
    pub const fn new() -> Self {
        Self { r: 1 }
    }

    pub fn next_constant(&mut self) -> u64 {
        (0..LFSR_STEPS).fold(0u64, |rc, i| {
            self.r = (self.r << 1) ^ ((self.r >> 7) * LFSR_POLY);
            if self.r & 2 != 0 {
                rc ^ (1u64 << ((1usize << i) - 1))
            } else {
                rc
            }
        })
    }
}

impl Iterator for RoundConstants {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        Some(self.next_constant())
    }
}

pub(crate) fn theta(lanes: &mut Lanes) {
    let c: [u64; B] = std::array::from_fn(|x| lanes[x].iter().fold(0u64, |acc, lane| acc ^ lane));
    let d: [u64; B] = std::array::from_fn(|x| c[(x + 4) % B] ^ rotl(c[(x + 1) % B], 1));
    lanes
        .iter_mut()
        .zip(d.iter())
        .for_each(|(column, d)| column.iter_mut().for_each(|lane| *lane ^= d));
}

pub(crate) fn rho_pi(lanes: &mut Lanes) {
    let (mut x, mut y) = (1, 0);
    let mut current = lanes[x][y];
    for t in 0..NUM_LANES - 1 {
        (x, y) = (y, (2 * x + 3 * y) % B);
        let next = lanes[x][y];
        lanes[x][y] = rotl(current, (t + 1) * (t + 2) / 2);
        current = next;
    }
}

pub(crate) fn chi(lanes: &mut Lanes) {
    for y in 0..B {
        let t: [u64; B] = std::array::from_fn(|x| lanes[x][y]);
        for x in 0..B {
            lanes[x][y] = t[x] ^ (!t[(x + 1) % B] & t[(x + 2) % B]);
        }
    }
}

pub(crate) fn iota(lanes: &mut Lanes, round_constant: u64) {
    lanes[0][0] ^= round_constant;
}

pub(crate) fn keccak_round(lanes: &mut Lanes, round_constant: u64) {
    theta(lanes);
    rho_pi(lanes);
    chi(lanes);
    iota(lanes, round_constant);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct KeccakF1600;

impl Permutation for KeccakF1600 {
    fn permute(&self, lanes: &mut Lanes) {
        RoundConstants::new()
            .take(NUM_ROUNDS)
            .for_each(|rc| keccak_round(lanes, rc));
    }
}
