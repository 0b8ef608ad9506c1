use super::permutation::Permutation;
use crate::utils::{compose_lane, decompose_lane, lanes_to_hex, transpose};
use itertools::{iproduct, izip};
use std::fmt;

/// Number of rows or columns of the lane matrix
pub const B: usize = 5;
/// Number of 64-bit lanes
pub const NUM_LANES: usize = B * B;
/// Bytes per lane
pub const LANE_BYTES: usize = 8;
/// State width in bytes, 1600 bits
pub const WIDTH: usize = NUM_LANES * LANE_BYTES;

/// Lane view of the state, addressed as `lanes[x][y]`
pub type Lanes = [[u64; B]; B];

#[inline(always)]
const fn offset(x: usize, y: usize) -> usize {
    LANE_BYTES * (x + B * y)
}

/// Byte view to lane view. Lane `(x, y)` is decoded little-endian from bytes
/// `[8 * (x + 5 * y), 8 * (x + 5 * y) + 8)`.
pub fn to_matrix(flat: &[u8; WIDTH]) -> Lanes {
    // filled as rows[y][x] in flat order then transposed
    let mut lanes: Lanes = [[0; B]; B];
    izip!(lanes.iter_mut().flatten(), flat.chunks_exact(LANE_BYTES))
        .for_each(|(lane, bytes)| *lane = compose_lane(bytes));
    transpose(&mut lanes);
    lanes
}

/// Lane view to byte view, exact inverse of [`to_matrix`]
pub fn from_matrix(lanes: &Lanes) -> [u8; WIDTH] {
    let mut flat = [0u8; WIDTH];
    iproduct!(0..B, 0..B).for_each(|(y, x)| {
        let offset = offset(x, y);
        flat[offset..offset + LANE_BYTES].copy_from_slice(&decompose_lane(lanes[x][y]));
    });
    flat
}

/// 200 byte sponge state
#[derive(Clone, PartialEq, Eq)]
pub struct State([u8; WIDTH]);

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

// A row-column labeled output of the current state.
impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lanes = self.lanes();
        let linear = iproduct!(0..B, 0..B).map(|(y, x)| lanes[x][y]);
        writeln!(f, "{}", lanes_to_hex(linear))
    }
}

impl State {
    pub const fn new() -> Self {
        Self([0u8; WIDTH])
    }

    pub fn from_bytes(bytes: [u8; WIDTH]) -> Self {
        Self(bytes)
    }

    pub fn bytes(&self) -> &[u8; WIDTH] {
        &self.0
    }

    pub fn lanes(&self) -> Lanes {
        to_matrix(&self.0)
    }

    pub fn set_lanes(&mut self, lanes: &Lanes) {
        self.0 = from_matrix(lanes);
    }

    pub fn lane(&self, x: usize, y: usize) -> u64 {
        assert!(x < B && y < B);
        let offset = offset(x, y);
        compose_lane(&self.0[offset..offset + LANE_BYTES])
    }

    pub fn xor_byte(&mut self, index: usize, byte: u8) {
        self.0[index] ^= byte;
    }

    /// Xors `bytes` into the byte view starting at `offset`
    pub fn xor_bytes(&mut self, offset: usize, bytes: &[u8]) {
        assert!(offset + bytes.len() <= WIDTH);
        izip!(self.0[offset..].iter_mut(), bytes).for_each(|(s, b)| *s ^= b);
    }

    pub fn permute_with<P: Permutation>(&mut self, permutation: &P) {
        let mut lanes = self.lanes();
        permutation.permute(&mut lanes);
        self.set_lanes(&lanes);
    }

    pub fn reset(&mut self) {
        self.0 = [0u8; WIDTH];
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }
}
