use itertools::Itertools;
use std::borrow::Borrow;

/// Rotates a lane left by `n mod 64` bits
pub fn rotl(a: u64, n: usize) -> u64 {
    let shift = n % 64;
    if shift == 0 {
        a
    } else {
        (a << shift) | (a >> (64 - shift))
    }
}

/// Transposes a square matrix in place
pub fn transpose<T, const N: usize>(matrix: &mut [[T; N]; N]) {
    for i in 0..N {
        for j in 0..i {
            let (upper, lower) = matrix.split_at_mut(i);
            std::mem::swap(&mut upper[j][i], &mut lower[0][j]);
        }
    }
}

/// Little-endian composition of up to 8 bytes into a lane
pub fn compose_lane<I>(input: I) -> u64
where
    I: IntoIterator,
    I::Item: Borrow<u8>,
    I::IntoIter: DoubleEndedIterator,
{
    input
        .into_iter()
        .rev()
        .fold(0u64, |acc, byte| (acc << 8) | *byte.borrow() as u64)
}

/// Little-endian decomposition of a lane into 8 bytes
pub fn decompose_lane(lane: u64) -> [u8; 8] {
    let mut bytes = [0u8; 8];
    (0usize..)
        .step_by(8)
        .zip(bytes.iter_mut())
        .for_each(|(shift, byte)| *byte = ((lane >> shift) & 0xff) as u8);
    bytes
}

/// Lowercase hex, most significant nibble first
pub fn to_hex(bytes: impl AsRef<[u8]>) -> String {
    hex::encode(bytes)
}

/// Lanes printed as big-endian hex words, one row per line
pub fn lanes_to_hex(lanes: impl IntoIterator<Item = u64>) -> String {
    lanes
        .into_iter()
        .map(|lane| format!("{lane:016x}"))
        .chunks(5)
        .into_iter()
        .map(|mut row| row.join(" "))
        .join("\n")
}
