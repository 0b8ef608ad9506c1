use super::state::WIDTH;
use crate::Error;

/// SHA-3 domain separation suffix, `01` followed by the first padding bit
pub const SHA3_SUFFIX: u8 = 0x06;

/// Sponge parameters, all sizes in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantConfig {
    output_size: usize,
    rate: usize,
    capacity: usize,
    suffix: u8,
}

impl VariantConfig {
    /// Checks `rate + capacity == 200`, `1 <= rate <= 199` and a non-empty
    /// output
    pub fn new(rate: usize, capacity: usize, output_size: usize, suffix: u8) -> Result<Self, Error> {
        (1..WIDTH).contains(&rate).then_some(()).ok_or(Error::InvalidRate(rate))?;
        (rate.checked_add(capacity) == Some(WIDTH))
            .then_some(())
            .ok_or(Error::InvalidWidth { rate, capacity })?;
        (output_size > 0).then_some(()).ok_or(Error::InvalidOutputSize)?;
        Ok(Self {
            output_size,
            rate,
            capacity,
            suffix,
        })
    }

    // Capacity is twice the digest size for all fixed-output instances.
    const fn sha3(bits: usize) -> Self {
        let output_size = bits / 8;
        Self {
            output_size,
            rate: WIDTH - 2 * output_size,
            capacity: 2 * output_size,
            suffix: SHA3_SUFFIX,
        }
    }

    pub const fn sha3_224() -> Self {
        Self::sha3(224)
    }

    pub const fn sha3_256() -> Self {
        Self::sha3(256)
    }

    pub const fn sha3_384() -> Self {
        Self::sha3(384)
    }

    pub const fn sha3_512() -> Self {
        Self::sha3(512)
    }

    pub fn output_size(&self) -> usize {
        self.output_size
    }

    pub fn rate(&self) -> usize {
        self.rate
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn width(&self) -> usize {
        self.rate + self.capacity
    }

    pub fn suffix(&self) -> u8 {
        self.suffix
    }
}

pub const fn variant_224() -> VariantConfig {
    VariantConfig::sha3_224()
}

pub const fn variant_256() -> VariantConfig {
    VariantConfig::sha3_256()
}

pub const fn variant_384() -> VariantConfig {
    VariantConfig::sha3_384()
}

pub const fn variant_512() -> VariantConfig {
    VariantConfig::sha3_512()
}
