use super::permutation::{KeccakF1600, Permutation};
use super::state::State;
use super::variant::VariantConfig;
use crate::utils::to_hex;
use ark_std::{end_timer, start_timer};

#[cfg(feature = "inspect")]
use super::inspect::Inspect;

// Final bit of pad10*1
const PAD_LAST: u8 = 0x80;

#[derive(Debug, Clone)]
/// `Engine` computes fixed length sponge outputs for one variant
pub struct Engine<P: Permutation = KeccakF1600> {
    permutation: P,
    variant: VariantConfig,
    state: State,
    #[cfg(feature = "inspect")]
    inspect: Inspect,
    #[cfg(feature = "inspect")]
    checkpoint: Inspect,
}

impl Engine {
    pub fn new(variant: VariantConfig) -> Self {
        Self::with_permutation(variant, KeccakF1600)
    }
}

impl<P: Permutation> Engine<P> {
    pub fn with_permutation(variant: VariantConfig, permutation: P) -> Self {
        Self {
            permutation,
            variant,
            state: State::new(),
            #[cfg(feature = "inspect")]
            inspect: Inspect::default(),
            #[cfg(feature = "inspect")]
            checkpoint: Inspect::default(),
        }
    }

    pub fn variant(&self) -> &VariantConfig {
        &self.variant
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Absorbs, pads and squeezes `input` from a zero state. Output length is
    /// always `variant.output_size()`.
    pub fn hash(&mut self, input: &[u8]) -> Vec<u8> {
        let timer = start_timer!(|| "Engine::hash");
        self.reset();
        let block_size = self.absorb(input);
        self.pad(block_size);
        let out = self.squeeze();
        end_timer!(timer);
        out
    }

    pub fn hexdigest(&mut self, input: &[u8]) -> String {
        to_hex(self.hash(input))
    }

    fn permute(&mut self) {
        #[cfg(feature = "inspect")]
        {
            self.inspect.permutations += 1;
        }
        self.state.permute_with(&self.permutation);
    }

    /// Xors `input` into the state block by block, permuting after each full
    /// block. Returns the length of the trailing partial block, zero when the
    /// input is empty or a multiple of the rate.
    pub(crate) fn absorb(&mut self, input: &[u8]) -> usize {
        let rate = self.variant.rate();
        let mut block_size = 0;
        for block in input.chunks(rate) {
            self.state.xor_bytes(0, block);
            block_size = block.len();
            if block_size == rate {
                #[cfg(feature = "inspect")]
                {
                    self.inspect.absorbed += 1;
                }
                self.permute();
                block_size = 0;
            }
        }
        block_size
    }

    /// Domain suffix at `block_size` then the final padding bit at the last
    /// rate byte. When both land in the same byte and the suffix already
    /// carries the high bit, the frame is closed by an extra permutation.
    pub(crate) fn pad(&mut self, block_size: usize) {
        let rate = self.variant.rate();
        let suffix = self.variant.suffix();
        assert!(block_size < rate);

        self.state.xor_byte(block_size, suffix);
        if suffix & PAD_LAST != 0 && block_size == rate - 1 {
            self.permute();
        }
        self.state.xor_byte(rate - 1, PAD_LAST);
        self.permute();
    }

    pub(crate) fn squeeze(&mut self) -> Vec<u8> {
        let rate = self.variant.rate();
        let mut remaining = self.variant.output_size();
        let mut out = Vec::with_capacity(remaining);
        while remaining > 0 {
            let n = remaining.min(rate);
            out.extend_from_slice(&self.state.bytes()[..n]);
            remaining -= n;
            #[cfg(feature = "inspect")]
            {
                self.inspect.squeezed += 1;
            }
            if remaining > 0 {
                self.permute();
            }
        }
        out
    }
}

#[cfg(feature = "inspect")]
impl<P: Permutation> Engine<P> {
    pub fn inspect(&self) -> &Inspect {
        &self.inspect
    }

    pub fn print_info(&self) {
        println!("SPONGE_INSPECT:");
        println!(
            "rate: {} capacity: {} output: {}",
            self.variant.rate(),
            self.variant.capacity(),
            self.variant.output_size()
        );
        self.inspect.print();
        println!();
    }

    pub fn checkpoint(&mut self) {
        self.checkpoint = self.inspect.clone();
    }

    pub fn diff(&mut self, desc: &str) -> Inspect {
        println!("DIFF: {}", desc);
        let diff = self.inspect.diff(&self.checkpoint);
        diff.print();
        self.checkpoint();
        println!();
        diff
    }
}

/// One shot hash with a fresh engine
pub fn hash(variant: VariantConfig, input: &[u8]) -> Vec<u8> {
    Engine::new(variant).hash(input)
}

pub fn hexdigest(variant: VariantConfig, input: &[u8]) -> String {
    to_hex(hash(variant, input))
}

#[cfg(test)]
mod test {
    use super::{hash, Engine};
    use crate::keccak::permutation::KeccakF1600;
    use crate::keccak::state::State;
    use crate::keccak::variant::{variant_256, VariantConfig};

    #[test]
    fn test_absorb_block_size() {
        let variant = variant_256();
        let rate = variant.rate();
        let mut engine = Engine::new(variant);
        assert_eq!(engine.absorb(&[]), 0);
        assert!(engine.state().is_zero());

        engine.reset();
        assert_eq!(engine.absorb(&[1, 2, 3]), 3);
        assert_eq!(&engine.state().bytes()[..4], &[1, 2, 3, 0]);

        engine.reset();
        assert_eq!(engine.absorb(&vec![0xaa; rate]), 0);
        assert!(!engine.state().is_zero());

        engine.reset();
        assert_eq!(engine.absorb(&vec![0xaa; 2 * rate + 5]), 5);
    }

    #[test]
    fn test_pad_frame() {
        let variant = variant_256();
        let rate = variant.rate();
        let mut engine = Engine::new(variant);
        engine.pad(0);

        let mut expect = State::new();
        expect.xor_byte(0, 0x06);
        expect.xor_byte(rate - 1, 0x80);
        expect.permute_with(&KeccakF1600);
        assert_eq!(engine.state(), &expect);
    }

    #[test]
    fn test_pad_collision() {
        // suffix carrying the high bit on the last rate byte
        let variant = VariantConfig::new(136, 64, 32, 0x86).unwrap();
        let rate = variant.rate();
        let input = vec![0x11u8; rate - 1];

        let mut expect = State::new();
        expect.xor_bytes(0, &input);
        expect.xor_byte(rate - 1, 0x86);
        expect.permute_with(&KeccakF1600);
        expect.xor_byte(rate - 1, 0x80);
        expect.permute_with(&KeccakF1600);

        let mut engine = Engine::new(variant);
        let out = engine.hash(&input);
        assert_eq!(out, &expect.bytes()[..32]);

        // without the high bit suffix and padding bit share a byte
        let variant = VariantConfig::new(136, 64, 32, 0x06).unwrap();
        let mut expect = State::new();
        expect.xor_bytes(0, &input);
        expect.xor_byte(rate - 1, 0x86);
        expect.permute_with(&KeccakF1600);
        assert_eq!(hash(variant, &input), &expect.bytes()[..32]);
    }

    #[test]
    fn test_squeeze_multi_block() {
        let variant = VariantConfig::new(72, 128, 200, 0x06).unwrap();
        let mut engine = Engine::new(variant);
        let out = engine.hash(b"abc");
        assert_eq!(out.len(), 200);

        let mut state = State::new();
        state.xor_bytes(0, b"abc");
        state.xor_byte(3, 0x06);
        state.xor_byte(71, 0x80);
        let mut expect = vec![];
        for n in [72, 72, 56] {
            state.permute_with(&KeccakF1600);
            expect.extend_from_slice(&state.bytes()[..n]);
        }
        assert_eq!(out, expect);
    }

    #[test]
    fn test_engine_reuse() {
        let mut engine = Engine::new(variant_256());
        let h0 = engine.hash(b"first");
        let h1 = engine.hash(b"second");
        let h2 = engine.hash(b"first");
        assert_eq!(h0, h2);
        assert_ne!(h0, h1);
        assert_eq!(engine.hexdigest(b"first"), crate::utils::to_hex(&h0));
    }

    #[test]
    #[cfg(feature = "inspect")]
    fn test_inspect() {
        let variant = variant_256();
        let rate = variant.rate();
        let mut engine = Engine::new(variant);

        engine.hash(&[]);
        let diff = engine.diff("empty");
        assert_eq!(diff.absorbed(), 0);
        assert_eq!(diff.permutations(), 1);
        assert_eq!(diff.squeezed(), 1);

        engine.hash(&vec![0u8; rate]);
        let diff = engine.diff("one block");
        assert_eq!(diff.absorbed(), 1);
        assert_eq!(diff.permutations(), 2);

        engine.hash(&vec![0u8; 3 * rate - 1]);
        let diff = engine.diff("three blocks");
        assert_eq!(diff.absorbed(), 2);
        assert_eq!(diff.permutations(), 3);

        let variant = VariantConfig::new(72, 128, 200, 0x06).unwrap();
        let mut engine = Engine::new(variant);
        engine.hash(b"abc");
        assert_eq!(engine.inspect().permutations(), 3);
        assert_eq!(engine.inspect().squeezed(), 3);
        engine.print_info();
    }
}
