/// Sponge activity counters
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Inspect {
    pub(crate) absorbed: usize,
    pub(crate) permutations: usize,
    pub(crate) squeezed: usize,
}

impl Inspect {
    /// Full rate blocks absorbed
    pub fn absorbed(&self) -> usize {
        self.absorbed
    }

    /// Permutation calls from absorb, pad and squeeze
    pub fn permutations(&self) -> usize {
        self.permutations
    }

    /// Output blocks, the last one possibly partial
    pub fn squeezed(&self) -> usize {
        self.squeezed
    }

    pub(crate) fn print(&self) {
        println!("absorbed: {}", self.absorbed);
        println!("permutations: {}", self.permutations);
        println!("squeezed: {}", self.squeezed);
    }

    pub fn diff(&self, other: &Self) -> Self {
        Self {
            absorbed: self.absorbed.checked_sub(other.absorbed).unwrap(),
            permutations: self.permutations.checked_sub(other.permutations).unwrap(),
            squeezed: self.squeezed.checked_sub(other.squeezed).unwrap(),
        }
    }
}
