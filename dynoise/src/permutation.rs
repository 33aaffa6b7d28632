use dynoise_config::{validate_table_size, InvalidConfiguration, RandomKind};
use dynoise_util::random::RandomImpl;
use log::debug;

/// A seeded permutation of `[0, size)` used to hash lattice coordinates.
///
/// The permutation is stored twice back to back so that chained lookups of the form
/// `table[previous + (coord & mask)]` never have to wrap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PermutationTable {
    permutation: Box<[u32]>,
    mask: usize,
}

impl PermutationTable {
    /// Shuffles the identity permutation with Fisher-Yates, walking `i` from `size - 1` down to
    /// `1` and swapping it with `random.next_bounded_i32(i + 1)`.
    pub fn build(
        seed: u64,
        size: usize,
        random: RandomKind,
    ) -> Result<Self, InvalidConfiguration> {
        validate_table_size(size)?;

        let mut rand = random.create(seed);
        let mut permutation: Vec<u32> = (0..size as u32).collect();
        for i in (1..size).rev() {
            let j = rand.next_bounded_i32(i as i32 + 1) as usize;
            permutation.swap(i, j);
        }
        permutation.extend_from_within(..);

        debug!("Built {size} entry permutation table for seed {seed} using {random:?}");

        Ok(Self {
            permutation: permutation.into_boxed_slice(),
            mask: size - 1,
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.mask + 1
    }

    /// The permuted entry at `index`, which wraps at the table size.
    #[inline]
    pub fn get(&self, index: usize) -> usize {
        self.permutation[index & self.mask] as usize
    }

    /// Folds lattice coordinates into a single table index in `[0, size)`.
    #[inline]
    pub fn hash(&self, coords: &[i64]) -> usize {
        coords.iter().fold(0, |hash, &coord| {
            self.permutation[hash + (coord & self.mask as i64) as usize] as usize
        })
    }

    /// Maps a table index onto `[-1, 1]`, with `0` at `-1` and `size - 1` at `1`.
    #[inline]
    pub fn value(&self, hash: usize) -> f64 {
        hash as f64 / self.mask as f64 * 2f64 - 1f64
    }
}
