// Power-of-two hash table shared by the lattice, value, and Perlin
// samplers. Lookups mask the index with `size - 1`, which is why the size
// must be a power of two; the invariant is enforced once at build time and
// never re-checked in the hot path.

use rand::Rng;
use tracing::debug;

use crate::config::NoiseError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PermutationTable {
    entries: Vec<i32>,
    mask: i32,
}

impl PermutationTable {
    // Build a table of length 2^size_exponent holding every integer in
    // [0, size) exactly once. With `shuffle` unset the order is the
    // identity; otherwise each slot i is swapped with a uniformly chosen
    // slot in [i, size).
    pub fn build(
        size_exponent: i32,
        shuffle: bool,
        rng: &mut impl Rng,
    ) -> Result<Self, NoiseError> {
        if size_exponent < 0 {
            return Err(NoiseError::InvalidConfig {
                reason: format!("hash table size exponent {size_exponent} is negative"),
            });
        }
        let size = 1usize << size_exponent;
        if size < 2 {
            return Err(NoiseError::InvalidConfig {
                reason: format!("hash table size {size} is below the minimum of 2"),
            });
        }

        let mut entries: Vec<i32> = (0..size as i32).collect();
        if shuffle {
            for i in 0..size {
                let j = rng.random_range(i..size);
                entries.swap(i, j);
            }
        }

        debug!(size, shuffle, "built permutation table");
        Ok(Self {
            entries,
            mask: size as i32 - 1,
        })
    }

    // Masked lookup; any i32 index is valid
    #[inline]
    pub fn get(&self, index: i32) -> i32 {
        self.entries[(index & self.mask) as usize]
    }

    #[inline]
    pub fn mask(&self) -> i32 {
        self.mask
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[i32] {
        &self.entries
    }
}
