use super::RandomImpl;

const GOLDEN_RATIO_64: u64 = 0x9E3779B97F4A7C15;
const SILVER_RATIO_64: u64 = 0x6A09E667F3BCC909;

/// xoroshiro128++ seeded from a single `u64` through two rounds of the stafford13 mixer.
pub struct Xoroshiro {
    lo: u64,
    hi: u64,
}

fn mix_stafford_13(z: u64) -> u64 {
    let z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    let z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

impl Xoroshiro {
    pub fn from_seed(seed: u64) -> Self {
        let lo = seed ^ SILVER_RATIO_64;
        let hi = lo.wrapping_add(GOLDEN_RATIO_64);
        Self::new(mix_stafford_13(lo), mix_stafford_13(hi))
    }

    fn new(lo: u64, hi: u64) -> Self {
        // An all-zero state would only ever produce zeros
        if (lo | hi) == 0 {
            Self {
                lo: GOLDEN_RATIO_64,
                hi: SILVER_RATIO_64,
            }
        } else {
            Self { lo, hi }
        }
    }

    fn next_u64(&mut self) -> u64 {
        let lo = self.lo;
        let mut hi = self.hi;
        let result = lo.wrapping_add(hi).rotate_left(17).wrapping_add(lo);
        hi ^= lo;
        self.lo = lo.rotate_left(49) ^ hi ^ (hi << 21);
        self.hi = hi.rotate_left(28);
        result
    }
}

impl RandomImpl for Xoroshiro {
    fn next_i32(&mut self) -> i32 {
        self.next_u64() as i32
    }

    fn next_bounded_i32(&mut self, bound: i32) -> i32 {
        debug_assert!(bound > 0);
        let bound = bound as u64;
        let mut product = (self.next_i32() as u32 as u64) * bound;
        let mut low = product & 0xFFFFFFFF;
        if low < bound {
            let threshold = ((!bound).wrapping_add(1) & 0xFFFFFFFF) % bound;
            while low < threshold {
                product = (self.next_i32() as u32 as u64) * bound;
                low = product & 0xFFFFFFFF;
            }
        }
        (product >> 32) as i32
    }
}
