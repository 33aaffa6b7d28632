use std::{
    sync::atomic::{AtomicU64, Ordering},
    time,
};

use enum_dispatch::enum_dispatch;
use legacy_rand::LegacyRand;
use xoroshiro128::Xoroshiro;

pub mod legacy_rand;
pub mod xoroshiro128;

static SEED_UNIQUIFIER: AtomicU64 = AtomicU64::new(8682522807148012u64);

/// A seed that differs between calls, for callers that do not care about reproducibility.
pub fn get_seed() -> u64 {
    let mut seed = SEED_UNIQUIFIER.load(Ordering::Relaxed);
    loop {
        let next = seed.wrapping_mul(1181783497276652981u64);
        match SEED_UNIQUIFIER.compare_exchange_weak(
            seed,
            next,
            Ordering::Relaxed,
            Ordering::Relaxed,
        ) {
            Ok(_) => break,
            Err(current) => seed = current,
        }
    }

    let nanos = time::SystemTime::now()
        .duration_since(time::SystemTime::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos())
        .unwrap_or_default();

    let nano_upper = (nanos >> 8) as u64;
    let nano_lower = nanos as u64;
    seed ^ nano_upper ^ nano_lower
}

#[enum_dispatch(RandomImpl)]
pub enum RandomGenerator {
    Xoroshiro(Xoroshiro),
    Legacy(LegacyRand),
}

/// The draws a permutation shuffle needs.
#[enum_dispatch]
pub trait RandomImpl {
    fn next_i32(&mut self) -> i32;

    /// Uniform in `[0, bound)`. `bound` must be positive.
    fn next_bounded_i32(&mut self, bound: i32) -> i32;
}
