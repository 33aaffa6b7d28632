use derive_getters::Getters;
use dynoise_config::{FadeCurve, FractalConfig, NoiseConfig, NoiseKind};
use log::debug;

use crate::{
    error::NoiseError, fractal::sample_fractal, noise::evaluate, permutation::PermutationTable,
    point::Point,
};

/// A seeded, configured noise function.
///
/// Everything is validated when the sampler is built, so sampling itself cannot fail. A sampler
/// is never mutated afterwards and can be shared freely between threads.
#[derive(Getters, Clone, Debug)]
pub struct Sampler {
    seed: u64,
    kind: NoiseKind,
    fade_curve: FadeCurve,
    fractal: FractalConfig,
    table: PermutationTable,
}

impl Sampler {
    pub fn new(config: &NoiseConfig) -> Result<Self, NoiseError> {
        config.fractal.validate()?;
        let table = PermutationTable::build(config.seed, config.table_size, config.random)?;

        debug!(
            "Created {:?} sampler for seed {} ({} octaves)",
            config.kind, config.seed, config.fractal.octave_count
        );

        Ok(Self {
            seed: config.seed,
            kind: config.kind,
            fade_curve: config.fade_curve,
            fractal: config.fractal.clone(),
            table,
        })
    }

    /// Builds a sampler with the default table size, fade curve and shuffle. `None` samples a
    /// single octave at unit frequency.
    pub fn create(
        seed: u64,
        kind: NoiseKind,
        fractal: Option<FractalConfig>,
    ) -> Result<Self, NoiseError> {
        Self::new(&NoiseConfig {
            kind,
            fractal: fractal.unwrap_or_default(),
            ..NoiseConfig::with_seed(seed)
        })
    }

    #[inline]
    pub fn sample<P: Point>(&self, point: P) -> f64 {
        self.sample_coords(&point.coords()[..P::DIMENSION])
    }

    #[inline]
    pub fn sample_1d(&self, x: f64) -> f64 {
        self.sample(x)
    }

    #[inline]
    pub fn sample_2d(&self, x: f64, y: f64) -> f64 {
        self.sample([x, y])
    }

    #[inline]
    pub fn sample_3d(&self, x: f64, y: f64, z: f64) -> f64 {
        self.sample([x, y, z])
    }

    /// Samples every point independently, in input order.
    pub fn sample_batch<P: Point>(&self, points: &[P]) -> Vec<f64> {
        points.iter().map(|point| self.sample(*point)).collect()
    }

    /// `coords` holds one to three coordinates.
    #[inline]
    pub(crate) fn sample_coords(&self, coords: &[f64]) -> f64 {
        sample_fractal(coords, &self.fractal, |scaled| {
            evaluate(self.kind, &self.table, self.fade_curve, scaled)
        })
    }
}
