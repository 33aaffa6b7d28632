use serde::{Deserialize, Serialize};

use crate::InvalidConfiguration;

/// How octaves of a base noise are layered on top of each other.
///
/// Octave `i` is sampled at `base_frequency * lacunarity^i` and weighted by `persistence^i`.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct FractalConfig {
    /// Number of layers. A single octave is plain noise.
    pub octave_count: u32,
    /// Frequency multiplier between successive octaves.
    pub lacunarity: f64,
    /// Amplitude multiplier between successive octaves.
    pub persistence: f64,
    /// Frequency of the first octave.
    pub base_frequency: f64,
    /// Divide the sum by the total amplitude so the result keeps the base noise range.
    pub normalize: bool,
}

impl Default for FractalConfig {
    fn default() -> Self {
        Self {
            octave_count: 1,
            lacunarity: 2.0,
            persistence: 0.5,
            base_frequency: 1.0,
            normalize: true,
        }
    }
}

impl FractalConfig {
    pub fn new(
        octave_count: u32,
        lacunarity: f64,
        persistence: f64,
        base_frequency: f64,
        normalize: bool,
    ) -> Result<Self, InvalidConfiguration> {
        let config = Self {
            octave_count,
            lacunarity,
            persistence,
            base_frequency,
            normalize,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_octaves(octave_count: u32) -> Result<Self, InvalidConfiguration> {
        let config = Self {
            octave_count,
            ..Default::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), InvalidConfiguration> {
        if self.octave_count < 1 {
            return Err(InvalidConfiguration::new(
                "octave_count",
                self.octave_count,
                "at least one octave is required",
            ));
        }
        positive("lacunarity", self.lacunarity)?;
        positive("persistence", self.persistence)?;
        positive("base_frequency", self.base_frequency)?;

        // Walks the same schedule sampling does, so a config passing here never feeds an
        // infinite frequency or amplitude into a sample
        let mut total = 0f64;
        for (frequency, amplitude) in self.octaves() {
            total += amplitude;
            if !frequency.is_finite() || !total.is_finite() {
                return Err(InvalidConfiguration::new(
                    "octave_count",
                    self.octave_count,
                    "frequency or amplitude overflows before the last octave",
                ));
            }
        }
        Ok(())
    }

    /// The `(frequency, amplitude)` of every octave, in sampling order. Both are accumulated by
    /// repeated multiplication, and the low bits of every sample depend on that.
    pub fn octaves(&self) -> impl Iterator<Item = (f64, f64)> {
        let lacunarity = self.lacunarity;
        let persistence = self.persistence;
        std::iter::successors(
            Some((self.base_frequency, 1f64)),
            move |(frequency, amplitude)| Some((frequency * lacunarity, amplitude * persistence)),
        )
        .take(self.octave_count as usize)
    }

    /// Sum of all octave amplitudes, the largest magnitude an un-normalized sum can reach for a
    /// base noise bounded by one.
    pub fn max_amplitude(&self) -> f64 {
        self.octaves()
            .fold(0f64, |total, (_, amplitude)| total + amplitude)
    }
}

fn positive(parameter: &'static str, value: f64) -> Result<(), InvalidConfiguration> {
    if value.is_finite() && value > 0f64 {
        Ok(())
    } else {
        Err(InvalidConfiguration::new(
            parameter,
            value,
            "must be a finite number greater than zero",
        ))
    }
}
