use dynoise_config::InvalidConfiguration;
use dynoise_util::{math::map, noise::MAX_DIMENSION};

use crate::{error::NoiseError, sampler::Sampler};

/// A dense grid of noise values in one to three dimensions, stored with x varying fastest.
#[derive(Clone, Debug, PartialEq)]
pub struct NoiseMap {
    dimension: usize,
    extent: [usize; MAX_DIMENSION],
    values: Vec<f64>,
}

impl NoiseMap {
    pub fn new_1d(width: usize) -> Result<Self, NoiseError> {
        Self::with_extent(1, [width, 1, 1])
    }

    pub fn new_2d(width: usize, height: usize) -> Result<Self, NoiseError> {
        Self::with_extent(2, [width, height, 1])
    }

    pub fn new_3d(width: usize, height: usize, depth: usize) -> Result<Self, NoiseError> {
        Self::with_extent(3, [width, height, depth])
    }

    fn with_extent(dimension: usize, extent: [usize; MAX_DIMENSION]) -> Result<Self, NoiseError> {
        for (parameter, size) in ["width", "height", "depth"].into_iter().zip(extent) {
            if size == 0 {
                let invalid = InvalidConfiguration::new(parameter, size, "must be at least 1");
                return Err(invalid.into());
            }
        }
        let len = extent
            .iter()
            .try_fold(1usize, |len, size| len.checked_mul(*size))
            .ok_or_else(|| {
                InvalidConfiguration::new("extent", format!("{extent:?}"), "too many cells")
            })?;

        Ok(Self {
            dimension,
            extent,
            values: vec![0f64; len],
        })
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn width(&self) -> usize {
        self.extent[0]
    }

    pub fn height(&self) -> usize {
        self.extent[1]
    }

    pub fn depth(&self) -> usize {
        self.extent[2]
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<f64> {
        self.index(x, y, z).map(|index| self.values[index])
    }

    fn index(&self, x: usize, y: usize, z: usize) -> Option<usize> {
        let [width, height, depth] = self.extent;
        (x < width && y < height && z < depth).then(|| x + width * (y + height * z))
    }

    /// Overwrites every cell with `sampler` evaluated at `origin + cell * step`. Only the first
    /// `dimension` components of `origin` are used.
    pub fn fill(&mut self, sampler: &Sampler, origin: [f64; MAX_DIMENSION], step: f64) {
        let dimension = self.dimension;
        let [width, height, _] = self.extent;

        for (index, value) in self.values.iter_mut().enumerate() {
            let cell = [index % width, (index / width) % height, index / (width * height)];
            let mut coords = [0f64; MAX_DIMENSION];
            for axis in 0..dimension {
                coords[axis] = origin[axis] + cell[axis] as f64 * step;
            }
            *value = sampler.sample_coords(&coords[..dimension]);
        }
    }

    /// Lowest and highest value in the map.
    pub fn min_max(&self) -> (f64, f64) {
        self.values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| {
                (min.min(*value), max.max(*value))
            })
    }

    /// Linearly remaps the map so that its lowest value becomes `lower` and its highest becomes
    /// `upper`. A map holding a single distinct value is set to `lower`.
    pub fn normalize(&mut self, lower: f64, upper: f64) -> Result<(), NoiseError> {
        if !lower.is_finite() || !upper.is_finite() || lower > upper {
            return Err(NoiseError::InvalidRange { lower, upper });
        }

        let (min, max) = self.min_max();
        if min == max {
            self.values.fill(lower);
            return Ok(());
        }

        for value in &mut self.values {
            *value = map(*value, min, max, lower, upper).clamp(lower, upper);
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use dynoise_config::{FractalConfig, NoiseKind};

    use super::NoiseMap;
    use crate::{error::NoiseError, sampler::Sampler};

    #[test]
    fn rejects_empty_extent() {
        let err = NoiseMap::new_2d(4, 0).unwrap_err();
        assert!(matches!(
            err,
            NoiseError::InvalidConfiguration(ref invalid) if invalid.parameter == "height"
        ));
        assert!(NoiseMap::new_1d(0).is_err());
        assert!(NoiseMap::new_3d(1, 1, 0).is_err());
        assert!(NoiseMap::new_3d(usize::MAX, 2, 2).is_err());
    }

    #[test]
    fn fill_matches_sampler() {
        let fractal = FractalConfig::new(3, 2.0, 0.5, 0.1, true).unwrap();
        let sampler = Sampler::create(8, NoiseKind::Gradient, Some(fractal)).unwrap();

        let mut map = NoiseMap::new_3d(5, 4, 3).unwrap();
        map.fill(&sampler, [1.0, -2.0, 0.5], 0.25);
        assert_eq!(map.values().len(), 60);
        for z in 0..3 {
            for y in 0..4 {
                for x in 0..5 {
                    let expected = sampler.sample_3d(
                        1.0 + x as f64 * 0.25,
                        -2.0 + y as f64 * 0.25,
                        0.5 + z as f64 * 0.25,
                    );
                    assert_eq!(map.get(x, y, z), Some(expected));
                }
            }
        }
        assert_eq!(map.get(5, 0, 0), None);
    }

    #[test]
    fn fill_ignores_unused_axes() {
        let sampler = Sampler::create(8, NoiseKind::Value, None).unwrap();
        let mut map = NoiseMap::new_2d(3, 2).unwrap();
        map.fill(&sampler, [0.5, 0.5, 99.0], 1.5);
        assert_eq!(map.get(2, 1, 0), Some(sampler.sample_2d(3.5, 2.0)));
        assert_eq!(map.dimension(), 2);
        assert_eq!((map.width(), map.height(), map.depth()), (3, 2, 1));
    }

    #[test]
    fn normalize_to_range() {
        let sampler = Sampler::create(21, NoiseKind::Simplex, None).unwrap();
        let mut map = NoiseMap::new_2d(32, 32).unwrap();
        map.fill(&sampler, [0.0, 0.0, 0.0], 0.13);

        map.normalize(0.0, 128.0).unwrap();
        let (min, max) = map.min_max();
        assert_eq!(min, 0.0);
        assert_eq!(max, 128.0);
        assert!(map.values().iter().all(|value| (0.0..=128.0).contains(value)));
    }

    #[test]
    fn normalize_flat_map() {
        let mut map = NoiseMap::new_1d(8).unwrap();
        map.normalize(-3.0, 5.0).unwrap();
        assert!(map.values().iter().all(|value| *value == -3.0));
    }

    #[test]
    fn normalize_rejects_inverted_range() {
        let mut map = NoiseMap::new_1d(8).unwrap();
        assert_eq!(
            map.normalize(2.0, 1.0),
            Err(NoiseError::InvalidRange {
                lower: 2.0,
                upper: 1.0
            })
        );
        assert!(map.normalize(f64::NAN, 1.0).is_err());
    }
}
