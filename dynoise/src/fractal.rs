use dynoise_config::FractalConfig;
use dynoise_util::noise::MAX_DIMENSION;

/// Layers `config.octave_count` octaves of `evaluate`.
///
/// Octaves run in increasing order. The frequency starts at `base_frequency` and is multiplied by
/// `lacunarity` after every octave, the amplitude starts at one and is multiplied by
/// `persistence`. The summation order is fixed since it decides the low bits of the result.
#[inline]
pub fn sample_fractal<F>(coords: &[f64], config: &FractalConfig, mut evaluate: F) -> f64
where
    F: FnMut(&[f64]) -> f64,
{
    let dimension = coords.len();
    let mut scaled = [0f64; MAX_DIMENSION];
    let mut sum = 0f64;
    let mut max_amplitude = 0f64;
    for (frequency, amplitude) in config.octaves() {
        for (scaled, coord) in scaled.iter_mut().zip(coords) {
            *scaled = coord * frequency;
        }
        sum += evaluate(&scaled[..dimension]) * amplitude;
        max_amplitude += amplitude;
    }
    if config.normalize {
        sum / max_amplitude
    } else {
        sum
    }
}
