//! Lattice noise evaluators. Every evaluator reads coordinates in one to three dimensions and
//! only depends on the permutation table it is handed, so the same table and coordinates
//! always give the same bits.

use dynoise_config::NoiseKind;
use dynoise_util::{
    math::{lerp_corners, split_cell},
    noise::MAX_DIMENSION,
    FadeCurve,
};

use crate::permutation::PermutationTable;

pub mod perlin;
pub mod simplex;
pub mod value;
pub mod white;

/// Evaluates a single octave of `kind` at `coords`.
#[inline]
pub fn evaluate(
    kind: NoiseKind,
    table: &PermutationTable,
    fade: FadeCurve,
    coords: &[f64],
) -> f64 {
    match kind {
        NoiseKind::Value => value::sample(table, fade, coords),
        NoiseKind::Gradient => perlin::sample(table, fade, coords),
        NoiseKind::Simplex => simplex::sample(table, coords),
        NoiseKind::White => white::sample(table, coords),
    }
}

/// The lattice cell around a sample point.
struct LatticeCell {
    dimension: usize,
    origin: [i64; MAX_DIMENSION],
    offset: [f64; MAX_DIMENSION],
    weights: [f64; MAX_DIMENSION],
}

impl LatticeCell {
    #[inline]
    fn new(coords: &[f64], fade: FadeCurve) -> Self {
        debug_assert!((1..=MAX_DIMENSION).contains(&coords.len()));

        let mut cell = Self {
            dimension: coords.len(),
            origin: [0; MAX_DIMENSION],
            offset: [0f64; MAX_DIMENSION],
            weights: [0f64; MAX_DIMENSION],
        };
        for (axis, &coord) in coords.iter().enumerate() {
            let (origin, offset) = split_cell(coord);
            cell.origin[axis] = origin;
            cell.offset[axis] = offset;
            cell.weights[axis] = fade.apply(offset);
        }
        cell
    }

    /// Computes a value for each of the `2^dimension` corners and blends them with the faded
    /// offsets. `corner_value` receives the corner's lattice coordinates and the vector from
    /// that corner to the sample point.
    #[inline]
    fn blend<F>(&self, mut corner_value: F) -> f64
    where
        F: FnMut(&[i64], &[f64]) -> f64,
    {
        let dimension = self.dimension;
        let mut corners = [0f64; 1 << MAX_DIMENSION];

        for (index, corner) in corners.iter_mut().take(1 << dimension).enumerate() {
            let mut lattice = [0i64; MAX_DIMENSION];
            let mut delta = [0f64; MAX_DIMENSION];
            for axis in 0..dimension {
                let bit = (index >> axis) & 1;
                lattice[axis] = self.origin[axis].wrapping_add(bit as i64);
                delta[axis] = self.offset[axis] - bit as f64;
            }
            *corner = corner_value(&lattice[..dimension], &delta[..dimension]);
        }

        lerp_corners(&self.weights[..dimension], &mut corners)
    }
}
