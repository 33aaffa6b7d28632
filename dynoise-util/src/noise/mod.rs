//! Seed-independent gradient directions used by gradient and simplex noise.

use std::f64::consts::FRAC_1_SQRT_2;

/// Highest dimension any gradient set is defined for.
pub const MAX_DIMENSION: usize = 3;

pub const GRADIENTS_1D: [[f64; 1]; 2] = [[1f64], [-1f64]];

/// The four axis directions followed by the four diagonals, all of unit length.
pub const GRADIENTS_2D: [[f64; 2]; 8] = [
    [1f64, 0f64],
    [-1f64, 0f64],
    [0f64, 1f64],
    [0f64, -1f64],
    [FRAC_1_SQRT_2, FRAC_1_SQRT_2],
    [-FRAC_1_SQRT_2, FRAC_1_SQRT_2],
    [FRAC_1_SQRT_2, -FRAC_1_SQRT_2],
    [-FRAC_1_SQRT_2, -FRAC_1_SQRT_2],
];

/// Directions from the center of a cube to the midpoints of its twelve edges, scaled to unit
/// length.
pub const GRADIENTS_3D: [[f64; 3]; 12] = [
    [FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0f64],
    [-FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0f64],
    [FRAC_1_SQRT_2, -FRAC_1_SQRT_2, 0f64],
    [-FRAC_1_SQRT_2, -FRAC_1_SQRT_2, 0f64],
    [FRAC_1_SQRT_2, 0f64, FRAC_1_SQRT_2],
    [-FRAC_1_SQRT_2, 0f64, FRAC_1_SQRT_2],
    [FRAC_1_SQRT_2, 0f64, -FRAC_1_SQRT_2],
    [-FRAC_1_SQRT_2, 0f64, -FRAC_1_SQRT_2],
    [0f64, FRAC_1_SQRT_2, FRAC_1_SQRT_2],
    [0f64, -FRAC_1_SQRT_2, FRAC_1_SQRT_2],
    [0f64, FRAC_1_SQRT_2, -FRAC_1_SQRT_2],
    [0f64, -FRAC_1_SQRT_2, -FRAC_1_SQRT_2],
];

/// Selects the gradient for a hashed lattice corner.
///
/// # Panics
/// If `dimension` is not in `1..=MAX_DIMENSION`.
#[inline]
pub fn gradient(dimension: usize, hash: usize) -> &'static [f64] {
    match dimension {
        1 => &GRADIENTS_1D[hash % GRADIENTS_1D.len()],
        2 => &GRADIENTS_2D[hash % GRADIENTS_2D.len()],
        3 => &GRADIENTS_3D[hash % GRADIENTS_3D.len()],
        _ => panic!("no gradient set for dimension {dimension}"),
    }
}

#[inline]
pub fn dot(gradient: &[f64], offset: &[f64]) -> f64 {
    gradient
        .iter()
        .zip(offset)
        .fold(0f64, |sum, (g, d)| sum + g * d)
}
