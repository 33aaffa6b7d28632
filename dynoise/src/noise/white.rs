use dynoise_util::{math::split_cell, noise::MAX_DIMENSION};

use crate::permutation::PermutationTable;

/// Cell white noise: the hashed value of the lattice cell containing the point. Neighboring
/// cells are uncorrelated and nothing is interpolated.
pub fn sample(table: &PermutationTable, coords: &[f64]) -> f64 {
    let mut cell = [0i64; MAX_DIMENSION];
    for (axis, &coord) in coords.iter().enumerate() {
        cell[axis] = split_cell(coord).0;
    }
    table.value(table.hash(&cell[..coords.len()]))
}
