use dynoise_util::FadeCurve;

use super::LatticeCell;
use crate::permutation::PermutationTable;

/// Value noise: every lattice corner carries a hashed value in `[-1, 1]` and the point blends
/// the corners of its cell. At integer coordinates the result is exactly that corner's value.
pub fn sample(table: &PermutationTable, fade: FadeCurve, coords: &[f64]) -> f64 {
    LatticeCell::new(coords, fade).blend(|lattice, _| table.value(table.hash(lattice)))
}
