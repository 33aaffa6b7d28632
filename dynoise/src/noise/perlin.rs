use dynoise_util::{
    noise::{dot, gradient},
    FadeCurve,
};

use super::LatticeCell;
use crate::permutation::PermutationTable;

/// `2 / sqrt(dimension)`. With unit gradients the blended sum never exceeds `sqrt(dimension) / 2`,
/// so this stretches the output onto `[-1, 1]`.
const SCALE: [f64; 3] = [2f64, std::f64::consts::SQRT_2, 1.1547005383792517f64];

/// Gradient (Perlin) noise: every lattice corner carries a hashed unit gradient and contributes
/// the dot product of that gradient with the vector from the corner to the point. The output is
/// zero at every lattice point.
pub fn sample(table: &PermutationTable, fade: FadeCurve, coords: &[f64]) -> f64 {
    let dimension = coords.len();
    let sum = LatticeCell::new(coords, fade).blend(|lattice, delta| {
        dot(gradient(dimension, table.hash(lattice)), delta)
    });
    sum * SCALE[dimension - 1]
}

#[cfg(test)]
mod perlin_noise_sampler_test {
    use dynoise_config::RandomKind;
    use dynoise_util::{assert_eq_delta, FadeCurve};

    use super::sample;
    use crate::permutation::PermutationTable;

    fn table(seed: u64) -> PermutationTable {
        PermutationTable::build(seed, 256, RandomKind::Legacy).unwrap()
    }

    #[test]
    fn zero_at_lattice_points() {
        let table = table(42);
        for x in -10..10 {
            for y in -10..10 {
                assert_eq!(sample(&table, FadeCurve::Quintic, &[x as f64]), 0f64);
                assert_eq!(sample(&table, FadeCurve::Quintic, &[x as f64, y as f64]), 0f64);
                assert_eq!(
                    sample(&table, FadeCurve::Cubic, &[x as f64, y as f64, 1f64]),
                    0f64
                );
            }
        }
    }

    #[test]
    fn bounded() {
        let table = table(7);
        for i in 0..40 {
            for j in 0..40 {
                let x = i as f64 * 0.137 - 2.5;
                let y = j as f64 * 0.113 + 0.05;
                for coords in [&[x][..], &[x, y][..], &[x, y, x - y][..]] {
                    let value = sample(&table, FadeCurve::Quintic, coords);
                    assert!(value.abs() <= 1f64 + 1e-9, "{value} at {coords:?}");
                }
            }
        }
    }

    #[test]
    fn continuous_across_cell_boundaries() {
        let table = table(42);
        let epsilon = 1e-7f64;
        for x in -5..5 {
            let boundary = x as f64;
            let below = sample(&table, FadeCurve::Quintic, &[boundary - epsilon, 0.3]);
            let above = sample(&table, FadeCurve::Quintic, &[boundary + epsilon, 0.3]);
            // The slope of the scaled noise is bounded well below 10
            assert!((above - below).abs() <= 10f64 * 2f64 * epsilon);
        }
    }

    #[test]
    fn sample_golden() {
        let table = table(42);
        let values = [
            ([0.25f64, 0f64, 0f64], 1, 0.603515625f64),
            ([0.5f64, 0.5f64, 0f64], 2, -0.3535533905932738f64),
            ([1.3f64, -2.7f64, 0f64], 2, -0.18466982942292312f64),
            ([3.7f64, 0.2f64, -1.9f64], 3, -0.3458056226201728f64),
        ];
        for (coords, dimension, expected) in values {
            let value = sample(&table, FadeCurve::Quintic, &coords[..dimension]);
            assert_eq_delta!(value, expected, 1e-12f64);
        }
    }
}
