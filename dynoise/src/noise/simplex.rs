use dynoise_util::{
    math::split_cell,
    noise::{dot, gradient},
};

use crate::permutation::PermutationTable;

/// Skewing factor for 2D, `(sqrt(3) - 1) / 2`.
const F2: f64 = 0.3660254037844386f64;
/// Unskewing factor for 2D, `(3 - sqrt(3)) / 6`.
const G2: f64 = 0.21132486540518713f64;
const F3: f64 = 1f64 / 3f64;
const G3: f64 = 1f64 / 6f64;

const SCALE_2D: f64 = 70f64;
const SCALE_3D: f64 = 32f64;

/// Simplex noise. One dimensional input is sampled along the x axis of the 2D variant.
pub fn sample(table: &PermutationTable, coords: &[f64]) -> f64 {
    match *coords {
        [x] => sample_2d(table, x, 0f64),
        [x, y] => sample_2d(table, x, y),
        [x, y, z] => sample_3d(table, x, y, z),
        _ => unreachable!("simplex noise sampled in {} dimensions", coords.len()),
    }
}

/// Radially falling-off contribution of one simplex corner.
#[inline]
fn corner(table: &PermutationTable, radius: f64, lattice: &[i64], delta: &[f64]) -> f64 {
    let t = radius - dot(delta, delta);
    if t < 0f64 {
        0f64
    } else {
        let t = t * t;
        t * t * dot(gradient(lattice.len(), table.hash(lattice)), delta)
    }
}

fn sample_2d(table: &PermutationTable, x: f64, y: f64) -> f64 {
    let s = (x + y) * F2;
    let (i, _) = split_cell(x + s);
    let (j, _) = split_cell(y + s);

    let t = (i.wrapping_add(j)) as f64 * G2;
    let x0 = x - (i as f64 - t);
    let y0 = y - (j as f64 - t);

    // Lower triangle goes (0,0) -> (1,0) -> (1,1), upper (0,0) -> (0,1) -> (1,1)
    let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

    let x1 = x0 - i1 as f64 + G2;
    let y1 = y0 - j1 as f64 + G2;
    let x2 = x0 - 1f64 + 2f64 * G2;
    let y2 = y0 - 1f64 + 2f64 * G2;

    let n0 = corner(table, 0.5f64, &[i, j], &[x0, y0]);
    let n1 = corner(
        table,
        0.5f64,
        &[i.wrapping_add(i1), j.wrapping_add(j1)],
        &[x1, y1],
    );
    let n2 = corner(
        table,
        0.5f64,
        &[i.wrapping_add(1), j.wrapping_add(1)],
        &[x2, y2],
    );

    SCALE_2D * (n0 + n1 + n2)
}

fn sample_3d(table: &PermutationTable, x: f64, y: f64, z: f64) -> f64 {
    let s = (x + y + z) * F3;
    let (i, _) = split_cell(x + s);
    let (j, _) = split_cell(y + s);
    let (k, _) = split_cell(z + s);

    let t = (i.wrapping_add(j).wrapping_add(k)) as f64 * G3;
    let x0 = x - (i as f64 - t);
    let y0 = y - (j as f64 - t);
    let z0 = z - (k as f64 - t);

    // Offsets of the second and third corner, ordered by the magnitude of the cell offsets
    let ((i1, j1, k1), (i2, j2, k2)) = if x0 >= y0 {
        if y0 >= z0 {
            ((1, 0, 0), (1, 1, 0))
        } else if x0 >= z0 {
            ((1, 0, 0), (1, 0, 1))
        } else {
            ((0, 0, 1), (1, 0, 1))
        }
    } else if y0 < z0 {
        ((0, 0, 1), (0, 1, 1))
    } else if x0 < z0 {
        ((0, 1, 0), (0, 1, 1))
    } else {
        ((0, 1, 0), (1, 1, 0))
    };

    let x1 = x0 - i1 as f64 + G3;
    let y1 = y0 - j1 as f64 + G3;
    let z1 = z0 - k1 as f64 + G3;
    let x2 = x0 - i2 as f64 + 2f64 * G3;
    let y2 = y0 - j2 as f64 + 2f64 * G3;
    let z2 = z0 - k2 as f64 + 2f64 * G3;
    let x3 = x0 - 1f64 + 3f64 * G3;
    let y3 = y0 - 1f64 + 3f64 * G3;
    let z3 = z0 - 1f64 + 3f64 * G3;

    let n0 = corner(table, 0.6f64, &[i, j, k], &[x0, y0, z0]);
    let n1 = corner(
        table,
        0.6f64,
        &[i.wrapping_add(i1), j.wrapping_add(j1), k.wrapping_add(k1)],
        &[x1, y1, z1],
    );
    let n2 = corner(
        table,
        0.6f64,
        &[i.wrapping_add(i2), j.wrapping_add(j2), k.wrapping_add(k2)],
        &[x2, y2, z2],
    );
    let n3 = corner(
        table,
        0.6f64,
        &[i.wrapping_add(1), j.wrapping_add(1), k.wrapping_add(1)],
        &[x3, y3, z3],
    );

    SCALE_3D * (n0 + n1 + n2 + n3)
}

#[cfg(test)]
mod test {
    use dynoise_config::RandomKind;

    use super::sample;
    use crate::permutation::PermutationTable;

    fn table() -> PermutationTable {
        PermutationTable::build(42, 256, RandomKind::Legacy).unwrap()
    }

    #[test]
    fn deterministic() {
        let a = table();
        let b = table();
        for i in 0..100 {
            let x = i as f64 * 0.1;
            let y = i as f64 * 0.13;
            assert_eq!(sample(&a, &[x, y]), sample(&b, &[x, y]));
            assert_eq!(sample(&a, &[x, y, -x]), sample(&b, &[x, y, -x]));
        }
    }

    #[test]
    fn one_dimension_follows_x_axis() {
        let table = table();
        for i in 0..50 {
            let x = i as f64 * 0.37;
            assert_eq!(sample(&table, &[x]), sample(&table, &[x, 0f64]));
        }
    }

    #[test]
    fn roughly_unit_range() {
        let table = table();
        let mut min = f64::MAX;
        let mut max = f64::MIN;
        for i in 0..200 {
            for j in 0..200 {
                let x = i as f64 * 0.047;
                let y = j as f64 * 0.053;
                for value in [sample(&table, &[x, y]), sample(&table, &[x, y, x * 0.5 - y])] {
                    min = min.min(value);
                    max = max.max(value);
                }
            }
        }
        assert!(min >= -1.1, "min {min}");
        assert!(max <= 1.1, "max {max}");
        assert!(max - min > 0.5, "simplex output barely varies: {min}..{max}");
    }

    #[test]
    fn continuous() {
        let table = table();
        let epsilon = 1e-7f64;
        for i in 0..500 {
            let x = i as f64 * 0.0731;
            let y = 1.7 - i as f64 * 0.0219;
            let a = sample(&table, &[x, y, 0.25]);
            let b = sample(&table, &[x + epsilon, y, 0.25]);
            assert!((a - b).abs() < 1e-4, "jump of {} at {x}", (a - b).abs());
        }
    }
}
