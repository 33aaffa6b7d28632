use num_traits::Float;
use serde::{Deserialize, Serialize};

#[inline]
pub fn lerp<T>(delta: T, start: T, end: T) -> T
where
    T: Float,
{
    start + delta * (end - start)
}

#[inline]
pub fn lerp_progress<T>(value: T, start: T, end: T) -> T
where
    T: Float,
{
    (value - start) / (end - start)
}

#[inline]
pub fn map<T>(value: T, old_start: T, old_end: T, new_start: T, new_end: T) -> T
where
    T: Float,
{
    lerp(lerp_progress(value, old_start, old_end), new_start, new_end)
}

/// Bilinear interpolation across the four corners of a unit square, blending along x first.
/// Gives the same bits as [`lerp_corners`] over the corners in `x0y0, x1y0, x0y1, x1y1` order.
pub fn lerp2(delta_x: f64, delta_y: f64, x0y0: f64, x1y0: f64, x0y1: f64, x1y1: f64) -> f64 {
    lerp(
        delta_y,
        lerp(delta_x, x0y0, x1y0),
        lerp(delta_x, x0y1, x1y1),
    )
}

/// Trilinear counterpart of [`lerp2`], blending along x, then y, then z.
#[allow(clippy::too_many_arguments)]
pub fn lerp3(
    delta_x: f64,
    delta_y: f64,
    delta_z: f64,
    x0y0z0: f64,
    x1y0z0: f64,
    x0y1z0: f64,
    x1y1z0: f64,
    x0y0z1: f64,
    x1y0z1: f64,
    x0y1z1: f64,
    x1y1z1: f64,
) -> f64 {
    lerp(
        delta_z,
        lerp2(delta_x, delta_y, x0y0z0, x1y0z0, x0y1z0, x1y1z0),
        lerp2(delta_x, delta_y, x0y0z1, x1y0z1, x0y1z1, x1y1z1),
    )
}

/// Reduces the `2^weights.len()` corner values of a lattice cell to a single value by
/// repeated linear interpolation, one axis at a time.
///
/// Corner `i` holds the value of the corner whose offset along axis `d` is bit `d` of `i`.
/// The x axis is blended first, so for three axes this is the same as
/// `lerp(z, lerp(y, lerp(x, ..), lerp(x, ..)), lerp(y, ..))`.
#[inline]
pub fn lerp_corners(weights: &[f64], corners: &mut [f64]) -> f64 {
    let mut len = 1 << weights.len();
    debug_assert!(corners.len() >= len);

    for &weight in weights {
        len >>= 1;
        for i in 0..len {
            corners[i] = lerp(weight, corners[2 * i], corners[2 * i + 1]);
        }
    }
    corners[0]
}

/// Splits a coordinate into its lattice cell and the offset inside that cell.
///
/// The cell saturates at the `i64` bounds for coordinates too large to be represented.
#[inline]
pub fn split_cell(coord: f64) -> (i64, f64) {
    let floor = coord.floor();
    (floor as i64, coord - floor)
}

/// The easing curve applied to interpolation weights. Changing it changes every output, so it is
/// part of a sampler's identity.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FadeCurve {
    /// `6t^5 - 15t^4 + 10t^3`, zero first and second derivative at both ends.
    #[default]
    Quintic,
    /// `3t^2 - 2t^3`, zero first derivative at both ends.
    Cubic,
}

impl FadeCurve {
    #[inline]
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Quintic => t * t * t * (t * (t * 6f64 - 15f64) + 10f64),
            Self::Cubic => t * t * (3f64 - 2f64 * t),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{FadeCurve, lerp, lerp2, lerp3, lerp_corners, map, split_cell};

    #[test]
    fn fade_endpoints_are_exact() {
        for curve in [FadeCurve::Quintic, FadeCurve::Cubic] {
            assert_eq!(curve.apply(0f64), 0f64);
            assert_eq!(curve.apply(1f64), 1f64);
            assert_eq!(curve.apply(0.5f64), 0.5f64);
        }
    }

    #[test]
    fn fade_is_monotonic() {
        for curve in [FadeCurve::Quintic, FadeCurve::Cubic] {
            let mut last = curve.apply(0f64);
            for i in 1..=1000 {
                let value = curve.apply(i as f64 / 1000f64);
                assert!(value >= last, "{curve:?} decreased at step {i}");
                assert!((0f64..=1f64).contains(&value));
                last = value;
            }
        }
    }

    #[test]
    fn fade_flat_at_ends() {
        let h = 1e-6f64;
        for curve in [FadeCurve::Quintic, FadeCurve::Cubic] {
            let start_slope = (curve.apply(h) - curve.apply(0f64)) / h;
            let end_slope = (curve.apply(1f64) - curve.apply(1f64 - h)) / h;
            assert!(start_slope.abs() < 1e-4, "{curve:?} start slope {start_slope}");
            assert!(end_slope.abs() < 1e-4, "{curve:?} end slope {end_slope}");
        }
    }

    #[test]
    fn quintic_values() {
        let curve = FadeCurve::Quintic;
        assert_eq!(curve.apply(0.25f64), 0.103515625f64);
        assert_eq!(curve.apply(0.75f64), 0.896484375f64);
        assert_eq!(FadeCurve::Cubic.apply(0.25f64), 0.15625f64);
    }

    #[test]
    fn lerp_basics() {
        assert_eq!(lerp(0f64, 3f64, 7f64), 3f64);
        assert_eq!(lerp(1f64, 3f64, 7f64), 7f64);
        assert_eq!(lerp(0.5f64, 3f64, 7f64), 5f64);
        assert_eq!(map(5f64, 0f64, 10f64, -1f64, 1f64), 0f64);
    }

    #[test]
    fn corner_blending_matches_nested_lerps() {
        let (x, y, z) = (0.3f64, 0.6f64, 0.9f64);
        let v = [1f64, -2f64, 3f64, 0.5f64, -1.5f64, 2.5f64, 4f64, -3f64];
        let expected = lerp3(x, y, z, v[0], v[1], v[2], v[3], v[4], v[5], v[6], v[7]);

        let mut corners = v;
        assert_eq!(lerp_corners(&[x, y, z], &mut corners), expected);

        let mut corners = [v[0], v[1], v[2], v[3]];
        let expected = lerp2(x, y, v[0], v[1], v[2], v[3]);
        assert_eq!(lerp_corners(&[x, y], &mut corners), expected);

        let mut corners = [2f64, 4f64];
        assert_eq!(lerp_corners(&[0.25f64], &mut corners), 2.5f64);
    }

    #[test]
    fn cell_split() {
        assert_eq!(split_cell(1.25f64), (1, 0.25f64));
        assert_eq!(split_cell(-0.25f64), (-1, 0.75f64));
        assert_eq!(split_cell(-1f64), (-1, 0f64));
        assert_eq!(split_cell(3f64), (3, 0f64));
    }
}
