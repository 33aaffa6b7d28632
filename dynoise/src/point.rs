use dynoise_util::noise::MAX_DIMENSION;

mod private {
    pub trait Sealed {}
}

/// A sample position in one, two or three dimensions.
pub trait Point: Copy + private::Sealed {
    const DIMENSION: usize;

    /// The coordinates, padded with zeros past `DIMENSION`.
    fn coords(&self) -> [f64; MAX_DIMENSION];
}

macro_rules! impl_point {
    ($ty:ty, $dimension:expr, |$p:ident| $coords:expr) => {
        impl private::Sealed for $ty {}

        impl Point for $ty {
            const DIMENSION: usize = $dimension;

            #[inline]
            fn coords(&self) -> [f64; MAX_DIMENSION] {
                let $p = self;
                $coords
            }
        }
    };
}

impl_point!(f64, 1, |p| [*p, 0f64, 0f64]);
impl_point!([f64; 1], 1, |p| [p[0], 0f64, 0f64]);
impl_point!([f64; 2], 2, |p| [p[0], p[1], 0f64]);
impl_point!([f64; 3], 3, |p| *p);
impl_point!((f64, f64), 2, |p| [p.0, p.1, 0f64]);
impl_point!((f64, f64, f64), 3, |p| [p.0, p.1, p.2]);
