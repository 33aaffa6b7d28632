//! Deterministic coherent noise.
//!
//! A [`Sampler`] binds a seed and a [`NoiseConfig`] to one of the lattice evaluators in
//! [`noise`] and layers octaves of it. Identical seeds, configurations and coordinates always
//! produce bit-identical values.

pub mod error;
pub mod fractal;
pub mod map;
pub mod noise;
pub mod permutation;
pub mod point;
pub mod sampler;

pub use dynoise_config::{
    FadeCurve, FractalConfig, InvalidConfiguration, NoiseConfig, NoiseKind, RandomKind,
};
pub use error::NoiseError;
pub use map::NoiseMap;
pub use permutation::PermutationTable;
pub use point::Point;
pub use sampler::Sampler;
