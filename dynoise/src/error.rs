use dynoise_config::InvalidConfiguration;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NoiseError {
    #[error(transparent)]
    InvalidConfiguration(#[from] InvalidConfiguration),
    #[error("Invalid range: lower bound {lower} must not exceed upper bound {upper}")]
    InvalidRange { lower: f64, upper: f64 },
}
