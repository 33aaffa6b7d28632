use dynoise_util::random::{
    get_seed, legacy_rand::LegacyRand, xoroshiro128::Xoroshiro, RandomGenerator,
};
use log::{debug, warn};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use std::{fs, path::Path};

pub use dynoise_util::FadeCurve;
pub use error::{ConfigError, InvalidConfiguration};
pub use fractal::FractalConfig;

mod error;
mod fractal;
mod serde_seed;

const CONFIG_ROOT_FOLDER: &str = "config/";

/// Default number of entries in a permutation table.
pub const DEFAULT_TABLE_SIZE: usize = 256;
/// Largest permutation table a sampler will build.
pub const MAX_TABLE_SIZE: usize = 1 << 24;

/// The lattice evaluator a sampler runs for every octave.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NoiseKind {
    /// Interpolated pseudo-random corner values, in `[-1, 1]`.
    Value,
    /// Interpolated gradient dot products (Perlin noise), in `[-1, 1]`.
    #[default]
    Gradient,
    /// Summed radial corner kernels over a simplex grid, roughly in `[-1, 1]`.
    Simplex,
    /// One uncorrelated value per lattice cell, in `[-1, 1]`.
    White,
}

/// The generator that shuffles permutation tables. Part of the output contract: switching it
/// changes every table and therefore every sample for existing seeds.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RandomKind {
    #[default]
    Legacy,
    Xoroshiro,
}

impl RandomKind {
    pub fn create(self, seed: u64) -> RandomGenerator {
        match self {
            Self::Legacy => RandomGenerator::Legacy(LegacyRand::from_seed(seed)),
            Self::Xoroshiro => RandomGenerator::Xoroshiro(Xoroshiro::from_seed(seed)),
        }
    }
}

/// Everything needed to build a sampler. The same configuration always yields the same noise.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct NoiseConfig {
    /// Seed of the permutation shuffle.
    #[serde(with = "serde_seed")]
    pub seed: u64,
    /// Number of entries in the permutation table, a power of two.
    pub table_size: usize,
    /// Which lattice evaluator to run.
    pub kind: NoiseKind,
    /// Easing curve of the interpolation weights.
    pub fade_curve: FadeCurve,
    /// Generator used for the permutation shuffle.
    pub random: RandomKind,
    pub fractal: FractalConfig,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            table_size: DEFAULT_TABLE_SIZE,
            kind: NoiseKind::default(),
            fade_curve: FadeCurve::default(),
            random: RandomKind::default(),
            fractal: FractalConfig::default(),
        }
    }
}

impl NoiseConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    /// A default configuration with a seed that differs from call to call.
    pub fn with_random_seed() -> Self {
        Self::with_seed(get_seed())
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: Path::new("<string>").to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }
}

pub fn validate_table_size(table_size: usize) -> Result<(), InvalidConfiguration> {
    if !table_size.is_power_of_two() {
        return Err(InvalidConfiguration::new(
            "table_size",
            table_size,
            "must be a power of two",
        ));
    }
    if !(2..=MAX_TABLE_SIZE).contains(&table_size) {
        return Err(InvalidConfiguration::new(
            "table_size",
            table_size,
            "must be between 2 and 2^24",
        ));
    }
    Ok(())
}

pub trait LoadConfiguration {
    /// Reads the configuration below `exec_dir`, writing the defaults there first if the file
    /// does not exist yet. The result is always validated.
    fn load(exec_dir: &Path) -> Result<Self, ConfigError>
    where
        Self: Sized + Default + Serialize + DeserializeOwned,
    {
        let config_dir = exec_dir.join(CONFIG_ROOT_FOLDER);
        let path = config_dir.join(Self::get_path());

        let config = if path.exists() {
            let file_content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
                path: path.clone(),
                source,
            })?;

            toml::from_str(&file_content).map_err(|source| ConfigError::Parse {
                path: path.clone(),
                source,
            })?
        } else {
            let content = Self::default();

            if let Err(err) = write_default(&config_dir, &path, &content) {
                warn!(
                    "Couldn't write default config to {:?}. Reason: {}. Continuing with defaults",
                    &path, err
                );
            }

            content
        };

        config.validate()?;
        Ok(config)
    }

    fn get_path() -> &'static Path;

    fn validate(&self) -> Result<(), InvalidConfiguration>;
}

fn write_default<T>(config_dir: &Path, path: &Path, content: &T) -> Result<(), ConfigError>
where
    T: Serialize,
{
    if !config_dir.exists() {
        debug!("creating new config root folder");
        fs::create_dir_all(config_dir).map_err(|source| ConfigError::Io {
            path: config_dir.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, toml::to_string(content)?).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("wrote default noise config to {path:?}");
    Ok(())
}

impl LoadConfiguration for NoiseConfig {
    fn get_path() -> &'static Path {
        Path::new("noise.toml")
    }

    fn validate(&self) -> Result<(), InvalidConfiguration> {
        validate_table_size(self.table_size)?;
        self.fractal.validate()
    }
}
