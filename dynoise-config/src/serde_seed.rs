//! TOML integers are signed 64-bit, so a `u64` seed is stored as the `i64` with the same bits.
//! Seeds at or above `2^63` show up negative in the file.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub fn serialize<S>(seed: &u64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    (*seed as i64).serialize(serializer)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let seed: i64 = Deserialize::deserialize(deserializer)?;
    Ok(seed as u64)
}
