//! Serde adapters for request bodies.

use serde::de::{self, Deserializer};
use serde::Deserialize;

/// Deserialize an `f64` from either a JSON number or a numeric string.
///
/// Older clients send measurements such as `area_size` as strings (`"40"`);
/// both forms normalize to the same number. Non-finite values are rejected.
pub fn f64_from_number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        Text(String),
    }

    let value = match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => n,
        NumberOrString::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("expected a number, got '{s}'")))?,
    };

    if !value.is_finite() {
        return Err(de::Error::custom("number must be finite"));
    }
    Ok(value)
}
