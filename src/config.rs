//! Deployment configuration.
//!
//! The bucket boundary list is a recognized config option rather than a
//! hardcoded constant, validated for format and strict monotonicity at load
//! time so a bad deployment fails fast instead of producing nonsense buckets.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::types::BucketBoundaries;

/// Seconds between refresh cycles when watch mode is enabled and the CLI
/// gives no interval.
pub const DEFAULT_REFRESH_SECS: u64 = 60;

#[derive(Deserialize)]
struct RawConfig {
    endpoint: String,
    shop: String,
    #[serde(default)]
    bucket_boundaries: Option<Vec<String>>,
    #[serde(default = "default_refresh_secs")]
    refresh_secs: u64,
}

fn default_refresh_secs() -> u64 {
    DEFAULT_REFRESH_SECS
}

/// Validated deployment configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Events endpoint URL, queried as `GET <endpoint>?shop=<shop>`
    pub endpoint: String,
    /// Shop domain passed to the endpoint
    pub shop: String,
    /// Bucket edges; hourly when the file omits them
    pub boundaries: BucketBoundaries,
    /// Seconds between refresh cycles in watch mode
    pub refresh_secs: u64,
}

impl Config {
    /// Load and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let content = fs::read_to_string(path)?;
        Config::from_toml(&content)
    }

    fn from_toml(content: &str) -> Result<Config, ConfigError> {
        let raw: RawConfig = toml::from_str(content)?;
        let boundaries = match raw.bucket_boundaries {
            Some(list) => BucketBoundaries::new(list)?,
            None => BucketBoundaries::hourly(),
        };
        Ok(Config {
            endpoint: raw.endpoint,
            shop: raw.shop,
            boundaries,
            refresh_secs: raw.refresh_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoundaryError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_full_config() {
        let config = Config::from_toml(
            r#"
            endpoint = "https://pixel.example.com/api/events"
            shop = "lucky-birds-store.myshopify.com"
            bucket_boundaries = ["09:00", "12:00", "15:00", "18:00"]
            refresh_secs = 30
            "#,
        )
        .unwrap();

        assert_eq!(config.endpoint, "https://pixel.example.com/api/events");
        assert_eq!(config.shop, "lucky-birds-store.myshopify.com");
        assert_eq!(config.boundaries.as_slice(), ["09:00", "12:00", "15:00", "18:00"]);
        assert_eq!(config.refresh_secs, 30);
    }

    #[test]
    fn test_boundaries_default_to_hourly() {
        let config = Config::from_toml(
            r#"
            endpoint = "https://pixel.example.com/api/events"
            shop = "shop.example.com"
            "#,
        )
        .unwrap();

        assert_eq!(config.boundaries, BucketBoundaries::hourly());
        assert_eq!(config.refresh_secs, DEFAULT_REFRESH_SECS);
    }

    #[test]
    fn test_invalid_boundaries_fail_at_load() {
        let result = Config::from_toml(
            r#"
            endpoint = "https://pixel.example.com/api/events"
            shop = "shop.example.com"
            bucket_boundaries = ["12:00", "09:00"]
            "#,
        );

        assert!(matches!(
            result,
            Err(ConfigError::Boundaries(BoundaryError::NotIncreasing(_, _)))
        ));
    }

    #[test]
    fn test_missing_endpoint_is_a_parse_error() {
        let result = Config::from_toml(r#"shop = "shop.example.com""#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
